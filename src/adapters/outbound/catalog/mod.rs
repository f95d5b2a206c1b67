/// Catalog adapters: bundled data and user-supplied files
mod embedded;
mod file_catalog_reader;
mod parsing;

pub use embedded::EmbeddedCatalogReader;
pub use file_catalog_reader::FileSystemCatalogReader;
