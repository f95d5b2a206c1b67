/// Mock implementations for testing
mod mock_catalog_reader;
mod mock_model_reader;
mod mock_progress_reporter;

pub use mock_catalog_reader::MockCatalogReader;
pub use mock_model_reader::MockModelReader;
pub use mock_progress_reporter::MockProgressReporter;
