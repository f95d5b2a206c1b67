/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach catalogs, model files, formatters and the console.
pub mod catalog_reader;
pub mod formatter;
pub mod model_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use catalog_reader::{CatalogReader, Catalogs};
pub use formatter::ReportFormatter;
pub use model_reader::ModelReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
