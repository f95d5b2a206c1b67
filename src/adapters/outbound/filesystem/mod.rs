/// Filesystem adapters for model files and report output
mod file_reader;
mod file_writer;

pub use file_reader::{parse_model_file, FileSystemReader};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
