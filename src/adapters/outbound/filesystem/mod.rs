/// Filesystem adapters for writing reports
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
