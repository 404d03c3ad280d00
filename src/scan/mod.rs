mod filter;
mod walker;

pub use filter::should_include_file;
pub use walker::{relative_path, scan_directory, scan_file, SourceScanner};
