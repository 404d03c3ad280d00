mod json;

pub use json::{ProjectInfo, ScanReport};
