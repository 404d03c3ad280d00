use serde::Serialize;

/// Extracted facts for one scanned source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Path relative to the scan root, `/`-separated
    pub path: String,
    /// Class and interface names in source order
    pub declared_types: Vec<String>,
    /// Import statements in source order
    pub imports: Vec<ImportRecord>,
}

/// A single-symbol import: `import { Baz } from './baz'`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportRecord {
    pub symbol: String,
    pub module_path: String,
}

impl ImportRecord {
    pub fn new(symbol: impl Into<String>, module_path: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            module_path: module_path.into(),
        }
    }
}
