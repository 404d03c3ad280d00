mod parser;

pub use parser::{analyze_source, extract_declared_types, extract_imports};
