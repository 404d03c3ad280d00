//! tsuml: pattern-based class/import extraction for TypeScript trees, and
//! UML-style diagrams rendered through Graphviz or painted as raster images.

pub mod analyze;
pub mod cli;
pub mod config;
pub mod diagram;
pub mod emit;
pub mod error;
pub mod graph;
pub mod render;
pub mod scan;
pub mod types;

pub use error::{Error, Result};
