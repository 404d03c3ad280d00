mod analyze;
mod args;
mod sketch;
mod theme;
mod uml;

pub use analyze::run_analyze;
pub use args::{Args, Command};
pub use sketch::run_sketch;
pub use theme::{print_error, Console};
pub use uml::run_uml;
