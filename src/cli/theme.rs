use console::style;

/// Styled terminal output for command results. Errors always print; everything
/// else is dropped in quiet mode.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    quiet: bool,
}

impl Console {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("  {} {}", style("✓").green(), message);
        }
    }

    pub fn detail(&self, label: &str, value: impl std::fmt::Display) {
        if !self.quiet {
            println!("    {:<12} {}", style(label).dim(), style(value).cyan());
        }
    }

    pub fn warning(&self, message: &str) {
        if !self.quiet {
            println!("  {} {}", style("!").yellow(), message);
        }
    }
}

pub fn print_error(message: &str) {
    eprintln!("  {} {}", style("✗").red(), style(message).red());
}
