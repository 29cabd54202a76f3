//! CLI output formatting

use colored::Colorize;

/// Output helper for consistent CLI formatting
pub struct Output;

impl Output {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message.
    ///
    /// Goes to stderr so it never mixes with the wrapped command's stdout.
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Format a program name consistently
    pub fn program(name: &str) -> String {
        name.cyan().bold().to_string()
    }
}
