use colored::{Color, Colorize};

const SUCCESS: (&str, Color) = ("✓", Color::Green);
const INFO: (&str, Color) = ("•", Color::Blue);
const WARNING: (&str, Color) = ("!", Color::Yellow);
const ERROR: (&str, Color) = ("error:", Color::Red);

/// Status line printer honouring `--quiet` and `--no-color`.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
}

impl OutputManager {
    pub fn new(quiet: bool, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { quiet, no_color }
    }

    /// Display a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{}", self.render(SUCCESS, message));
        }
    }

    /// Display an informational message
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", self.render(INFO, message));
        }
    }

    /// Display a warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", self.render(WARNING, message));
        }
    }

    /// Display an error message. Errors are printed even when quiet.
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.render(ERROR, message));
    }

    fn render(&self, (icon, color): (&str, Color), message: &str) -> String {
        if self.no_color {
            format!("{icon} {message}")
        } else {
            format!("{} {message}", icon.color(color).bold())
        }
    }
}
