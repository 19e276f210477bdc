//! Colored terminal output for bundler progress.

use colored::Colorize;

const RULE_WIDTH: usize = 50;

/// Prints pipeline progress to the terminal.
///
/// Errors always go to stderr; everything else is suppressed in quiet mode.
/// Verbose lines are printed only in verbose mode.
#[derive(Debug, Clone, Copy)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Title framed by two rules.
    pub fn banner(&self, title: &str) {
        if self.quiet {
            return;
        }
        let rule = "=".repeat(RULE_WIDTH);
        println!();
        println!("{}", rule.bright_blue());
        println!("{}", title.bold());
        println!("{}", rule.bright_blue());
    }

    /// Section heading.
    pub fn section(&self, title: &str) {
        if !self.quiet {
            println!();
            println!("{}", title.bold().underline());
        }
    }

    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            println!("{}", message.dimmed());
        }
    }

    pub fn progress(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "→".cyan().bold(), message);
        }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green().bold(), message);
        }
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    /// Indented line under a section.
    pub fn indent(&self, message: &str) {
        if !self.quiet {
            println!("  {message}");
        }
    }
}
