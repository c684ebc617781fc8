//! Operator-facing output for glerbl
//!
//! Consistent, styled messages in the manner of lint-staged and similar
//! tools, plus the renderer for hook run reports.

use crate::checks::Status;
use crate::hooks::{CheckReport, RunReport};
use console::style;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✔").green(), message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        // Errors are always shown, even in quiet mode
        eprintln!("{} {}", style("✖").red(), message);
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("⚠").yellow(), message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("ℹ").blue(), message);
        }
    }

    /// Print a verbose message (only if verbose mode is enabled).
    ///
    /// Goes to stderr so machine-readable reports on stdout stay clean.
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            eprintln!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Print a header/title
    pub fn header(&self, title: &str) {
        if !self.quiet {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Print a table row
    pub fn table_row(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {:<24} {}", style(key).dim(), value);
        }
    }

    /// Print a list item
    pub fn list_item(&self, item: &str) {
        if !self.quiet {
            println!("  • {item}");
        }
    }

    /// Print blank line
    pub fn blank_line(&self) {
        if !self.quiet {
            println!();
        }
    }

    /// Render a hook run report.
    ///
    /// Passing checks are hidden in quiet mode; failures and errors are
    /// always printed, in execution order.
    pub fn report(&self, report: &RunReport) {
        self.header(&format!(
            "{} ({} checks)",
            report.hook(),
            report.checks().len()
        ));

        for check in report.checks() {
            self.check_report(check);
        }

        let failed = report.count(Status::Fail);
        let errored = report.count(Status::Error);
        if report.is_pass() {
            self.blank_line();
            self.success(&format!("{} passed", report.hook()));
        } else {
            eprintln!();
            self.error(&format!(
                "{} rejected: {} failed, {} errored, {} passed",
                report.hook(),
                failed,
                errored,
                report.count(Status::Pass)
            ));
        }
    }

    fn check_report(&self, check: &CheckReport) {
        let result = check.result();
        match result.status {
            Status::Pass => {
                if !self.quiet {
                    let timing = if self.verbose {
                        format!(" {}", style(format!("({:?})", check.duration())).dim())
                    } else {
                        String::new()
                    };
                    println!("{} {}{}", style("✔").green(), check.identifier(), timing);
                }
                return;
            }
            Status::Fail => eprintln!(
                "{} {} {}",
                style("✖").red(),
                style(check.identifier()).bold(),
                style("failed").red()
            ),
            Status::Error => eprintln!(
                "{} {} {}",
                style("✖").red().bold(),
                style(check.identifier()).bold(),
                style("errored").red().bold()
            ),
        }

        let message = result.message.as_deref().unwrap_or_default();
        if result.locations.is_empty() {
            for line in message.lines() {
                eprintln!("    {line}");
            }
            return;
        }

        // The message already lists the locations; print its summary line and
        // the styled locations instead of repeating them.
        if let Some(summary) = message.lines().next() {
            eprintln!("    {summary}");
        }
        for location in &result.locations {
            match location.line {
                Some(line) => eprintln!(
                    "    {} {}:{}",
                    style("•").cyan(),
                    style(location.path.display()).underlined(),
                    style(line).yellow()
                ),
                None => eprintln!(
                    "    {} {}",
                    style("•").cyan(),
                    style(location.path.display()).underlined()
                ),
            }
        }
    }
}
