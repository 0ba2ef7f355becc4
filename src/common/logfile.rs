use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use colored::Colorize;

use super::errors::SweepError;

/// Terminal output with an optional append-only mirror on disk.
///
/// Every line printed to the terminal is also written to the log file as
/// `YYYY-MM-DD HH:MM:SS [LEVEL] message`, uncolored. Quiet mode suppresses
/// the terminal half only; the file keeps receiving everything.
pub struct EventLog {
    file: Option<File>,
    quiet: bool,
}

impl EventLog {
    /// Open the event log. An unwritable log target is a pre-flight failure.
    pub fn open(path: Option<&Path>, quiet: bool) -> Result<Self, SweepError> {
        let file = match path {
            Some(p) => Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(p)
                    .map_err(|source| SweepError::LogFile {
                        path: p.to_path_buf(),
                        source,
                    })?,
            ),
            None => None,
        };
        Ok(Self { file, quiet })
    }

    /// A log that only prints, for tests and internal callers.
    pub fn terminal_only(quiet: bool) -> Self {
        Self { file: None, quiet }
    }

    fn append(&mut self, level: &str, msg: &str) {
        if let Some(ref mut f) = self.file {
            let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
            // A failing mirror write must not take down the run
            let _ = writeln!(f, "{} [{}] {}", stamp, level, msg);
        }
    }

    /// Plain line with no level marker on the terminal
    pub fn plain(&mut self, msg: impl AsRef<str>) {
        let msg = msg.as_ref();
        if !self.quiet {
            println!("{}", msg);
        }
        self.append("INFO", msg.trim());
    }

    pub fn info(&mut self, msg: impl AsRef<str>) {
        let msg = msg.as_ref();
        if !self.quiet {
            println!("  {} {}", "•".dimmed(), msg);
        }
        self.append("INFO", msg);
    }

    pub fn success(&mut self, msg: impl AsRef<str>) {
        let msg = msg.as_ref();
        if !self.quiet {
            println!("  {} {}", "✓".green(), msg);
        }
        self.append("SUCCESS", msg);
    }

    pub fn warn(&mut self, msg: impl AsRef<str>) {
        let msg = msg.as_ref();
        if !self.quiet {
            println!("  {} {}", "⚠".yellow(), msg);
        }
        self.append("WARN", msg);
    }

    /// Mirror a line that reached the terminal outside the leveled
    /// printers — interactive prompts, machine-readable output. Writes to
    /// the file only; the caller already did the terminal half.
    pub fn mirror(&mut self, msg: impl AsRef<str>) {
        self.append("INFO", msg.as_ref().trim());
    }

    pub fn error(&mut self, msg: impl AsRef<str>) {
        let msg = msg.as_ref();
        // Errors are printed even in quiet mode
        eprintln!("  {} {}", "✗".red(), msg);
        self.append("ERROR", msg);
    }
}
