//! Output formatting and styling module.
//!
//! Everything the organizer tells the user goes through here. The driver and the
//! relocator raise [`Notice`]s through a [`Notifier`], so the same code path can
//! print to a terminal or be captured by tests.

use crate::report::Report;
use colored::*;
use std::fmt;

/// A progress event raised while organizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A category directory did not exist and was created.
    DirectoryCreated { directory: String },
    /// A file was moved into its category directory.
    FileMoved { file: String, directory: String },
    /// A selected file was gone by the time it was moved.
    FileNotFound { file: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::DirectoryCreated { directory } => {
                write!(f, "*****Created Directory: {}*****", directory)
            }
            Notice::FileMoved { file, directory } => write!(f, "Moving {} to {}", file, directory),
            Notice::FileNotFound { file } => write!(f, "File not found: {}", file),
        }
    }
}

/// Receives progress notices as they happen.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Collects notices in order. Handy for inspecting a run after the fact.
impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

/// Streams notices to the terminal as they arrive.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notice: Notice) {
        match &notice {
            Notice::DirectoryCreated { .. } => {
                OutputFormatter::info(&notice.to_string());
                OutputFormatter::plain("");
            }
            Notice::FileMoved { .. } => OutputFormatter::plain(&notice.to_string()),
            Notice::FileNotFound { .. } => OutputFormatter::warning(&notice.to_string()),
        }
    }
}

/// Manages all CLI output with consistent styling.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints an error message in red to stderr.
    pub fn error(message: &str) {
        eprintln!("{}", message.red());
    }

    /// Prints a warning message in yellow.
    pub fn warning(message: &str) {
        println!("{}", message.yellow());
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a regular message without styling.
    pub fn plain(message: &str) {
        println!("{}", message);
    }

    /// Prints the end-of-run summary.
    ///
    /// The header is always printed, followed by one line per category that
    /// received files. Each category line is followed by a blank line.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tidyup::file_category::CategoryTable;
    /// use tidyup::file_organizer::MovedFiles;
    /// use tidyup::output::OutputFormatter;
    /// use tidyup::report::Report;
    ///
    /// let mut moved = MovedFiles::new();
    /// moved.record("photo.jpg");
    /// OutputFormatter::summary(&Report::build(&moved, &CategoryTable::standard()));
    /// ```
    pub fn summary(report: &Report) {
        println!("{}", Report::HEADER.bold());
        println!("{}", Report::SEPARATOR);
        for category in report.categories() {
            println!("{}\n", category);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_text() {
        let created = Notice::DirectoryCreated {
            directory: "Images".to_string(),
        };
        let moved = Notice::FileMoved {
            file: "photo.jpg".to_string(),
            directory: "Images".to_string(),
        };
        let missing = Notice::FileNotFound {
            file: "ghost.log".to_string(),
        };

        assert_eq!(created.to_string(), "*****Created Directory: Images*****");
        assert_eq!(moved.to_string(), "Moving photo.jpg to Images");
        assert_eq!(missing.to_string(), "File not found: ghost.log");
    }

    #[test]
    fn test_vec_collects_in_order() {
        let mut notices: Vec<Notice> = Vec::new();
        notices.notify(Notice::FileNotFound {
            file: "a".to_string(),
        });
        notices.notify(Notice::FileNotFound {
            file: "b".to_string(),
        });
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[1].to_string(), "File not found: b");
    }
}
