//! tidyup - sort a directory's files into category subdirectories
//!
//! This library scans a single directory for regular files, classifies each one by
//! filename against an ordered category table, moves matching files into
//! subdirectories named after their category, and summarizes what moved.

pub mod cli;
pub mod file_category;
pub mod file_organizer;
pub mod output;
pub mod report;

pub use file_category::{CategoryEntry, CategoryTable, Rule};
pub use file_organizer::{FileOrganizer, MovedFiles, OrganizeError, OrganizeResult};
pub use output::{ConsoleNotifier, Notice, Notifier};
pub use report::{CategoryReport, Report};

pub use cli::{organize, run_cli};
