//! Command-line driver for tidyup.
//!
//! This module handles one organization pass:
//! - Scanning the working directory for regular files
//! - Claiming files category by category, in table order
//! - Relocating each claimed batch
//! - Building and printing the summary

use crate::file_category::CategoryTable;
use crate::file_organizer::{FileOrganizer, MovedFiles, OrganizeError, OrganizeResult};
use crate::output::{Notifier, OutputFormatter};
use crate::report::Report;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Lists the regular files directly inside `base_path`, sorted by name.
///
/// Directories and symlinks are left out, as are names that are not valid UTF-8.
pub fn scan_files(base_path: &Path) -> OrganizeResult<Vec<String>> {
    let entries = fs::read_dir(base_path).map_err(|e| OrganizeError::ReadDirFailed {
        path: base_path.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };

        match entry.file_type() {
            Ok(file_type) if file_type.is_file() => {}
            Ok(_) => continue,
            Err(e) => {
                warn!(file = ?entry.file_name(), error = %e, "skipping entry of unknown type");
                continue;
            }
        }

        match entry.file_name().into_string() {
            Ok(name) => files.push(name),
            Err(name) => warn!(file = ?name, "skipping file with non UTF-8 name"),
        }
    }

    files.sort();
    debug!(count = files.len(), path = %base_path.display(), "scanned directory");
    Ok(files)
}

/// Runs one scan-classify-move pass over `base_path`.
///
/// Each category, in table order, claims every remaining file its rule matches;
/// the batch is relocated and the claimed names leave the pool, so a later
/// category never sees them. Files nobody claims stay where they are.
///
/// Returns the record of files that were actually moved. A fatal error stops the
/// pass immediately and earlier moves are not rolled back.
pub fn organize(
    base_path: &Path,
    table: &CategoryTable,
    notifier: &mut impl Notifier,
) -> OrganizeResult<MovedFiles> {
    let mut pool = scan_files(base_path)?;
    let mut moved = MovedFiles::new();

    for entry in table.iter() {
        let (claimed, remaining): (Vec<String>, Vec<String>) =
            pool.into_iter().partition(|file| entry.matches(file));
        pool = remaining;

        if claimed.is_empty() {
            continue;
        }

        debug!(
            category = entry.name,
            count = claimed.len(),
            "claimed files"
        );

        FileOrganizer::relocate(base_path, &claimed, entry.name, &mut moved, notifier)?;
    }

    debug!(
        moved = moved.len(),
        untouched = pool.len(),
        "organization pass complete"
    );
    Ok(moved)
}

/// Organizes `base_path` with the standard table and prints the summary.
///
/// Progress notices go to `notifier` while the pass runs. The summary is printed
/// only when the pass completes.
///
/// # Examples
///
/// ```no_run
/// use tidyup::cli::run_cli;
/// use tidyup::output::ConsoleNotifier;
/// use std::path::Path;
///
/// match run_cli(Path::new("."), &mut ConsoleNotifier) {
///     Ok(report) => println!("{} files organized", report.total_files()),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run_cli(base_path: &Path, notifier: &mut impl Notifier) -> OrganizeResult<Report> {
    let table = CategoryTable::standard();
    let moved = organize(base_path, &table, notifier)?;
    let report = Report::build(&moved, &table);
    OutputFormatter::summary(&report);
    Ok(report)
}
