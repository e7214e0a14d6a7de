//! File organization system for moving files into category directories.
//!
//! This module creates category subdirectories on demand, moves batches of files
//! into them, and keeps the ordered record of every file that actually moved.

use crate::output::{Notice, Notifier};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that abort an organization run.
///
/// A file that disappears between the scan and its move is not one of these;
/// the relocator reports it and carries on.
#[derive(Debug, Error)]
pub enum OrganizeError {
    /// The working directory could not be listed.
    #[error("Failed to read directory {}: {source}", path.display())]
    ReadDirFailed { path: PathBuf, source: io::Error },

    /// Failed to create a category directory.
    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreationFailed { path: PathBuf, source: io::Error },

    /// A file with the same name already sits in the category directory.
    #[error("Destination path {} already exists", path.display())]
    DestinationExists { path: PathBuf },

    /// Failed to move a file to its category directory.
    #[error("Failed to move {} to {}: {source}", from.display(), to.display())]
    FileMoveFailure {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
}

/// Result type for file organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Ordered, append-only record of the files that were moved during a run.
///
/// Only confirmed moves are recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovedFiles {
    files: Vec<String>,
}

impl MovedFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a moved filename.
    pub fn record(&mut self, file_name: impl Into<String>) {
        self.files.push(file_name.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.files.iter().any(|f| f == file_name)
    }
}

/// Moves files from a base directory into its category subdirectories.
pub struct FileOrganizer;

impl FileOrganizer {
    /// Makes sure `base_path/dir_name` exists.
    ///
    /// Creates a single level only; the base directory must already exist.
    /// Raises [`Notice::DirectoryCreated`] when the directory is created and
    /// nothing when it was already there. Returns whether it was created.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tidyup::file_organizer::FileOrganizer;
    /// use tidyup::output::Notice;
    /// use std::path::Path;
    ///
    /// let mut notices: Vec<Notice> = Vec::new();
    /// let created = FileOrganizer::ensure_dir(Path::new("."), "Images", &mut notices)?;
    /// assert_eq!(created, notices.len() == 1);
    /// # Ok::<(), tidyup::file_organizer::OrganizeError>(())
    /// ```
    pub fn ensure_dir(
        base_path: &Path,
        dir_name: &str,
        notifier: &mut impl Notifier,
    ) -> OrganizeResult<bool> {
        let dir_path = base_path.join(dir_name);
        if dir_path.exists() {
            return Ok(false);
        }

        fs::create_dir(&dir_path).map_err(|e| OrganizeError::DirectoryCreationFailed {
            path: dir_path.clone(),
            source: e,
        })?;
        notifier.notify(Notice::DirectoryCreated {
            directory: dir_name.to_string(),
        });
        Ok(true)
    }

    /// Moves each of `file_names` from `base_path` into `base_path/dir_name`.
    ///
    /// An empty batch does nothing, not even create the directory. Files are
    /// moved in the given order and every confirmed move is appended to `moved`.
    /// A file that no longer exists is reported with [`Notice::FileNotFound`]
    /// and skipped. Any other failure stops the batch and is returned; files
    /// moved before it stay moved.
    pub fn relocate(
        base_path: &Path,
        file_names: &[String],
        dir_name: &str,
        moved: &mut MovedFiles,
        notifier: &mut impl Notifier,
    ) -> OrganizeResult<()> {
        if file_names.is_empty() {
            return Ok(());
        }

        Self::ensure_dir(base_path, dir_name, notifier)?;
        let category_path = base_path.join(dir_name);

        for file_name in file_names {
            let source = base_path.join(file_name);
            let destination = category_path.join(file_name);

            if Self::move_file(&source, &destination)? {
                notifier.notify(Notice::FileMoved {
                    file: file_name.clone(),
                    directory: dir_name.to_string(),
                });
                moved.record(file_name.as_str());
            } else {
                debug!(file = %file_name, "source vanished before move");
                notifier.notify(Notice::FileNotFound {
                    file: file_name.clone(),
                });
            }
        }

        Ok(())
    }

    /// Renames `source` to `destination`. Returns `Ok(false)` if the source is gone.
    fn move_file(source: &Path, destination: &Path) -> OrganizeResult<bool> {
        // fs::rename would silently replace an existing file on Unix.
        if fs::symlink_metadata(destination).is_ok() {
            return Err(OrganizeError::DestinationExists {
                path: destination.to_path_buf(),
            });
        }

        match fs::rename(source, destination) {
            Ok(()) => Ok(true),
            Err(e) if Self::source_vanished(&e, source) => Ok(false),
            Err(e) => Err(OrganizeError::FileMoveFailure {
                from: source.to_path_buf(),
                to: destination.to_path_buf(),
                source: e,
            }),
        }
    }

    /// A rename that failed because the source itself is gone, not the destination.
    fn source_vanished(error: &io::Error, source: &Path) -> bool {
        error.kind() == io::ErrorKind::NotFound && fs::symlink_metadata(source).is_err()
    }
}
