//! End-of-run summary.
//!
//! The report is derived after all moves: every recorded file is classified again
//! with the same table, and grouped by category in table order.

use crate::file_category::CategoryTable;
use crate::file_organizer::MovedFiles;
use std::fmt;

/// Files that landed in one category, in the order they were moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    pub name: &'static str,
    pub files: Vec<String>,
}

impl CategoryReport {
    pub fn count(&self) -> usize {
        self.files.len()
    }
}

impl fmt::Display for CategoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} Files moved: {}",
            self.name,
            self.count(),
            self.files.join(", ")
        )
    }
}

/// Per-category summary of a run. Categories without files are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    categories: Vec<CategoryReport>,
}

impl Report {
    pub const HEADER: &'static str = "Summary of moved files:";
    pub const SEPARATOR: &'static str = "-------------------------";

    /// Buckets every moved file under the category the table assigns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidyup::file_category::CategoryTable;
    /// use tidyup::file_organizer::MovedFiles;
    /// use tidyup::report::Report;
    ///
    /// let mut moved = MovedFiles::new();
    /// moved.record("a.jpg");
    /// moved.record("b.png");
    ///
    /// let report = Report::build(&moved, &CategoryTable::standard());
    /// assert_eq!(
    ///     report.categories()[0].to_string(),
    ///     "Images: 2 Files moved: a.jpg, b.png"
    /// );
    /// ```
    pub fn build(moved: &MovedFiles, table: &CategoryTable) -> Self {
        let mut buckets: Vec<CategoryReport> = table
            .iter()
            .map(|entry| CategoryReport {
                name: entry.name,
                files: Vec::new(),
            })
            .collect();

        for file in moved.iter() {
            if let Some(name) = table.classify(file)
                && let Some(bucket) = buckets.iter_mut().find(|b| b.name == name)
            {
                bucket.files.push(file.to_string());
            }
        }

        buckets.retain(|bucket| !bucket.files.is_empty());
        Self {
            categories: buckets,
        }
    }

    pub fn categories(&self) -> &[CategoryReport] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of files across all categories.
    pub fn total_files(&self) -> usize {
        self.categories.iter().map(CategoryReport::count).sum()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Self::HEADER)?;
        writeln!(f, "{}", Self::SEPARATOR)?;
        for category in &self.categories {
            writeln!(f, "{}\n", category)?;
        }
        Ok(())
    }
}
