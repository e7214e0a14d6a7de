//! File categorization by filename.
//!
//! This module holds the ordered category table and the classifier that walks it.
//! Matching is purely name based and case-sensitive: a filename belongs to the
//! first category, in table order, whose rule accepts it.
//!
//! # Examples
//!
//! ```
//! use tidyup::file_category::CategoryTable;
//!
//! let table = CategoryTable::standard();
//! assert_eq!(table.classify("photo.jpg"), Some("Images"));
//! assert_eq!(table.classify("PairDrop_foo.zip"), Some("PairDrop"));
//! assert_eq!(table.classify("backup.zip"), Some("Archives"));
//! assert_eq!(table.classify("readme.xyz"), None);
//! ```

/// The predicate deciding whether a filename belongs to a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Matches a filename ending with any of the suffixes.
    SuffixSet(Vec<&'static str>),
    /// Matches a filename that starts with the prefix and ends with the suffix.
    PrefixAndSuffix(&'static str, &'static str),
}

impl Rule {
    /// Returns true if `file_name` satisfies this rule.
    ///
    /// Comparison is exact: no case folding, no extension aliases.
    ///
    /// ```
    /// use tidyup::file_category::Rule;
    ///
    /// let rule = Rule::SuffixSet(vec![".HEIC"]);
    /// assert!(rule.matches("IMG_0001.HEIC"));
    /// assert!(!rule.matches("IMG_0001.heic"));
    /// ```
    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            Rule::SuffixSet(suffixes) => suffixes.iter().any(|suffix| file_name.ends_with(suffix)),
            Rule::PrefixAndSuffix(prefix, suffix) => {
                file_name.starts_with(prefix) && file_name.ends_with(suffix)
            }
        }
    }
}

/// A named category and its rule. The name doubles as the target directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub name: &'static str,
    pub rule: Rule,
}

impl CategoryEntry {
    pub fn suffixes(name: &'static str, suffixes: &[&'static str]) -> Self {
        Self {
            name,
            rule: Rule::SuffixSet(suffixes.to_vec()),
        }
    }

    pub fn prefix_and_suffix(
        name: &'static str,
        prefix: &'static str,
        suffix: &'static str,
    ) -> Self {
        Self {
            name,
            rule: Rule::PrefixAndSuffix(prefix, suffix),
        }
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.rule.matches(file_name)
    }
}

/// Ordered category table.
///
/// Order is priority: when a filename satisfies several rules, the entry that
/// comes first wins. The table is never mutated after construction.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    entries: Vec<CategoryEntry>,
}

impl CategoryTable {
    /// Creates a table from entries, keeping their order.
    pub fn new(entries: Vec<CategoryEntry>) -> Self {
        Self { entries }
    }

    /// Returns the built-in table used by the binary.
    pub fn standard() -> Self {
        Self::new(vec![
            CategoryEntry::suffixes(
                "Images",
                &[
                    ".jpg", ".png", ".jpeg", ".gif", ".bmp", ".svg", ".webp", ".ico", ".tiff",
                    ".tif", ".HEIC",
                ],
            ),
            CategoryEntry::suffixes("JSON", &[".json", ".jsonc", ".geojson"]),
            CategoryEntry::suffixes(
                "Documents",
                &[
                    ".pdf", ".doc", ".docx", ".txt", ".rtf", ".odt", ".md", ".pages",
                ],
            ),
            CategoryEntry::prefix_and_suffix("PairDrop", "PairDrop_", ".zip"),
            CategoryEntry::suffixes("Archives", &[".zip", ".rar", ".7z", ".tar", ".gz"]),
            CategoryEntry::suffixes("Videos", &[".mp4", ".mov", ".mkv", ".avi"]),
            CategoryEntry::suffixes("Audio", &[".mp3", ".wav", ".ogg", ".flac", ".m4a"]),
            CategoryEntry::suffixes("Books", &[".epub", ".mobi"]),
            CategoryEntry::suffixes(
                "Packages",
                &[
                    ".deb",
                    ".rpm",
                    ".apk",
                    ".exe",
                    ".msi",
                    ".dmg",
                    ".pkg",
                    ".appimage",
                    ".jar",
                    ".flatpak",
                    ".snap",
                ],
            ),
            CategoryEntry::suffixes("YML", &[".yml", ".yaml"]),
            CategoryEntry::suffixes("Excalidraw", &[".excalidraw", ".excalidrawlib"]),
            CategoryEntry::suffixes(
                "Data",
                &[".csv", ".tsv", ".xls", ".xlsx", ".sqlite", ".db", ".sql"],
            ),
            CategoryEntry::suffixes("HTML", &[".html", ".htm"]),
            CategoryEntry::suffixes("CSS", &[".css"]),
            CategoryEntry::suffixes(
                "Config",
                &[".env", ".ini", ".cfg", ".conf", ".config", ".properties"],
            ),
            CategoryEntry::suffixes("Logs", &[".log"]),
            CategoryEntry::suffixes("RSS", &[".rss", ".atom"]),
        ])
    }

    /// Iterates the entries in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the name of the first category whose rule matches `file_name`.
    ///
    /// Both the move pass and the summary use this, so a file is always reported
    /// under the directory it was moved into.
    pub fn classify(&self, file_name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.matches(file_name))
            .map(|entry| entry.name)
    }
}
