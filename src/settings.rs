//! Book generation settings.
//!
//! Settings are injected by the host and read-only to the engine. The CLI
//! loads them from a JSON file; embedders construct them directly.

use serde::{Deserialize, Serialize};

/// How files are ordered among their siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortStrategy {
    /// By display name, case-insensitively.
    Alphabetical,
    /// By creation timestamp, oldest first. Files without a timestamp sort
    /// last; display name breaks ties so the order stays deterministic.
    CreationTime,
}

/// Which class sorts first entirely when files and folders share a parent.
///
/// This is not a per-pair merge: all folders come before all files, or the
/// other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    FilesFirst,
    FoldersFirst,
}

/// Settings for book generation.
///
/// Ignore matching is case-insensitive. Tag entries may be written with or
/// without a leading `#`; extension entries with or without a leading dot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BookSettings {
    /// Folder names excluded from traversal (their subtrees are pruned).
    pub ignored_folders: Vec<String>,
    /// File names excluded from books; matches the full name or the stem.
    pub ignored_files: Vec<String>,
    /// Notes carrying any of these tags are excluded.
    pub ignored_tags: Vec<String>,
    /// File extensions excluded from books.
    pub ignored_extensions: Vec<String>,
    /// Render a table of contents under each folder heading.
    pub generate_toc: bool,
    /// Keep folders with no children in the traversal.
    pub include_empty_folders: bool,
    pub sort: SortStrategy,
    pub tie_break: TieBreak,
}

impl Default for BookSettings {
    fn default() -> Self {
        Self {
            ignored_folders: Vec::new(),
            ignored_files: Vec::new(),
            ignored_tags: Vec::new(),
            ignored_extensions: Vec::new(),
            generate_toc: true,
            include_empty_folders: false,
            sort: SortStrategy::Alphabetical,
            tie_break: TieBreak::FilesFirst,
        }
    }
}

impl BookSettings {
    pub fn ignore_folder(mut self, name: impl Into<String>) -> Self {
        self.ignored_folders.push(name.into());
        self
    }

    pub fn ignore_file(mut self, name: impl Into<String>) -> Self {
        self.ignored_files.push(name.into());
        self
    }

    pub fn ignore_tag(mut self, tag: impl Into<String>) -> Self {
        self.ignored_tags.push(tag.into());
        self
    }

    pub fn ignore_extension(mut self, ext: impl Into<String>) -> Self {
        self.ignored_extensions.push(ext.into());
        self
    }

    pub fn with_toc(mut self, generate_toc: bool) -> Self {
        self.generate_toc = generate_toc;
        self
    }

    pub fn with_sort(mut self, sort: SortStrategy) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = BookSettings::default();
        assert!(settings.generate_toc);
        assert!(!settings.include_empty_folders);
        assert_eq!(settings.sort, SortStrategy::Alphabetical);
        assert_eq!(settings.tie_break, TieBreak::FilesFirst);
    }

    #[test]
    fn builder_accumulates() {
        let settings = BookSettings::default()
            .ignore_folder("archive")
            .ignore_tag("#draft")
            .with_tie_break(TieBreak::FoldersFirst);
        assert_eq!(settings.ignored_folders, vec!["archive"]);
        assert_eq!(settings.ignored_tags, vec!["#draft"]);
        assert_eq!(settings.tie_break, TieBreak::FoldersFirst);
    }
}
