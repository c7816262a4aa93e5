//! Ignore predicates for traversal and reference collection.
//!
//! Folder checks are pure; the file check is the one place the engine reads
//! content outside of embedding, because tag filtering and the
//! generated-book marker both live in the note text.

use crate::book::BOOK_MARKER;
use crate::settings::BookSettings;
use crate::vault::{FileNode, FolderNode, Vault};

/// Whether a folder survives the ignore rules.
pub fn folder_allowed(folder: &FolderNode, settings: &BookSettings) -> bool {
    if name_listed(&folder.name, &settings.ignored_folders) {
        return false;
    }
    if folder.children.is_empty() && !settings.include_empty_folders {
        return false;
    }
    true
}

/// Whether a file survives the ignore rules.
///
/// Checks the name and extension lists, then — for markdown notes — the tag
/// list and the self-marker: a note that is itself a generated book is
/// excluded, so a book never swallows another book. Unreadable notes are
/// excluded as well; nothing downstream could use them.
pub fn file_allowed<V: Vault + ?Sized>(
    vault: &V,
    file: &FileNode,
    settings: &BookSettings,
) -> bool {
    if name_listed(file.stem(), &settings.ignored_files)
        || name_listed(&file.name, &settings.ignored_files)
    {
        return false;
    }
    if let Some(ext) = file.extension()
        && settings
            .ignored_extensions
            .iter()
            .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(ext))
    {
        return false;
    }

    if file.extension().is_some_and(|e| e.eq_ignore_ascii_case("md")) {
        let Ok(text) = vault.read(&file.path) else {
            return false;
        };
        if text.contains(BOOK_MARKER) {
            return false;
        }
        if !settings.ignored_tags.is_empty() {
            let tags = vault.tags(&file.path);
            let ignored = settings
                .ignored_tags
                .iter()
                .map(|t| t.trim_start_matches('#'));
            for banned in ignored {
                if tags.iter().any(|t| t.eq_ignore_ascii_case(banned)) {
                    return false;
                }
            }
        }
    }
    true
}

fn name_listed(name: &str, list: &[String]) -> bool {
    list.iter().any(|n| n.eq_ignore_ascii_case(name))
}
