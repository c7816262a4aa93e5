//! Table-of-contents listings for folder sections.

use crate::filter;
use crate::settings::BookSettings;
use crate::vault::{Vault, VaultNode};
use crate::walk::{EntryKind, TraversalEntry};

use super::{FILE_GLYPH, FOLDER_GLYPH};

/// List the immediate children of a tree location as navigable TOC lines.
///
/// Children are the traversal entries exactly one level deeper whose path
/// nests directly under `parent_path`; each is re-checked against the
/// ignore rules before it earns a line. Order is the traversal order
/// already established. Returns an empty string when nothing qualifies.
pub fn build_toc<V: Vault + ?Sized>(
    vault: &V,
    entries: &[TraversalEntry<'_>],
    parent_path: &str,
    parent_depth: usize,
    settings: &BookSettings,
) -> String {
    let mut lines = Vec::new();
    for entry in entries {
        if entry.depth != parent_depth + 1 || !is_child_path(parent_path, entry.path) {
            continue;
        }
        let allowed = match entry.node {
            VaultNode::Folder(folder) => filter::folder_allowed(folder, settings),
            VaultNode::File(file) => filter::file_allowed(vault, file, settings),
        };
        if !allowed {
            continue;
        }
        let glyph = match entry.kind {
            EntryKind::Folder => FOLDER_GLYPH,
            EntryKind::File => FILE_GLYPH,
        };
        lines.push(format!("- {glyph} [[#{}]]", entry.display_name));
    }
    lines.join("\n")
}

/// Whether `path` sits directly inside `parent` (the root's path is empty).
fn is_child_path(parent: &str, path: &str) -> bool {
    if parent.is_empty() {
        !path.is_empty() && !path.contains('/')
    } else {
        path.strip_prefix(parent)
            .and_then(|rest| rest.strip_prefix('/'))
            .is_some_and(|rest| !rest.is_empty() && !rest.contains('/'))
    }
}
