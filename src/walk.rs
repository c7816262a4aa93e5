//! Ordered, depth-annotated traversal of the vault tree.

use crate::filter;
use crate::settings::{BookSettings, SortStrategy, TieBreak};
use crate::vault::{FolderNode, VaultNode};

/// Kind of a traversal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Folder,
}

/// One element of the flattened page order.
#[derive(Debug, Clone)]
pub struct TraversalEntry<'a> {
    pub kind: EntryKind,
    /// Vault-relative path of the node.
    pub path: &'a str,
    /// Heading text: file stem for files, folder name for folders.
    pub display_name: &'a str,
    /// Number of folder descents from the traversal root (root itself is 0).
    pub depth: usize,
    pub node: &'a VaultNode,
}

/// Flatten the tree under `root` into page order.
///
/// The root is visited first, then children recursively. Folders sort
/// alphabetically among themselves; files sort per the configured strategy;
/// the tie-break decides which class comes first entirely. Ignored folders
/// and (unless configured otherwise) empty folders are pruned before
/// descent. File-level ignore checks need file content and are left to the
/// assembly stage, which keeps this walk synchronous and reusable for
/// content-free contexts such as a folder picker (`folders_only`).
///
/// The returned sequence is owned by the caller. Walking an unchanged tree
/// with unchanged settings yields an identical ordering.
pub fn walk_tree<'a>(
    root: &'a VaultNode,
    settings: &BookSettings,
    folders_only: bool,
) -> Vec<TraversalEntry<'a>> {
    let mut entries = Vec::new();
    visit(root, 0, settings, folders_only, &mut entries);
    entries
}

fn visit<'a>(
    node: &'a VaultNode,
    depth: usize,
    settings: &BookSettings,
    folders_only: bool,
    out: &mut Vec<TraversalEntry<'a>>,
) {
    match node {
        VaultNode::File(file) => {
            if !folders_only {
                out.push(TraversalEntry {
                    kind: EntryKind::File,
                    path: &file.path,
                    display_name: file.stem(),
                    depth,
                    node,
                });
            }
        }
        VaultNode::Folder(folder) => {
            out.push(TraversalEntry {
                kind: EntryKind::Folder,
                path: &folder.path,
                display_name: &folder.name,
                depth,
                node,
            });
            for child in ordered_children(folder, settings) {
                if let VaultNode::Folder(sub) = child
                    && !filter::folder_allowed(sub, settings)
                {
                    continue;
                }
                visit(child, depth + 1, settings, folders_only, out);
            }
        }
    }
}

fn ordered_children<'a>(folder: &'a FolderNode, settings: &BookSettings) -> Vec<&'a VaultNode> {
    let mut folders: Vec<&VaultNode> = Vec::new();
    let mut files: Vec<&VaultNode> = Vec::new();
    for child in &folder.children {
        match child {
            VaultNode::Folder(_) => folders.push(child),
            VaultNode::File(_) => files.push(child),
        }
    }

    folders.sort_by_key(|n| n.name().to_lowercase());
    match settings.sort {
        SortStrategy::Alphabetical => {
            files.sort_by_key(|n| n.display_name().to_lowercase());
        }
        SortStrategy::CreationTime => {
            files.sort_by_key(|n| (file_created(n), n.display_name().to_lowercase()));
        }
    }

    match settings.tie_break {
        TieBreak::FilesFirst => {
            files.extend(folders);
            files
        }
        TieBreak::FoldersFirst => {
            folders.extend(files);
            folders
        }
    }
}

fn file_created(node: &VaultNode) -> i64 {
    match node {
        VaultNode::File(f) => f.created.unwrap_or(i64::MAX),
        VaultNode::Folder(_) => i64::MAX,
    }
}
