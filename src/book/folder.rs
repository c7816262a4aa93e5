//! Folder-book assembly: one linear document for a subtree of the vault.

use crate::error::{Error, Result};
use crate::filter;
use crate::settings::BookSettings;
use crate::vault::{Vault, VaultNode};
use crate::walk::{EntryKind, walk_tree};

use super::toc::build_toc;
use super::{BOOK_MARKER, PAGE_BREAK, RULE, clamp_level, heading};

/// Assemble the folder book for the subtree rooted at `start`.
///
/// `start` is a vault-relative folder path; the empty string selects the
/// whole vault. Entries render in traversal order: folders become clamped
/// headings plus (optionally) a child TOC, files become headings plus a
/// whole-document embed. The embed is left for the viewer to resolve —
/// inlining raw note text would break the host's own transclusion handling
/// and balloon the output.
///
/// Heading depth is offset by the number of ancestor levels skipped when
/// starting mid-tree, then clamped to markdown's 1–6 range.
pub fn build_folder_book<V: Vault + ?Sized>(
    vault: &V,
    settings: &BookSettings,
    start: &str,
) -> Result<String> {
    let entries = walk_tree(vault.root(), settings, false);
    let start = start.trim_matches('/');
    let scoped: Vec<usize> = (0..entries.len())
        .filter(|&i| in_scope(start, entries[i].path))
        .collect();
    let Some(&first) = scoped.first() else {
        return Err(Error::StartNotFound(start.to_string()));
    };
    let offset = entries[first].depth;

    let mut out = String::new();
    out.push_str(BOOK_MARKER);
    out.push('\n');

    let mut rendered_any = false;
    let mut root_title_pending = start.is_empty();
    for &i in &scoped {
        let entry = &entries[i];
        let allowed = match entry.node {
            VaultNode::Folder(folder) => filter::folder_allowed(folder, settings),
            VaultNode::File(file) => filter::file_allowed(vault, file, settings),
        };
        if !allowed {
            continue;
        }

        let rel = entry.depth - offset;
        let level = clamp_level(rel as isize + 1);

        out.push('\n');
        if rendered_any {
            out.push_str(RULE);
            out.push('\n');
            if rel == 1 && entry.kind == EntryKind::Folder {
                out.push_str(PAGE_BREAK);
                out.push('\n');
            }
            out.push('\n');
        }

        match entry.node {
            VaultNode::Folder(_) => {
                let title = if entry.display_name.is_empty() {
                    vault.name()
                } else {
                    entry.display_name
                };
                out.push_str(&heading(level, title));
                out.push('\n');
                if settings.generate_toc {
                    let toc = build_toc(vault, &entries, entry.path, entry.depth, settings);
                    if !toc.is_empty() {
                        out.push('\n');
                        out.push_str(&toc);
                        out.push('\n');
                    }
                }
            }
            VaultNode::File(file) => {
                if root_title_pending {
                    // The whole-vault book opens with the vault title and a
                    // root listing; the anchoring file itself is not embedded.
                    out.push_str(&heading(1, vault.name()));
                    out.push('\n');
                    if settings.generate_toc {
                        let toc = build_toc(vault, &entries, "", 0, settings);
                        if !toc.is_empty() {
                            out.push('\n');
                            out.push_str(&toc);
                            out.push('\n');
                        }
                    }
                } else {
                    out.push_str(&heading(level, entry.display_name));
                    out.push('\n');
                    out.push('\n');
                    out.push_str(&format!("![[{}|{}]]", file.path, entry.display_name));
                    out.push('\n');
                }
            }
        }
        root_title_pending = false;
        rendered_any = true;
    }

    Ok(out)
}

/// Whether `path` lies at or under `start` (empty `start` scopes everything).
fn in_scope(start: &str, path: &str) -> bool {
    start.is_empty()
        || path == start
        || (path.len() > start.len()
            && path.starts_with(start)
            && path.as_bytes()[start.len()] == b'/')
}
