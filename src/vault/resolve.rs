//! Fuzzy path resolution for reference targets.
//!
//! Mirrors how note hosts resolve wikilinks: a target may omit the `.md`
//! extension and may be a bare basename or a partial path. When several
//! files match (duplicate basenames across the tree), the candidate closest
//! to the source note wins.

use std::cmp::Reverse;

use super::node::{FileNode, VaultNode};

/// Resolve a reference target to a file node in the tree under `root`.
///
/// Matching is case-insensitive on the path suffix; `target` may be a full
/// vault-relative path, a trailing portion of one, or a bare name with or
/// without its `.md` extension. Returns `None` when nothing matches.
pub fn resolve_target<'a>(root: &'a VaultNode, target: &str, source: &str) -> Option<&'a FileNode> {
    let target = target.trim().trim_start_matches("./").replace('\\', "/");
    let target = target.trim_matches('/');
    if target.is_empty() {
        return None;
    }
    let wanted = target.to_lowercase();
    let wanted_md = format!("{wanted}.md");

    let mut files = Vec::new();
    collect_files(root, &mut files);

    let source_dir = source.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("");
    files
        .into_iter()
        .filter(|f| {
            let path = f.path.to_lowercase();
            suffix_match(&path, &wanted) || suffix_match(&path, &wanted_md)
        })
        .min_by_key(|f| {
            (
                Reverse(shared_components(&f.path, source_dir)),
                f.path.matches('/').count(),
                f.path.clone(),
            )
        })
}

fn collect_files<'a>(node: &'a VaultNode, out: &mut Vec<&'a FileNode>) {
    match node {
        VaultNode::File(f) => out.push(f),
        VaultNode::Folder(d) => {
            for child in &d.children {
                collect_files(child, out);
            }
        }
    }
}

/// Whether `path` is `wanted` or ends with `/wanted`. Both sides lowercase.
fn suffix_match(path: &str, wanted: &str) -> bool {
    path == wanted
        || (path.len() > wanted.len()
            && path.ends_with(wanted)
            && path.as_bytes()[path.len() - wanted.len() - 1] == b'/')
}

/// Number of leading path components two paths share, case-insensitively.
fn shared_components(a: &str, b: &str) -> usize {
    if b.is_empty() {
        return 0;
    }
    a.split('/')
        .zip(b.split('/'))
        .take_while(|(x, y)| x.eq_ignore_ascii_case(y))
        .count()
}
