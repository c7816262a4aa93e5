//! Directory-backed vault.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use super::Vault;
use super::node::{FileNode, FolderNode, VaultNode};
use super::resolve::resolve_target;
use crate::error::Result;

/// A vault rooted at a directory on disk.
///
/// The tree is snapshotted once at open time, with directory entries sorted
/// by name so the walker's input order is stable across runs. Note text is
/// read on demand. Dotfiles and dot-directories (host configuration like
/// `.obsidian/`) are skipped.
#[derive(Debug)]
pub struct FsVault {
    name: String,
    base: PathBuf,
    root: VaultNode,
}

impl FsVault {
    /// Snapshot the vault rooted at `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let base = dir.as_ref().to_path_buf();
        let name = base
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("vault")
            .to_string();
        let children = read_children(&base, "")?;
        let root = VaultNode::Folder(FolderNode {
            path: String::new(),
            name: name.clone(),
            children,
        });
        Ok(Self { name, base, root })
    }
}

fn read_children(dir: &Path, rel: &str) -> Result<Vec<VaultNode>> {
    let mut dir_entries: Vec<_> = fs::read_dir(dir)?.collect::<std::io::Result<Vec<_>>>()?;
    dir_entries.sort_by_key(|e| e.file_name());

    let mut children = Vec::new();
    for entry in dir_entries {
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        let path = if rel.is_empty() {
            name.clone()
        } else {
            format!("{rel}/{name}")
        };
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            let nested = read_children(&entry.path(), &path)?;
            children.push(VaultNode::Folder(FolderNode {
                path,
                name,
                children: nested,
            }));
        } else if file_type.is_file() {
            let meta = entry.metadata()?;
            children.push(VaultNode::File(FileNode {
                path,
                name,
                created: meta.created().ok().and_then(unix_secs),
                modified: meta.modified().ok().and_then(unix_secs),
            }));
        }
    }
    Ok(children)
}

fn unix_secs(t: SystemTime) -> Option<i64> {
    t.duration_since(UNIX_EPOCH).ok().map(|d| d.as_secs() as i64)
}

impl Vault for FsVault {
    fn name(&self) -> &str {
        &self.name
    }

    fn root(&self) -> &VaultNode {
        &self.root
    }

    fn read(&self, path: &str) -> Result<String> {
        Ok(fs::read_to_string(self.base.join(path))?)
    }

    fn resolve(&self, target: &str, source: &str) -> Option<&FileNode> {
        resolve_target(&self.root, target, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, text: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, text).unwrap();
    }

    #[test]
    fn snapshots_tree_and_reads_on_demand() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "A.md", "alpha");
        write(tmp.path(), "sub/B.md", "beta");

        let vault = FsVault::open(tmp.path()).unwrap();
        assert!(vault.root().find("A.md").is_some());
        assert!(vault.root().find("sub/B.md").is_some());
        assert_eq!(vault.read("sub/B.md").unwrap(), "beta");
    }

    #[test]
    fn skips_dot_entries() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), ".obsidian/app.json", "{}");
        write(tmp.path(), "A.md", "alpha");

        let vault = FsVault::open(tmp.path()).unwrap();
        assert!(vault.root().find(".obsidian").is_none());
        assert!(vault.root().find("A.md").is_some());
    }

    #[test]
    fn resolves_like_memory_vault() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "guides/Setup.md", "steps");

        let vault = FsVault::open(tmp.path()).unwrap();
        let hit = vault.resolve("Setup", "Intro.md");
        assert_eq!(hit.map(|f| f.path.as_str()), Some("guides/Setup.md"));
    }
}
