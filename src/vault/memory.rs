//! In-memory vault for tests and embedders.

use std::collections::HashMap;

use super::Vault;
use super::node::{FileNode, FolderNode, VaultNode};
use super::resolve::resolve_target;
use crate::error::{Error, Result};

/// A vault held entirely in memory, built note by note.
///
/// Intermediate folders are created on demand. Sibling insertion order is
/// preserved in the tree; the walker re-sorts it per settings anyway.
#[derive(Debug)]
pub struct MemoryVault {
    name: String,
    root: VaultNode,
    contents: HashMap<String, String>,
}

impl MemoryVault {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            root: VaultNode::Folder(FolderNode {
                path: String::new(),
                name: name.clone(),
                children: Vec::new(),
            }),
            name,
            contents: HashMap::new(),
        }
    }

    /// Add a file at a vault-relative path.
    pub fn note(mut self, path: &str, text: &str) -> Self {
        self.insert_file(path, None, None);
        self.contents.insert(path.to_string(), text.to_string());
        self
    }

    /// Add a file with an explicit creation timestamp (for sort-order tests).
    pub fn note_created(mut self, path: &str, text: &str, created: i64) -> Self {
        self.insert_file(path, Some(created), Some(created));
        self.contents.insert(path.to_string(), text.to_string());
        self
    }

    /// Add a folder (possibly empty) at a vault-relative path.
    pub fn folder(mut self, path: &str) -> Self {
        self.ensure_folder(path);
        self
    }

    fn insert_file(&mut self, path: &str, created: Option<i64>, modified: Option<i64>) {
        let (dir, name) = path.rsplit_once('/').unwrap_or(("", path));
        let folder = self.ensure_folder(dir);
        folder.children.push(VaultNode::File(FileNode {
            path: path.to_string(),
            name: name.to_string(),
            created,
            modified,
        }));
    }

    fn ensure_folder(&mut self, path: &str) -> &mut FolderNode {
        let VaultNode::Folder(root) = &mut self.root else {
            unreachable!("vault root is a folder");
        };
        let mut current = root;
        if path.is_empty() {
            return current;
        }
        let mut so_far = String::new();
        for part in path.split('/') {
            if !so_far.is_empty() {
                so_far.push('/');
            }
            so_far.push_str(part);
            let found = current
                .children
                .iter()
                .position(|c| matches!(c, VaultNode::Folder(f) if f.name == part));
            let index = match found {
                Some(i) => i,
                None => {
                    current.children.push(VaultNode::Folder(FolderNode {
                        path: so_far.clone(),
                        name: part.to_string(),
                        children: Vec::new(),
                    }));
                    current.children.len() - 1
                }
            };
            current = match &mut current.children[index] {
                VaultNode::Folder(f) => f,
                VaultNode::File(_) => unreachable!("position matched a folder"),
            };
        }
        current
    }
}

impl Vault for MemoryVault {
    fn name(&self) -> &str {
        &self.name
    }

    fn root(&self) -> &VaultNode {
        &self.root
    }

    fn read(&self, path: &str) -> Result<String> {
        self.contents
            .get(path)
            .cloned()
            .ok_or_else(|| Error::NotInVault(path.to_string()))
    }

    fn resolve(&self, target: &str, source: &str) -> Option<&FileNode> {
        resolve_target(&self.root, target, source)
    }
}
