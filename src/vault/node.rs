//! Vault tree nodes.
//!
//! The tree is an immutable snapshot for the duration of one book build.
//! Each variant carries only the fields valid for its kind, so dispatch is
//! always an exhaustive `match`.

/// A file (note or asset) in the vault tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    /// Vault-relative path, `/`-separated (e.g. `guides/Setup.md`).
    pub path: String,
    /// File name including extension.
    pub name: String,
    /// Creation time, seconds since the Unix epoch.
    pub created: Option<i64>,
    /// Last modification time, seconds since the Unix epoch.
    pub modified: Option<i64>,
}

/// A folder in the vault tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderNode {
    /// Vault-relative path; empty for the vault root.
    pub path: String,
    /// Folder name; the vault's display name for the root.
    pub name: String,
    pub children: Vec<VaultNode>,
}

/// A node in the vault tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultNode {
    File(FileNode),
    Folder(FolderNode),
}

impl FileNode {
    /// File name without its final extension.
    pub fn stem(&self) -> &str {
        match self.name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => &self.name,
        }
    }

    /// Final extension, without the dot.
    pub fn extension(&self) -> Option<&str> {
        match self.name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
            _ => None,
        }
    }
}

impl VaultNode {
    /// Vault-relative path of the node.
    pub fn path(&self) -> &str {
        match self {
            VaultNode::File(f) => &f.path,
            VaultNode::Folder(d) => &d.path,
        }
    }

    /// Raw name: file name with extension, or folder name.
    pub fn name(&self) -> &str {
        match self {
            VaultNode::File(f) => &f.name,
            VaultNode::Folder(d) => &d.name,
        }
    }

    /// Heading text: file stem for files, folder name for folders.
    pub fn display_name(&self) -> &str {
        match self {
            VaultNode::File(f) => f.stem(),
            VaultNode::Folder(d) => &d.name,
        }
    }

    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            VaultNode::File(f) => Some(f),
            VaultNode::Folder(_) => None,
        }
    }

    pub fn as_folder(&self) -> Option<&FolderNode> {
        match self {
            VaultNode::Folder(d) => Some(d),
            VaultNode::File(_) => None,
        }
    }

    /// Find the node with the given vault-relative path in this subtree.
    pub fn find(&self, path: &str) -> Option<&VaultNode> {
        if self.path() == path {
            return Some(self);
        }
        match self {
            VaultNode::Folder(d) => d.children.iter().find_map(|c| c.find(path)),
            VaultNode::File(_) => None,
        }
    }
}
