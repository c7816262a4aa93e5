//! The host-collaborator seam: vault trees, readers, resolvers, metadata.
//!
//! The assembly engine is written against the [`Vault`] trait only. Hosts
//! supply the node tree, a raw-text reader, fuzzy link resolution, the
//! per-note link cache, and tag metadata. Two implementations are bundled:
//! [`MemoryVault`] for tests and embedders, [`FsVault`] for vaults on disk.

mod fs;
mod memory;
mod meta;
mod node;
mod resolve;

pub use fs::FsVault;
pub use memory::MemoryVault;
pub use meta::note_tags;
pub use node::{FileNode, FolderNode, VaultNode};
pub use resolve::resolve_target;

use crate::error::Result;
use crate::reference::{LinkOccurrence, find_wikilinks};

/// Everything the assembly engine needs from a note collection.
///
/// The tree is an immutable snapshot for the duration of one build; reads
/// happen sequentially, one at a time, so output ordering is deterministic.
pub trait Vault {
    /// Vault display name, used as the whole-vault book title.
    fn name(&self) -> &str;

    /// Root of the node tree. The root folder's path is the empty string.
    fn root(&self) -> &VaultNode;

    /// Read the raw text of the file at a vault-relative path.
    fn read(&self, path: &str) -> Result<String>;

    /// Resolve a reference target against a source location.
    ///
    /// Implementations must tolerate missing extensions and pick the
    /// closest path when basenames are duplicated across the tree;
    /// [`resolve_target`] provides that behavior over the node tree.
    fn resolve(&self, target: &str, source: &str) -> Option<&FileNode>;

    /// Ordered wikilink occurrences of a note, with literal text and labels.
    fn links(&self, source: &str) -> Result<Vec<LinkOccurrence>> {
        Ok(find_wikilinks(&self.read(source)?))
    }

    /// Frontmatter and inline tags of a note, without the leading `#`.
    fn tags(&self, path: &str) -> Vec<String> {
        self.read(path)
            .map(|text| note_tags(&text))
            .unwrap_or_default()
    }
}
