//! # bindery
//!
//! Consolidates a hierarchical markdown note collection (a "vault") into a
//! single linear book document, and builds single-note "link books" that
//! pull cross-referenced content in as endnotes.
//!
//! ## Features
//!
//! - Ordered, depth-annotated traversal with configurable sort and
//!   tie-break rules and ignore filters (folder/file/tag/extension)
//! - Wikilink parsing at whole-document, section (`[[Doc#Heading]]`), and
//!   block (`[[Doc#^id]]`) granularity
//! - Fuzzy target resolution: missing extensions, duplicate basenames
//!   resolved to the closest path
//! - Navigable output: heading links, endnote markers with back-references,
//!   tables of contents, embeds left for the viewer to resolve
//!
//! ## Quick Start
//!
//! ```
//! use bindery::{BookSettings, MemoryVault, build_folder_book, build_link_book};
//!
//! let vault = MemoryVault::new("demo")
//!     .note("Intro.md", "See [[guides/Setup]] before anything else.")
//!     .note("guides/Setup.md", "# Setup\nsteps");
//!
//! // One book for the whole vault: headings, TOCs, and embeds.
//! let book = build_folder_book(&vault, &BookSettings::default(), "").unwrap();
//! assert!(book.starts_with("<!-- bindery:generated-book -->"));
//!
//! // One book for a single note: references become endnotes.
//! let book = build_link_book(&vault, &BookSettings::default(), "Intro.md").unwrap();
//! assert!(book.contains("[[#📎 ref-1]]"));
//! ```
//!
//! The engine is written against the [`Vault`] trait; [`MemoryVault`] and
//! [`FsVault`] are the bundled implementations.

pub mod book;
pub mod error;
pub mod extract;
pub mod filter;
pub mod reference;
pub mod resolve;
pub mod settings;
pub mod vault;
pub mod walk;

pub use book::{BOOK_MARKER, ReferenceEntry, book_file_name, build_folder_book, build_link_book};
pub use error::{Error, Result};
pub use reference::{LinkOccurrence, ParsedReference, RefKind, find_wikilinks};
pub use settings::{BookSettings, SortStrategy, TieBreak};
pub use vault::{FileNode, FolderNode, FsVault, MemoryVault, Vault, VaultNode};
pub use walk::{EntryKind, TraversalEntry, walk_tree};
