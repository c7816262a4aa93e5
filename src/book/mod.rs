//! Book assembly: markdown dialect, folder books, link books.
//!
//! The produced dialect must match the downstream viewer exactly:
//! in-document heading links `[[#heading]]`, endnote markers `[[#📎 ref-N]]`
//! (optionally `|label`), back-references `[[#↑ name]]`, embeds
//! `![[path|name]]`, and `---` rules between sections. Every generated
//! document starts with [`BOOK_MARKER`] so books can be found — and excluded
//! from later runs — by a plain substring check.

mod folder;
mod links;
mod toc;

pub use folder::build_folder_book;
pub use links::{ReferenceEntry, build_link_book, collect_references};
pub use toc::build_toc;

/// Marker comment identifying generated books. Required verbatim on the
/// first line of every generated document.
pub const BOOK_MARKER: &str = "<!-- bindery:generated-book -->";

/// Page-break marker emitted before top-level folder sections.
pub const PAGE_BREAK: &str = "<div style=\"page-break-after: always;\"></div>";

/// Horizontal-rule separator between sections.
pub const RULE: &str = "---";

pub(crate) const FOLDER_GLYPH: &str = "📁";
pub(crate) const FILE_GLYPH: &str = "📄";

/// Derived output file name for a generated book.
pub fn book_file_name(context: &str) -> String {
    format!("{context}_book.md")
}

/// Clamp a heading level into markdown's valid range.
pub(crate) fn clamp_level(level: isize) -> usize {
    level.clamp(1, 6) as usize
}

/// Render a heading line at an already clamped level.
pub(crate) fn heading(level: usize, text: &str) -> String {
    format!("{} {}", "#".repeat(level), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name() {
        assert_eq!(book_file_name("vault"), "vault_book.md");
    }

    #[test]
    fn levels_clamp_to_markdown_range() {
        assert_eq!(clamp_level(-3), 1);
        assert_eq!(clamp_level(0), 1);
        assert_eq!(clamp_level(4), 4);
        assert_eq!(clamp_level(9), 6);
    }

    #[test]
    fn heading_renders_markers() {
        assert_eq!(heading(1, "Title"), "# Title");
        assert_eq!(heading(6, "Deep"), "###### Deep");
    }
}
