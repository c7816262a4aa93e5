//! Link-book assembly: one note plus the content its references point at.
//!
//! Two phases over a single source note. Collection enumerates the note's
//! wikilink occurrences in document order and keeps the ones whose target
//! resolves, passes the ignore check, and yields non-blank content. Splicing
//! replaces each retained occurrence with an inline endnote marker and
//! appends the extracted content as endnotes with back-reference markers.

use crate::error::{Error, Result};
use crate::filter;
use crate::reference::ParsedReference;
use crate::resolve::resolve_content;
use crate::settings::BookSettings;
use crate::vault::{Vault, VaultNode};

use super::{BOOK_MARKER, RULE, heading};

/// A retained reference: one endnote plus its inline marker.
#[derive(Debug, Clone)]
pub struct ReferenceEntry {
    /// 1-based position of the occurrence in the source's original link
    /// enumeration. Skipped occurrences leave gaps so a marker stays tied
    /// to the occurrence it replaced.
    pub id: usize,
    pub parsed: ParsedReference,
    /// Extracted target content; never empty or all-whitespace.
    pub content: String,
    /// Byte offset of the occurrence in the source text.
    pub offset: usize,
}

impl ReferenceEntry {
    /// Inline marker spliced over the original reference text.
    pub fn marker(&self) -> String {
        match &self.parsed.label {
            Some(label) => format!("[[#📎 ref-{}|{}]]", self.id, label),
            None => format!("[[#📎 ref-{}]]", self.id),
        }
    }

    /// Endnote heading text the inline marker points at.
    pub fn note_heading(&self) -> String {
        format!("📎 ref-{}", self.id)
    }
}

/// Collect the retained references of `source`, in document order.
///
/// An occurrence is dropped when its target does not resolve, when the
/// target file fails the ignore check, or when extraction comes back empty
/// or all-whitespace. Dropping never renumbers the survivors.
pub fn collect_references<V: Vault + ?Sized>(
    vault: &V,
    settings: &BookSettings,
    source: &str,
) -> Result<Vec<ReferenceEntry>> {
    let links = vault.links(source)?;
    let mut entries = Vec::new();
    for (index, link) in links.iter().enumerate() {
        let parsed = ParsedReference::parse(link);
        let Some(target) = vault.resolve(&parsed.target, source) else {
            continue;
        };
        if !filter::file_allowed(vault, target, settings) {
            continue;
        }
        let Some(content) = resolve_content(vault, &parsed, source) else {
            continue;
        };
        if content.trim().is_empty() {
            continue;
        }
        entries.push(ReferenceEntry {
            id: index + 1,
            parsed,
            content,
            offset: link.start,
        });
    }
    Ok(entries)
}

/// Assemble the link book for a single source note.
///
/// References that were skipped during collection keep their original text
/// in the spliced output. Each retained entry replaces exactly the bytes of
/// its own occurrence, so repeated identical literals and look-alike
/// substrings inside embeds (`![[Doc]]`) are never confused with it.
pub fn build_link_book<V: Vault + ?Sized>(
    vault: &V,
    settings: &BookSettings,
    source: &str,
) -> Result<String> {
    let Some(VaultNode::File(file)) = vault.root().find(source) else {
        return Err(Error::NotInVault(source.to_string()));
    };
    let display = file.stem().to_string();
    let text = vault.read(source)?;
    let entries = collect_references(vault, settings, source)?;

    // Splice back to front so earlier offsets stay valid.
    let mut spliced = text;
    for entry in entries.iter().rev() {
        let end = entry.offset + entry.parsed.original.len();
        spliced.replace_range(entry.offset..end, &entry.marker());
    }

    let mut out = String::new();
    out.push_str(BOOK_MARKER);
    out.push_str("\n\n");
    out.push_str(&heading(1, &display));
    out.push_str("\n\n");
    out.push_str(spliced.trim_end());
    out.push('\n');

    for entry in &entries {
        out.push('\n');
        out.push_str(RULE);
        out.push_str("\n\n");
        out.push_str(&heading(2, &entry.note_heading()));
        out.push('\n');
        out.push_str(&format!("[[#↑ {display}]]"));
        out.push_str("\n\n");
        out.push_str(RULE);
        out.push_str("\n\n");
        out.push_str(entry.content.trim_end());
        out.push('\n');
    }
    if !entries.is_empty() {
        out.push('\n');
        out.push_str(RULE);
        out.push('\n');
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::MemoryVault;

    #[test]
    fn marker_formats() {
        let entry = ReferenceEntry {
            id: 3,
            parsed: ParsedReference::parse(&crate::reference::LinkOccurrence {
                raw: "[[Doc|see this]]".to_string(),
                target: "Doc".to_string(),
                label: Some("see this".to_string()),
                start: 0,
            }),
            content: "x".to_string(),
            offset: 0,
        };
        assert_eq!(entry.marker(), "[[#📎 ref-3|see this]]");
        assert_eq!(entry.note_heading(), "📎 ref-3");
    }

    #[test]
    fn unknown_source_is_an_error() {
        let v = MemoryVault::new("demo").note("A.md", "x");
        let err = build_link_book(&v, &BookSettings::default(), "missing.md");
        assert!(matches!(err, Err(Error::NotInVault(_))));
    }

    #[test]
    fn splice_targets_the_occurrence_not_a_look_alike() {
        // The embed shares the reference's literal as a substring; the
        // marker must land on the reference, not inside the embed.
        let v = MemoryVault::new("demo")
            .note("Source.md", "![[Doc]] inline, but [[Doc]] counts.")
            .note("Doc.md", "content");
        let book = build_link_book(&v, &BookSettings::default(), "Source.md").unwrap();
        assert!(book.contains("![[Doc]] inline, but [[#📎 ref-1]] counts."));
        assert!(!book.contains("![[#📎"));
    }

    #[test]
    fn collection_skips_blank_extractions() {
        let v = MemoryVault::new("demo")
            .note("Source.md", "See [[Blank]] and [[Real]].")
            .note("Blank.md", "   \n\n  ")
            .note("Real.md", "content");
        let entries = collect_references(&v, &BookSettings::default(), "Source.md").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, 2);
    }
}
