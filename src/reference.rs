//! Wikilink scanning and reference classification.
//!
//! A reference is one `[[...]]` occurrence in note text. Its target portion
//! classifies into three granularities:
//!
//! - `[[Doc]]` — whole document
//! - `[[Doc#Heading]]` — one section
//! - `[[Doc#^block]]` — one paragraph-level block
//!
//! The block marker `#^` is checked before the section separator `#`
//! because its syntax is a superset. Classification never fails: malformed
//! input degrades to a whole-document reference with an empty target, which
//! resolution rejects downstream.

use memchr::memmem;

/// A single wikilink occurrence in note text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOccurrence {
    /// The full literal, delimiters included (e.g. `[[Doc#Setup|steps]]`).
    pub raw: String,
    /// The target portion before any `|` label separator.
    pub target: String,
    /// Display label after `|`, if present.
    pub label: Option<String>,
    /// Byte offset of the opening `[[` in the scanned text. Splicing works
    /// by position, not by literal search, so an identical substring inside
    /// an embed can never be mistaken for this occurrence.
    pub start: usize,
}

/// Granularity of a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    /// The target document's full text.
    Whole,
    /// One section, addressed by heading text.
    Section,
    /// One block, addressed by a `^id` anchor.
    Block,
}

/// A classified reference, consumed immediately by the content resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReference {
    /// The occurrence's full literal text.
    pub original: String,
    /// Target document identifier; may be empty (rejected at resolution).
    pub target: String,
    pub kind: RefKind,
    /// Heading text for sections, block id for blocks. Preserved even when
    /// empty so downstream can reject it explicitly.
    pub selector: Option<String>,
    /// Custom display label carried through to the inline marker.
    pub label: Option<String>,
}

impl ParsedReference {
    /// Classify an occurrence's target substring.
    pub fn parse(occurrence: &LinkOccurrence) -> ParsedReference {
        let target_part = occurrence.target.as_str();
        let (target, kind, selector) = if let Some((doc, block)) = target_part.split_once("#^") {
            (doc, RefKind::Block, Some(block))
        } else if let Some((doc, heading)) = target_part.split_once('#') {
            (doc, RefKind::Section, Some(heading))
        } else {
            (target_part, RefKind::Whole, None)
        };
        ParsedReference {
            original: occurrence.raw.clone(),
            target: target.trim().to_string(),
            kind,
            selector: selector.map(|s| unescape(s.trim())),
            label: occurrence.label.clone(),
        }
    }
}

/// Strip backslash escapes so selectors match heading text literally
/// (`A \| B` matches the heading `A | B`).
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Scan note text for wikilink occurrences, in document order.
///
/// Embeds (`![[...]]`) are skipped: they are transclusions, not
/// cross-references. The label separator is the first `|` not preceded by a
/// backslash.
pub fn find_wikilinks(text: &str) -> Vec<LinkOccurrence> {
    let bytes = text.as_bytes();
    let mut links = Vec::new();
    for start in memmem::find_iter(bytes, b"[[") {
        if start > 0 && bytes[start - 1] == b'!' {
            continue;
        }
        let Some(rel_end) = memmem::find(&bytes[start + 2..], b"]]") else {
            break;
        };
        let inner = &text[start + 2..start + 2 + rel_end];
        // A nested opener means this one was stray; the scanner retries at
        // the inner position.
        if inner.contains("[[") || inner.trim().is_empty() {
            continue;
        }
        let raw = &text[start..start + 2 + rel_end + 2];
        let (target, label) = split_label(inner);
        links.push(LinkOccurrence {
            raw: raw.to_string(),
            target: target.to_string(),
            label,
            start,
        });
    }
    links
}

fn split_label(inner: &str) -> (&str, Option<String>) {
    let bytes = inner.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'|' && (i == 0 || bytes[i - 1] != b'\\') {
            return (&inner[..i], Some(inner[i + 1..].to_string()));
        }
    }
    (inner, None)
}
