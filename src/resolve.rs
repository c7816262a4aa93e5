//! Reference content resolution.

use crate::extract::{extract_block, extract_section};
use crate::reference::{ParsedReference, RefKind};
use crate::vault::Vault;

/// Resolve a reference against the vault and extract the referenced content.
///
/// Every failure mode — unresolvable target, unreadable file, missing
/// section or block, empty selector — yields `None`, which callers treat as
/// "skip this reference". A broken reference must degrade to an omitted
/// endnote, never abort book generation.
pub fn resolve_content<V: Vault + ?Sized>(
    vault: &V,
    parsed: &ParsedReference,
    source: &str,
) -> Option<String> {
    let target = vault.resolve(&parsed.target, source)?;
    let text = vault.read(&target.path).ok()?;
    match parsed.kind {
        RefKind::Whole => Some(text),
        RefKind::Section => {
            let title = parsed.selector.as_deref().filter(|s| !s.is_empty())?;
            extract_section(&text, title)
        }
        RefKind::Block => {
            let id = parsed.selector.as_deref().filter(|s| !s.is_empty())?;
            extract_block(&text, id)
        }
    }
}
