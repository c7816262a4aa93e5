//! Note metadata: frontmatter and inline tags.

use gray_matter::Matter;
use gray_matter::engine::YAML;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Frontmatter {
    tags: Option<Vec<String>>,
}

/// Collect the tags of a note: frontmatter `tags:` entries plus inline
/// `#tag` occurrences in the body. Returned without a leading `#`.
pub fn note_tags(text: &str) -> Vec<String> {
    let matter = Matter::<YAML>::new();
    let parsed = matter.parse(text);

    let mut tags: Vec<String> = Vec::new();
    if let Some(data) = parsed.data
        && let Ok(fm) = data.deserialize::<Frontmatter>()
    {
        tags.extend(fm.tags.unwrap_or_default());
    }
    collect_inline_tags(&parsed.content, &mut tags);

    tags.retain(|t| !t.is_empty());
    for tag in &mut tags {
        if let Some(stripped) = tag.strip_prefix('#') {
            *tag = stripped.to_string();
        }
    }
    tags
}

/// Scan body text for `#tag` tokens. A tag starts at `#` preceded by
/// whitespace (or the start of text) and runs over word characters,
/// hyphens, and `/` (nested tags). A lone `#` followed by a space is a
/// heading marker, not a tag.
fn collect_inline_tags(text: &str, out: &mut Vec<String>) {
    let mut prev = '\n';
    for (i, c) in text.char_indices() {
        if c == '#' && prev.is_whitespace() {
            let rest = &text[i + 1..];
            let end = rest
                .find(|ch: char| !(ch.is_alphanumeric() || matches!(ch, '_' | '-' | '/')))
                .unwrap_or(rest.len());
            let candidate = &rest[..end];
            // Purely numeric tokens are not tags ("#1" in issue references).
            if !candidate.is_empty() && candidate.chars().any(|ch| !ch.is_ascii_digit()) {
                out.push(candidate.to_string());
            }
        }
        prev = c;
    }
}
