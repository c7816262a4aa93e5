//! Section and block extraction from note text.
//!
//! Both extractors are pure line scanners. `None` means "not found"; a
//! found slice is returned verbatim, original line breaks and whitespace
//! included.

/// Extract the section titled `title` from `text`.
///
/// A section runs from its heading line (inclusive) to the next heading of
/// equal or shallower level (exclusive), or to the end of the document.
/// Heading matching is case-insensitive on the exact title; deeper
/// subsections within the slice are included verbatim.
pub fn extract_section(text: &str, title: &str) -> Option<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    let wanted = title.trim().to_lowercase();

    let mut found = None;
    for (i, line) in lines.iter().enumerate() {
        if let Some((level, heading)) = parse_heading(line)
            && heading.to_lowercase() == wanted
        {
            found = Some((i, level));
            break;
        }
    }
    let (start, level) = found?;

    let mut end = lines.len();
    for (i, line) in lines.iter().enumerate().skip(start + 1) {
        if let Some((l, _)) = parse_heading(line)
            && l <= level
        {
            end = i;
            break;
        }
    }
    Some(lines[start..end].join("\n"))
}

/// Parse a markdown heading line: 1-6 `#` markers, a single space, then the
/// heading text. Trailing whitespace is ignored.
fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let line = line.trim_end();
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    let text = line[level..].strip_prefix(' ')?;
    Some((level, text))
}

/// Extract the paragraph containing the block anchor `^id`.
///
/// Finds the first line containing the marker-prefixed identifier as a
/// substring, then expands to the enclosing blank-line-delimited block.
pub fn extract_block(text: &str, id: &str) -> Option<String> {
    let marker = format!("^{id}");
    let lines: Vec<&str> = text.split('\n').collect();
    let hit = lines.iter().position(|l| l.contains(&marker))?;

    let mut start = hit;
    while start > 0 && !lines[start - 1].trim().is_empty() {
        start -= 1;
    }
    let mut end = hit;
    while end + 1 < lines.len() && !lines[end + 1].trim().is_empty() {
        end += 1;
    }
    Some(lines[start..=end].join("\n"))
}
