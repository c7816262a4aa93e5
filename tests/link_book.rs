//! Link-book assembly tests.
//!
//! Cover the collection/splice phases end to end: endnote creation, silent
//! skips for broken references, id gaps, labels, and marker dialect.

use bindery::{BOOK_MARKER, BookSettings, MemoryVault, build_link_book};

fn doc_vault() -> MemoryVault {
    MemoryVault::new("demo")
        .note("Source.md", "See [[Doc]] and [[Doc#Setup]].")
        .note("Doc.md", "# Doc\nintro\n## Setup\nsteps\n## Other\nx")
}

#[test]
fn whole_and_section_references_become_endnotes() {
    let book = build_link_book(&doc_vault(), &BookSettings::default(), "Source.md").unwrap();

    let expected = format!(
        "{BOOK_MARKER}\n\n\
         # Source\n\n\
         See [[#📎 ref-1]] and [[#📎 ref-2]].\n\
         \n---\n\n\
         ## 📎 ref-1\n\
         [[#↑ Source]]\n\n\
         ---\n\n\
         # Doc\nintro\n## Setup\nsteps\n## Other\nx\n\
         \n---\n\n\
         ## 📎 ref-2\n\
         [[#↑ Source]]\n\n\
         ---\n\n\
         ## Setup\nsteps\n\
         \n---\n"
    );
    assert_eq!(book, expected);
}

#[test]
fn missing_target_leaves_original_text() {
    let vault = MemoryVault::new("demo").note("Source.md", "See [[Missing]].");
    let book = build_link_book(&vault, &BookSettings::default(), "Source.md").unwrap();

    assert!(book.contains("See [[Missing]]."));
    assert!(!book.contains("📎"));
}

#[test]
fn skipped_references_leave_id_gaps() {
    let vault = MemoryVault::new("demo")
        .note("Source.md", "First [[Missing]], then [[Doc]].")
        .note("Doc.md", "content");
    let book = build_link_book(&vault, &BookSettings::default(), "Source.md").unwrap();

    assert!(book.contains("[[Missing]]"));
    assert!(book.contains("[[#📎 ref-2]]"));
    assert!(book.contains("## 📎 ref-2"));
    assert!(!book.contains("ref-1"));
}

#[test]
fn custom_label_is_preserved_in_marker() {
    let vault = MemoryVault::new("demo")
        .note("Source.md", "Read [[Doc|the fine doc]] first.")
        .note("Doc.md", "content");
    let book = build_link_book(&vault, &BookSettings::default(), "Source.md").unwrap();

    assert!(book.contains("Read [[#📎 ref-1|the fine doc]] first."));
}

#[test]
fn block_references_extract_one_paragraph() {
    let vault = MemoryVault::new("demo")
        .note("Source.md", "Quote: [[Doc#^key]].")
        .note("Doc.md", "before\n\nthe line ^key\nits sibling\n\nafter");
    let book = build_link_book(&vault, &BookSettings::default(), "Source.md").unwrap();

    assert!(book.contains("Quote: [[#📎 ref-1]]."));
    assert!(book.contains("the line ^key\nits sibling"));
    assert!(!book.contains("before"));
    assert!(!book.contains("after"));
}

#[test]
fn filtered_targets_are_skipped() {
    let vault = MemoryVault::new("demo")
        .note("Source.md", "See [[Draft]] and [[Doc]].")
        .note("Draft.md", "---\ntags: [draft]\n---\nhidden")
        .note("Doc.md", "content");
    let settings = BookSettings::default().ignore_tag("draft");
    let book = build_link_book(&vault, &settings, "Source.md").unwrap();

    assert!(book.contains("See [[Draft]] and [[#📎 ref-2]]."));
    assert!(!book.contains("hidden"));
}

#[test]
fn generated_books_are_not_valid_targets() {
    let vault = MemoryVault::new("demo")
        .note("Source.md", "See [[old_book]].")
        .note("old_book.md", &format!("{BOOK_MARKER}\n\n# old"));
    let book = build_link_book(&vault, &BookSettings::default(), "Source.md").unwrap();

    assert!(book.contains("See [[old_book]]."));
    assert!(!book.contains("ref-1"));
}

#[test]
fn repeated_literals_are_replaced_in_order() {
    let vault = MemoryVault::new("demo")
        .note("Source.md", "See [[Doc]] and again [[Doc]].")
        .note("Doc.md", "content");
    let book = build_link_book(&vault, &BookSettings::default(), "Source.md").unwrap();

    assert!(book.contains("See [[#📎 ref-1]] and again [[#📎 ref-2]]."));
}

#[test]
fn embeds_are_not_references() {
    let vault = MemoryVault::new("demo")
        .note("Source.md", "![[Doc]] inline, but [[Doc]] counts.")
        .note("Doc.md", "content");
    let book = build_link_book(&vault, &BookSettings::default(), "Source.md").unwrap();

    assert!(book.contains("![[Doc]] inline, but [[#📎 ref-1]] counts."));
    assert!(!book.contains("ref-2"));
}

#[test]
fn output_carries_detection_marker_first() {
    let book = build_link_book(&doc_vault(), &BookSettings::default(), "Source.md").unwrap();
    assert!(book.starts_with(BOOK_MARKER));
}
