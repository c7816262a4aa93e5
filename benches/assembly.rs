//! Benchmarks for book assembly.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use bindery::{BookSettings, MemoryVault, build_folder_book, build_link_book, find_wikilinks};
use bindery::extract::extract_section;

/// A synthetic vault: `folders` top-level folders with `notes` notes each,
/// every note cross-linking its successor.
fn sample_vault(folders: usize, notes: usize) -> MemoryVault {
    let mut vault = MemoryVault::new("bench");
    for f in 0..folders {
        for n in 0..notes {
            let path = format!("folder{f}/note{n}.md");
            let body = format!(
                "# note{n}\n\nSome prose with a [[note{}]] link.\n\n## Detail\nmore prose\n",
                (n + 1) % notes
            );
            vault = vault.note(&path, &body);
        }
    }
    vault
}

fn sample_note(links: usize) -> String {
    let mut text = String::from("# Hub\n\n");
    for i in 0..links {
        text.push_str(&format!("Paragraph {i} referencing [[note{i}]].\n\n"));
    }
    text
}

fn bench_scan_links(c: &mut Criterion) {
    let text = sample_note(200);
    c.bench_function("scan_links", |b| {
        b.iter(|| find_wikilinks(&text));
    });
}

fn bench_extract_section(c: &mut Criterion) {
    let mut text = String::new();
    for i in 0..100 {
        text.push_str(&format!("## Section {i}\nbody line\nbody line\n\n"));
    }
    c.bench_function("extract_section", |b| {
        b.iter(|| extract_section(&text, "Section 73"));
    });
}

fn bench_folder_book(c: &mut Criterion) {
    let vault = sample_vault(10, 50);
    let settings = BookSettings::default();
    c.bench_function("folder_book_500_notes", |b| {
        b.iter(|| build_folder_book(&vault, &settings, "").unwrap());
    });
}

fn bench_link_book(c: &mut Criterion) {
    let mut vault = MemoryVault::new("bench").note("Hub.md", &sample_note(100));
    for i in 0..100 {
        vault = vault.note(
            &format!("note{i}.md"),
            &format!("# note{i}\ncontent for endnote {i}\n"),
        );
    }
    let settings = BookSettings::default();
    c.bench_function("link_book_100_refs", |b| {
        b.iter(|| build_link_book(&vault, &settings, "Hub.md").unwrap());
    });
}

criterion_group!(
    benches,
    bench_scan_links,
    bench_extract_section,
    bench_folder_book,
    bench_link_book
);
criterion_main!(benches);
