//! bindery - vault-to-book builder

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use bindery::{
    BookSettings, Error, FsVault, Vault, book_file_name, build_folder_book, build_link_book,
};

#[derive(Parser)]
#[command(name = "bindery")]
#[command(version, about = "Consolidate a markdown vault into a single book document", long_about = None)]
#[command(after_help = "EXAMPLES:
    bindery folder ./vault                 Build a book for the whole vault
    bindery folder ./vault --start notes   Build a book for one subtree
    bindery links ./vault Ideas.md         Build a link book for one note")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Settings file (JSON); defaults apply when omitted
    #[arg(long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Output file (default: <context>_book.md inside the vault)
    #[arg(short, long, global = true, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Overwrite the output file if it already exists
    #[arg(long, global = true)]
    force: bool,

    /// Suppress output messages
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Build a linear book from a folder subtree
    Folder {
        /// Path to the vault directory
        vault: PathBuf,

        /// Vault-relative folder to start from (whole vault when omitted)
        #[arg(long, default_value = "")]
        start: String,
    },
    /// Build a link book from one note's cross-references
    Links {
        /// Path to the vault directory
        vault: PathBuf,

        /// Vault-relative path of the source note
        note: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(path) => {
            if !cli.quiet {
                println!("Wrote {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<PathBuf, Error> {
    let settings = load_settings(cli.settings.as_deref())?;

    let (vault_dir, book, context) = match &cli.command {
        Command::Folder { vault, start } => {
            let v = FsVault::open(vault)?;
            let book = build_folder_book(&v, &settings, start)?;
            let context = if start.is_empty() {
                v.name().to_string()
            } else {
                start
                    .trim_matches('/')
                    .rsplit('/')
                    .next()
                    .unwrap_or(start)
                    .to_string()
            };
            (vault.clone(), book, context)
        }
        Command::Links { vault, note } => {
            let v = FsVault::open(vault)?;
            let book = build_link_book(&v, &settings, note)?;
            let stem = note.rsplit('/').next().unwrap_or(note);
            let context = stem.strip_suffix(".md").unwrap_or(stem).to_string();
            (vault.clone(), book, context)
        }
    };

    let path = cli
        .output
        .clone()
        .unwrap_or_else(|| vault_dir.join(book_file_name(&context)));
    if path.exists() && !cli.force {
        return Err(Error::DestinationExists(path.display().to_string()));
    }
    fs::write(&path, book)?;
    Ok(path)
}

fn load_settings(path: Option<&Path>) -> Result<BookSettings, Error> {
    let Some(path) = path else {
        return Ok(BookSettings::default());
    };
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|e| Error::Settings(e.to_string()))
}
