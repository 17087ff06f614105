#![forbid(unsafe_code)]

//! Papyr CLI
//!
//! Inspect a notes content directory from the command line: listings, a
//! single rendered note, slug enumeration, sitemap entries, page metadata,
//! and content validation.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use papyr_notes::{meta, sitemap, Notes, NotesConfig};

/// Papyr - markdown notes content pipeline
#[derive(Parser, Debug)]
#[command(name = "papyr")]
#[command(about = "Inspect and validate a markdown notes directory", long_about = None)]
struct Args {
    /// Configuration file path (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory, overriding the config file
    #[arg(short = 'd', long)]
    content_dir: Option<PathBuf>,

    /// Emit JSON instead of plain text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all notes in listing order
    List,
    /// Render one note by slug
    Show {
        /// Slug of the note to render
        slug: String,
    },
    /// Print all known slugs
    Slugs,
    /// Print sitemap entries for the notes section
    Sitemap,
    /// Print page metadata for one note
    Meta {
        /// Slug of the note
        slug: String,
    },
    /// Validate the content directory; exits non-zero on findings
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = load_config(&args).await?;
    let notes = Notes::with_config(config);

    match args.command {
        Command::List => {
            let summaries = notes.all_notes().await;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                for s in &summaries {
                    println!(
                        "{:>4}  {:<28} {} ({} min)",
                        s.frontmatter.order,
                        s.frontmatter.slug,
                        s.frontmatter.title,
                        s.reading_time_minutes
                    );
                }
            }
        }
        Command::Show { slug } => match notes.note_by_slug(&slug).await {
            Some(note) => {
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&note)?);
                } else {
                    println!("{}", note.html);
                }
            }
            None => {
                eprintln!("note not found: {slug}");
                std::process::exit(1);
            }
        },
        Command::Slugs => {
            let slugs = notes.all_slugs().await;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&slugs)?);
            } else {
                for slug in &slugs {
                    println!("{slug}");
                }
            }
        }
        Command::Sitemap => {
            let entries = sitemap::note_entries(notes.config(), &notes.all_notes().await);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for e in &entries {
                    let lastmod = e
                        .lastmod
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    println!(
                        "{:<60} {:<12} {:<8} {:.1}",
                        e.loc,
                        lastmod,
                        e.changefreq.as_str(),
                        e.priority
                    );
                }
            }
        }
        Command::Meta { slug } => {
            let metadata = match notes.note_by_slug(&slug).await {
                Some(note) => meta::note_metadata(notes.config(), &note.frontmatter),
                None => meta::not_found_metadata(notes.config()),
            };
            if args.json {
                println!("{}", serde_json::to_string_pretty(&metadata)?);
            } else {
                println!("title:       {}", metadata.title);
                println!("description: {}", metadata.description);
                println!("keywords:    {}", metadata.keywords.join(", "));
            }
        }
        Command::Check => {
            let issues = notes.check().await;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&issues)?);
            } else {
                for issue in &issues {
                    println!("{issue}");
                }
            }
            if !issues.is_empty() {
                eprintln!("{} content issue(s) found", issues.len());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Resolve configuration from flags: explicit TOML file, then overrides.
async fn load_config(args: &Args) -> Result<NotesConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = tokio::fs::read_to_string(path).await?;
            NotesConfig::from_toml_str(&text)?
        }
        None => NotesConfig::default(),
    };

    if let Some(dir) = &args.content_dir {
        config.content_dir = dir.clone();
    }

    Ok(config)
}
