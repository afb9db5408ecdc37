use anyhow::Result;
use clap::{Parser, Subcommand};
use engine::SearchEngine;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "kwsearch")]
#[command(about = "Build an in-memory keyword index and run top-5 OR queries", long_about = None)]
struct Cli {
    /// File listing the document paths to index, one per line
    #[arg(long)]
    docs: String,
    /// File listing noise words to exclude, one per line
    #[arg(long)]
    noise: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Top-5 documents containing either keyword, ranked by frequency
    Query {
        kw1: String,
        kw2: String,
    },
    /// Show the full occurrence list for one keyword
    Keyword {
        word: String,
    },
    /// Summarize the built index
    Stats,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let engine = SearchEngine::build_from_files(&cli.docs, &cli.noise)?;
    tracing::info!(
        documents = engine.document_count(),
        keywords = engine.keyword_count(),
        "index built"
    );

    match cli.command {
        Commands::Query { kw1, kw2 } => {
            // User input gets the same treatment as document tokens; a word
            // that fails normalization cannot be in the index.
            let kw1 = engine.normalize(&kw1).unwrap_or_else(|| kw1.to_lowercase());
            let kw2 = engine.normalize(&kw2).unwrap_or_else(|| kw2.to_lowercase());
            match engine.query(&kw1, &kw2) {
                Some(docs) if !docs.is_empty() => {
                    for doc in docs {
                        println!("{doc}");
                    }
                }
                _ => println!("no matching documents"),
            }
        }
        Commands::Keyword { word } => {
            let kw = engine.normalize(&word).unwrap_or_else(|| word.to_lowercase());
            match engine.occurrences(&kw) {
                Some(occs) => {
                    for occ in occs {
                        println!("{}\t{}", occ.document, occ.frequency);
                    }
                }
                None => println!("keyword {kw:?} not in index"),
            }
        }
        Commands::Stats => {
            println!("documents: {}", engine.document_count());
            println!("keywords:  {}", engine.keyword_count());
        }
    }
    Ok(())
}
