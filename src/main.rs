use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use folio::Searcher;
use folio::server::{self, resolve_port};

const DEFAULT_CORPUS: &str = "completeworks.txt";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Substring search service over a partitioned literary anthology")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the search API and static front-end over HTTP
    Serve {
        /// Corpus file to load
        #[arg(short, long, default_value = DEFAULT_CORPUS)]
        corpus: PathBuf,

        /// Directory with the static front-end
        #[arg(long, default_value = DEFAULT_STATIC_DIR)]
        static_dir: PathBuf,

        /// Interface to bind
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Port to bind; falls back to $PORT, then 3001
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Run one query against the corpus and print the results
    Search {
        /// Query text, matched byte-for-byte
        query: String,

        /// Corpus file to load
        #[arg(short, long, default_value = DEFAULT_CORPUS)]
        corpus: PathBuf,

        /// Print the result vector as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show sizes of the indexed regions
    Stats {
        /// Corpus file to load
        #[arg(short, long, default_value = DEFAULT_CORPUS)]
        corpus: PathBuf,

        /// Print stats as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Some(command) => run_command(command).await,
        None => {
            // Bare `folio` serves with defaults.
            run_command(Commands::Serve {
                corpus: PathBuf::from(DEFAULT_CORPUS),
                static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
                host: DEFAULT_HOST.to_string(),
                port: None,
            })
            .await
        }
    }
}

async fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Serve {
            corpus,
            static_dir,
            host,
            port,
        } => {
            let searcher = Searcher::load(&corpus)?;
            let port = resolve_port(port);
            let addr = format!("{host}:{port}");
            server::run(Arc::new(searcher), &addr, static_dir).await
        }
        Commands::Search {
            query,
            corpus,
            json,
        } => {
            let searcher = Searcher::load(&corpus)?;
            let results = searcher.search(&query);
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for entry in results {
                    println!("{entry}");
                }
            }
            Ok(())
        }
        Commands::Stats { corpus, json } => {
            let searcher = Searcher::load(&corpus)?;
            let stats = searcher.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!(
                    "verse: {} bytes, {} suffixes",
                    stats.verse_bytes, stats.verse_suffixes
                );
                println!(
                    "prose: {} bytes, {} suffixes",
                    stats.prose_bytes, stats.prose_suffixes
                );
            }
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
