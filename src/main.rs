use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use tracing::{info, warn};

use gleaner::analysis::mock::MockAnalyzer;
use gleaner::analysis::openai::OpenAiAnalyzer;
use gleaner::analysis::traits::TextAnalyzer;
use gleaner::config::{AnalyzerBackend, Config};
use gleaner::db::Database;
use gleaner::keywords::KeywordExtractor;
use gleaner::output::terminal;
use gleaner::pipeline::{analyze_texts, AnalyzeRequest};

/// Gleaner: pull summaries, topics, sentiment and keywords out of text.
///
/// Every analysis is stored locally so it can be searched later by topic
/// or keyword.
#[derive(Parser)]
#[command(name = "gleaner", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database
    Init,

    /// Extract keywords from a text without storing anything
    Keywords {
        /// The text to extract keywords from
        text: String,

        /// How many keywords to return (default: GLEANER_TOP_K or 3)
        #[arg(long)]
        top_k: Option<usize>,
    },

    /// Analyze one or more texts and store the results
    Analyze {
        /// Texts to analyze, each as its own argument
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Analyze every non-blank line of a file
    Import {
        /// Path to a UTF-8 text file, one text per line
        file: String,
    },

    /// Search stored analyses by topic or keyword
    Search {
        /// Case-insensitive substring to look for
        term: String,
    },

    /// Show system status (DB location, size, recent analyses)
    Status,

    /// Start the HTTP API server
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: 8000)
        #[arg(long, default_value = "8000")]
        port: u16,

        /// Address to bind to (default: 127.0.0.1, use 0.0.0.0 to expose)
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gleaner=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            info!("Initializing Gleaner database...");
            let config = Config::load()?;
            let db = gleaner::db::initialize_sqlite(&config.db_path)?;
            let table_count = db.table_count().await?;
            println!("Database initialized at: {}", config.db_path);
            println!("Tables created: {table_count}");
            println!("\nGleaner is ready. Set LLM_MODE and OPENAI_API_KEY in your .env file");
            println!("  (or LLM_MODE=mock to work offline)");
            println!("\nThen run: gleaner analyze \"some text\"");
        }

        Commands::Keywords { text, top_k } => {
            let config = Config::load()?;
            let extractor = KeywordExtractor::new(top_k.unwrap_or(config.top_k));
            let keywords = extractor.extract(&text);
            terminal::display_keywords(&keywords);
        }

        Commands::Analyze { texts } => {
            let config = Config::load()?;
            config.require_analyzer()?;
            let db = gleaner::db::initialize_sqlite(&config.db_path)?;
            let analyzer = create_analyzer(&config)?;

            let texts = AnalyzeRequest::batch(texts).texts()?;
            let results =
                analyze_texts(analyzer.as_ref(), db.as_ref(), &texts, config.top_k).await?;
            terminal::display_analyses("Analysis Results", &results);
        }

        Commands::Import { file } => {
            let config = Config::load()?;
            config.require_analyzer()?;
            let db = gleaner::db::initialize_sqlite(&config.db_path)?;
            let analyzer = create_analyzer(&config)?;

            let contents = std::fs::read_to_string(&file)
                .map_err(|e| anyhow::anyhow!("Failed to read {file}: {e}"))?;
            let lines: Vec<String> = contents
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect();

            if lines.is_empty() {
                println!("{}", format!("No non-blank lines in {file}.").yellow());
                return Ok(());
            }

            info!(file = %file, lines = lines.len(), "Importing texts");
            let pb = ProgressBar::new(lines.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("  Analyzing [{bar:30}] {pos}/{len} ({eta})")?,
            );

            let mut stored = 0usize;
            let mut failed = 0usize;
            for (idx, line) in lines.iter().enumerate() {
                let one = std::slice::from_ref(line);
                match analyze_texts(analyzer.as_ref(), db.as_ref(), one, config.top_k).await {
                    Ok(_) => stored += 1,
                    Err(e) => {
                        warn!(line = idx + 1, error = %e, "Skipping line");
                        failed += 1;
                    }
                }
                pb.inc(1);
            }
            pb.finish_and_clear();

            println!("Imported {stored} of {} texts from {file}", lines.len());
            if failed > 0 {
                println!(
                    "{}",
                    format!("{failed} line(s) failed, see the log for details").yellow()
                );
            }
        }

        Commands::Search { term } => {
            let config = Config::load()?;
            let db = gleaner::db::open_sqlite(&config.db_path)?;
            let matches = db.search_analyses(&term).await?;
            let payloads: Vec<_> = matches.iter().map(|a| a.to_payload()).collect();
            terminal::display_analyses(&format!("Matches for \"{term}\""), &payloads);
        }

        Commands::Status => {
            let config = Config::load()?;
            if !gleaner::status::is_initialized(&config.db_path) {
                println!("No database at {}.", config.db_path);
                println!("Run `gleaner init` to create one.");
                return Ok(());
            }
            let db = gleaner::db::open_sqlite(&config.db_path)?;
            gleaner::status::show(&db, &config.db_path).await?;
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            config.require_analyzer()?;
            let db = gleaner::db::initialize_sqlite(&config.db_path)?;
            let analyzer = create_analyzer(&config)?;
            gleaner::web::run_server(config, db, analyzer, port, &bind).await?;
        }
    }

    Ok(())
}

/// Create a text analyzer based on the configured backend.
fn create_analyzer(config: &Config) -> Result<Arc<dyn TextAnalyzer>> {
    match config.analyzer_backend {
        AnalyzerBackend::OpenAi => {
            info!(model = %config.openai_model, "Using OpenAI-compatible analyzer");
            let analyzer = OpenAiAnalyzer::new(
                config.openai_api_key.clone(),
                config.openai_model.clone(),
                &config.openai_base_url,
            )?;
            Ok(Arc::new(analyzer))
        }
        AnalyzerBackend::Mock => {
            info!("Using mock analyzer");
            Ok(Arc::new(MockAnalyzer))
        }
    }
}
