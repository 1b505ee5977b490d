//! # Knowledge Graph Search Main Driver
//!
//! ## Purpose
//! Main entry point for the knowledge graph search CLI. Loads configuration,
//! initializes logging, builds the engine, and dispatches ingest, search,
//! path, and interactive commands.
//!
//! ## Input/Output Specification
//! - **Input**: Configuration file, command line arguments, stdin (menu)
//! - **Output**: Human-readable query reports or JSON with `--json`
//!
//! ## Architecture Flow
//! 1. Parse command line arguments and load configuration
//! 2. Initialize logging and tracing
//! 3. Construct the search engine and ingest the document corpus
//! 4. Run the requested command or the interactive menu

use clap::{Arg, ArgAction, Command};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use knowledge_graph_search::{
    config::Config,
    errors::{EngineError, Result},
    ingestion,
    search::{PathDegree, SearchEngine},
};

fn main() -> Result<()> {
    let matches = Command::new("knowledge-search")
        .version("0.1.0")
        .author("Knowledge Graph Search Team")
        .about("In-memory keyword search with autocomplete, document hits, and relationship discovery")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("config.toml"),
        )
        .arg(
            Arg::new("documents")
                .short('d')
                .long("documents")
                .value_name("DIR")
                .help("Document directory (overrides configuration)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit machine-readable JSON instead of reports")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("ingest").about("Index the document directory and report statistics"),
        )
        .subcommand(
            Command::new("search")
                .about("Run a keyword query")
                .arg(Arg::new("keyword").value_name("KEYWORD").required(true)),
        )
        .subcommand(
            Command::new("path")
                .about("Trace the shortest relationship path between two keywords")
                .arg(Arg::new("from").value_name("KEYWORD").required(true))
                .arg(Arg::new("to").value_name("KEYWORD").required(true)),
        )
        .subcommand(Command::new("interactive").about("Run the interactive menu"))
        .get_matches();

    let config_path = matches.get_one::<String>("config").unwrap();
    let mut config = Config::from_file(config_path)?;
    if let Some(dir) = matches.get_one::<String>("documents") {
        config.ingestion.documents_dir = PathBuf::from(dir);
    }

    init_logging(&config)?;
    info!("Starting knowledge graph search");
    info!("Configuration loaded from: {}", config_path);

    let json_output = matches.get_flag("json");
    let documents_dir = config.ingestion.documents_dir.clone();
    let mut engine = SearchEngine::new(config)?;

    match matches.subcommand() {
        Some(("ingest", _)) => {
            let processed = ingestion::ingest_directory(&mut engine, &documents_dir)?;
            println!(
                "Processed {} documents, {} distinct keywords",
                processed,
                engine.indexed_keyword_count()
            );
        }
        Some(("search", sub)) => {
            ingestion::ingest_directory(&mut engine, &documents_dir)?;
            let keyword = sub.get_one::<String>("keyword").unwrap();
            run_search(&mut engine, keyword, json_output)?;
        }
        Some(("path", sub)) => {
            ingestion::ingest_directory(&mut engine, &documents_dir)?;
            let from = sub.get_one::<String>("from").unwrap();
            let to = sub.get_one::<String>("to").unwrap();
            run_path(&mut engine, from, to, json_output)?;
        }
        _ => {
            ingestion::ingest_directory(&mut engine, &documents_dir)?;
            run_interactive(&mut engine, &documents_dir)?;
        }
    }

    Ok(())
}

/// Initialize logging and tracing. `RUST_LOG` overrides the configured
/// level.
fn init_logging(config: &Config) -> Result<()> {
    if config.logging.level.parse::<tracing::Level>().is_err() {
        return Err(EngineError::Config {
            message: format!("Invalid log level: {}", config.logging.level),
        });
    }
    let filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level))
    };

    if config.logging.json_format {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .json()
                    .with_filter(filter()),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_filter(filter()),
            )
            .init();
    }

    Ok(())
}

/// Run one keyword query and print the report
fn run_search(engine: &mut SearchEngine, keyword: &str, json_output: bool) -> Result<()> {
    let response = match engine.query(keyword) {
        Ok(response) => response,
        Err(err) if err.is_skippable() => {
            println!("Cannot search '{}': {}", keyword, err);
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("=== SEARCH RESULTS FOR: '{}' ===", response.keyword);
    println!("SUGGESTIONS: {}", response.suggestions.join(", "));
    println!("FOUND_IN: {} documents", response.documents.len());
    for (i, hit) in response.documents.iter().enumerate() {
        println!(
            "RESULT: {}. {} (frequency: {})",
            i + 1,
            hit.document,
            hit.frequency
        );
    }
    println!("RELATED: {}", response.related.join(", "));
    println!("HISTORY: {}", response.history.join(" -> "));
    Ok(())
}

/// Trace and print the shortest path between two keywords
fn run_path(engine: &mut SearchEngine, from: &str, to: &str, json_output: bool) -> Result<()> {
    let response = match engine.path_query(from, to) {
        Ok(response) => response,
        Err(err) if err.is_skippable() => {
            println!("Cannot trace path: {}", err);
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    match response {
        Some(found) => {
            println!("PATH FOUND! (Length: {})", found.path.len());
            println!("Path: {}", found.path.join(" -> "));
            println!("Relationship strength: {} connection(s)", found.hops);
            match found.degree {
                PathDegree::Direct => {
                    println!("Direct connection (these keywords appear together)")
                }
                PathDegree::SecondDegree => {
                    println!("2nd degree connection (connected through 1 intermediate keyword)")
                }
                PathDegree::Degree(n) => println!("{} degree connection", n),
            }
        }
        None => {
            println!("NO PATH FOUND");
            println!("These keywords are not connected in the knowledge graph.");
        }
    }
    Ok(())
}

/// Interactive menu loop over stdin
fn run_interactive(engine: &mut SearchEngine, documents_dir: &Path) -> Result<()> {
    loop {
        println!();
        println!("=== KNOWLEDGE GRAPH SEARCH ===");
        println!("1. Search keyword");
        println!("2. Process documents");
        println!("3. Show search history");
        println!("4. Undo last search");
        println!("5. Redo search");
        println!("6. Trace path between keywords");
        println!("7. Exit");

        let choice = prompt("Choose an option: ")?;
        match choice.as_str() {
            "1" => {
                let keyword = prompt("Enter search term: ")?;
                run_search(engine, &keyword, false)?;
            }
            "2" => {
                let processed = ingestion::ingest_directory(engine, documents_dir)?;
                println!("Processed {} documents", processed);
            }
            "3" => {
                let history = engine.history();
                if history.is_empty() {
                    println!("No search history available.");
                } else {
                    for (i, term) in history.iter().enumerate() {
                        println!("{}. {}", i + 1, term);
                    }
                }
            }
            "4" => match engine.undo() {
                Some(term) => println!("Undo: returning from '{}'", term),
                None => println!("No searches to undo."),
            },
            "5" => match engine.redo() {
                Some(term) => println!("Redo: back to '{}'", term),
                None => println!("No searches to redo."),
            },
            "6" => {
                let from = prompt("Enter first keyword: ")?;
                let to = prompt("Enter second keyword: ")?;
                run_path(engine, &from, &to, false)?;
            }
            "7" => {
                println!("Exiting. Goodbye!");
                return Ok(());
            }
            "" => return Ok(()),
            _ => println!("Invalid option. Please try again."),
        }
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
