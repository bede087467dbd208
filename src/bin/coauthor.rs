//! Coauthor CLI: query a coauthorship dataset from the command line.
//!
//! Usage:
//!   coauthor --records papers.jsonl [--config path] [-v] <command>
//!
//! Every command prints JSON on stdout. Errors go to stderr with exit code 1.

use clap::{Parser, Subcommand, ValueEnum};
use coauthor::{CoauthorApi, Config, QueryError, QueryResult, SortKey};
use serde::Serialize;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "coauthor",
    version,
    about = "Coauthorship graph: identity resolution, collaboration paths, productivity rankings"
)]
struct Cli {
    /// JSON array or JSON Lines file of records
    #[arg(long, global = true)]
    records: Option<PathBuf>,
    /// YAML configuration file (default: <config dir>/coauthor/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingestion report
    Stats,
    /// Resolve free text to an author
    Resolve { text: String },
    /// Author profile: counts, titles, spellings
    Info { author: String },
    /// Cheapest collaboration path between two authors
    Path { from: String, to: String },
    /// Shortest paths inside an author's 2-hop neighborhood
    Neighborhood { author: String },
    /// Direct collaborators, most productive first
    Collaborators { author: String },
    /// Author with the most collaborators
    Top {
        /// List every author by collaborator count
        #[arg(long)]
        all: bool,
    },
    /// Longest simple collaboration path from an author
    Longest {
        author: String,
        /// Cap path length in hops
        #[arg(long)]
        max_depth: Option<usize>,
        /// Wall-clock budget in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
    /// Build a productivity tree from an author's collaborators
    Tree {
        author: String,
        /// Authors to delete from the tree after building it
        #[arg(long)]
        delete: Vec<String>,
    },
    /// List authors
    Authors {
        #[arg(long, value_enum, default_value = "papers")]
        sort: SortArg,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Search authors by name substring
    Search {
        text: String,
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Papers,
    Degree,
}

impl From<SortArg> for SortKey {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Papers => SortKey::PaperCount,
            SortArg::Degree => SortKey::Degree,
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn open_api(records: Option<PathBuf>, config: Config) -> Result<CoauthorApi, String> {
    let path = records.ok_or_else(|| "--records <file> is required".to_string())?;
    CoauthorApi::load(&path, config)
        .map_err(|e| format!("Failed to load records from {}: {}", path.display(), e))
}

fn emit<T: Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn fail(error: &QueryError) -> i32 {
    eprintln!("Error: {}", error);
    if let QueryError::Ambiguous { candidates, total, .. } = error {
        for candidate in candidates {
            eprintln!(
                "  {:<40}  {:<24}  {:>5} papers",
                candidate.display_name,
                candidate.key.as_str(),
                candidate.paper_count
            );
        }
        if *total > candidates.len() {
            eprintln!("  ... and {} more", total - candidates.len());
        }
    }
    1
}

fn respond<T: Serialize>(result: QueryResult<T>) -> i32 {
    match result {
        Ok(value) => emit(&value),
        Err(e) => fail(&e),
    }
}

fn cmd_resolve(api: &CoauthorApi, text: &str) -> i32 {
    let key = match api.resolve_identity(text) {
        Ok(key) => key,
        Err(e) => return fail(&e),
    };
    match api.graph().get_author(&key) {
        Some(author) => emit(author),
        None => fail(&QueryError::NotFound { query: key.to_string() }),
    }
}

fn cmd_top(api: &CoauthorApi, all: bool) -> i32 {
    if all {
        return emit(&api.degree_ranking());
    }
    match api.most_connected_author() {
        Some(top) => emit(&top),
        None => {
            eprintln!("Error: no collaborations in the dataset");
            1
        }
    }
}

fn cmd_tree(api: &mut CoauthorApi, author: &str, deletes: &[String]) -> i32 {
    if let Err(e) = api.build_tree_from_collaborators(author) {
        return fail(&e);
    }
    for text in deletes {
        if let Err(e) = api.delete_from_tree(text) {
            return fail(&e);
        }
    }
    respond(api.tree_in_order())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match Config::discover(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Command-line budgets and limits override the file
    match &cli.command {
        Commands::Longest {
            max_depth,
            timeout_ms,
            ..
        } => {
            if max_depth.is_some() {
                config.longest_path.max_depth = *max_depth;
            }
            if timeout_ms.is_some() {
                config.longest_path.timeout_ms = *timeout_ms;
            }
        }
        Commands::Authors { limit, .. } | Commands::Search { limit, .. } => {
            if limit.is_some() {
                config.search.limit = *limit;
            }
        }
        _ => {}
    }

    let mut api = match open_api(cli.records, config) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Stats => emit(api.report()),
        Commands::Resolve { text } => cmd_resolve(&api, &text),
        Commands::Info { author } => respond(api.author(&author)),
        Commands::Path { from, to } => respond(api.shortest_path(&from, &to)),
        Commands::Neighborhood { author } => respond(api.neighborhood_shortest_paths(&author)),
        Commands::Collaborators { author } => respond(api.collaborators(&author)),
        Commands::Top { all } => cmd_top(&api, all),
        Commands::Longest { author, .. } => respond(api.longest_simple_path(&author)),
        Commands::Tree { author, delete } => cmd_tree(&mut api, &author, &delete),
        Commands::Authors { sort, .. } => emit(&api.list_authors(sort.into())),
        Commands::Search { text, .. } => emit(&api.search_authors(&text)),
    };
    std::process::exit(code);
}
