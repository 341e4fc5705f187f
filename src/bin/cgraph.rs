//! CLI entry point for the `cgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use classic_graphs::cli::{commands, config};
use classic_graphs::format::MatrixMode;
use classic_graphs::graph::ComponentRule;

#[derive(Parser)]
#[command(
    name = "cgraph",
    about = "Classic graph algorithms over weighted-matrix files"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable tables
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print vertex labels and adjacency lists
    Show {
        /// Path to the matrix file
        file: PathBuf,
        /// Treat every positive cell as a weighted edge
        #[arg(long)]
        weighted: bool,
    },
    /// Shortest distances from one vertex (Dijkstra)
    Dijkstra {
        /// Path to the matrix file
        file: PathBuf,
        /// Source vertex, as an index or a label (default: vertex 0)
        #[arg(long)]
        source: Option<String>,
        /// Treat every positive cell as a weighted edge
        #[arg(long)]
        weighted: bool,
    },
    /// Minimum spanning tree rooted at vertex 0 (Prim, weighted matrix)
    Prim {
        /// Path to the matrix file
        file: PathBuf,
    },
    /// Count connected components by flood fill
    Flood {
        /// One or more matrix files
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Count vertices without outgoing edges as their own components
        #[arg(long)]
        include_isolated: bool,
    },
    /// Brute-force isomorphism search between two graphs
    Iso {
        /// First matrix file
        file1: PathBuf,
        /// Second matrix file
        file2: PathBuf,
        /// Refuse graphs with more vertices than this
        #[arg(long)]
        max_vertices: Option<usize>,
    },
}

fn matrix_mode(weighted: bool) -> MatrixMode {
    if weighted {
        MatrixMode::Weighted
    } else {
        MatrixMode::Unweighted
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not usage errors
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };
    let json = cli.format == OutputFormat::Json;

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Show { file, weighted } => commands::cmd_show(&file, matrix_mode(weighted), json),
        Commands::Dijkstra {
            file,
            source,
            weighted,
        } => commands::cmd_dijkstra(&file, source.as_deref(), matrix_mode(weighted), json),
        Commands::Prim { file } => commands::cmd_prim(&file, json),
        Commands::Flood {
            files,
            include_isolated,
        } => {
            let rule = if include_isolated {
                ComponentRule::IncludeIsolated
            } else {
                ComponentRule::SkipIsolated
            };
            commands::cmd_flood(&files, rule, json)
        }
        Commands::Iso {
            file1,
            file2,
            max_vertices,
        } => {
            let max = config::resolve_iso_ceiling(max_vertices);
            commands::cmd_iso(&file1, &file2, max, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
