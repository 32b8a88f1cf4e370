use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum, ValueHint};
use ldquery::{EngineKind, NamedQuery};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "ldquery")]
/// JSON-LD to SPARQL query tool
pub struct Args {
    /// Log progress to stderr
    ///
    /// The RUST_LOG environment variable takes precedence.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load a JSON-LD file and show statistics
    Load {
        /// The JSON-LD file to load
        #[arg(value_hint = ValueHint::FilePath)]
        file_path: PathBuf,
        /// RDF engine to use
        #[arg(long, value_enum, default_value_t = EngineKind::Graph)]
        engine: EngineKind,
    },
    /// Run SPARQL queries on JSON-LD data
    Query(QueryArgs),
    /// Interactive SPARQL query mode
    Interactive {
        /// The JSON-LD file to load
        #[arg(value_hint = ValueHint::FilePath)]
        file_path: PathBuf,
        /// RDF engine to use
        #[arg(long, value_enum, default_value_t = EngineKind::Graph)]
        engine: EngineKind,
    },
    /// List all available example queries
    ListQueries,
}

#[derive(ClapArgs)]
pub struct QueryArgs {
    /// The JSON-LD file to load
    #[arg(value_hint = ValueHint::FilePath)]
    pub file_path: PathBuf,
    /// Predefined query to run
    #[arg(long, value_enum, conflicts_with = "query")]
    pub query_name: Option<NamedQuery>,
    /// Custom SPARQL query
    #[arg(long)]
    pub query: Option<String>,
    /// RDF engine to use
    #[arg(long, value_enum, default_value_t = EngineKind::Graph)]
    pub engine: EngineKind,
    /// Limit results
    ///
    /// Only applied to queries without a LIMIT clause. 0 disables the limit.
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum OutputFormat {
    /// A table for humans
    Table,
    /// A JSON array with one object per row
    Json,
}
