use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "apidocs-search")]
#[command(about = "Fuzzy search over a parsed API documentation corpus", long_about = None)]
pub struct Cli {
    /// Path to the documentation JSON (an array of module records)
    pub corpus: PathBuf,

    /// Run a single query and exit. Without it, queries are read from stdin.
    pub query: Option<String>,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    pub config: Option<String>,

    /// Maximum number of results
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Maximum accepted match cost, from 0.0 (exact) to 1.0
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
