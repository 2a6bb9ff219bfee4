use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Shared application context for global flags
#[derive(Clone, Debug)]
pub struct AppContext {
    pub quiet: bool,    // global --quiet
    pub no_color: bool, // global --no-color
    pub dry_run: bool,  // global --dry-run
}

#[derive(Parser)]
#[command(name = "ploc")]
#[command(
    about = "A fast polyglot source-code composition analyzer: language detection and code/comment/blank line counting"
)]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Paths to scan when no subcommand is given (implies `summary`)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress progress bars and non-essential output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Show what would be scanned without reading file contents
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Per-language aggregate code/comment/blank table (default command)
    #[command(visible_short_flag_alias = 's')]
    Summary(SummaryArgs),

    /// Print the detected language per path, one per line
    Detect(DetectArgs),

    /// Print each source line prefixed with its classification (C/M/B)
    Annotate(AnnotateArgs),

    /// Per-file breakdown of language + code/comment/blank counts
    Individual(IndividualArgs),

    /// Scan for recognizable license texts under a root
    Licenses(LicensesArgs),

    /// Infer obvious project "gestalts" (cargo workspace, npm package, ...)
    Gestalt(GestaltArgs),

    /// Run the scanner in entity mode and print (kind, start, end) triples
    RawEntities(RawEntitiesArgs),

    /// Write a default polyloc.toml config file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct SummaryArgs {
    /// Paths to scan
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Additional glob patterns to ignore
    #[arg(short, long)]
    pub ignore: Vec<String>,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct DetectArgs {
    /// Paths to classify
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct AnnotateArgs {
    /// File to annotate
    pub path: PathBuf,

    /// Suppress leading line numbers
    #[arg(long)]
    pub no_line_numbers: bool,
}

#[derive(Parser, Debug)]
pub struct IndividualArgs {
    /// Paths to scan
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Additional glob patterns to ignore
    #[arg(short, long)]
    pub ignore: Vec<String>,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct LicensesArgs {
    /// Root directory to scan for LICENSE* files
    #[arg(default_value = ".")]
    pub root: PathBuf,
}

#[derive(Parser, Debug)]
pub struct GestaltArgs {
    /// Root directory to inspect
    #[arg(default_value = ".")]
    pub root: PathBuf,
}

#[derive(Parser, Debug)]
pub struct RawEntitiesArgs {
    /// File to scan in entity mode
    pub path: PathBuf,
}

#[derive(Parser)]
pub struct InitArgs {
    /// Directory to initialize config in
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing config file
    #[arg(long)]
    pub force: bool,
}
