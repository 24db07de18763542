use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "blood-compat")]
#[command(about = "Blood type compatibility and regional distribution lookups")]
pub struct Cli {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Pretty-print JSON output")]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List all blood types with their compatibility information
    List,
    /// Show one blood type by its label (case-sensitive, e.g. "O-")
    Get { label: String },
    /// Show the blood type distribution for a region (case-insensitive)
    Region { name: String },
    /// Show the full donate/receive compatibility matrix
    Matrix,
    /// Check whether a donor type may donate to a recipient type
    Check { donor: String, recipient: String },
    /// Print the service welcome message
    Info,
    /// Print the service health status
    Health,
}
