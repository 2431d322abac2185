use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "qalyzer", version)]
#[clap(about = "AI-powered code quality review", long_about = None)]
pub struct Cli {
    /// Debug logging
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
