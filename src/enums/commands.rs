use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::analysis_mode::Mode;

#[derive(Subcommand)]
pub enum Commands {
    /// Create a sample config at ~/qalyzer/config.toml
    Init {
        #[clap(short, long)]
        force: bool,
    },
    /// Send code to the model, store and print the review
    Analyze {
        #[clap(short, long)]
        file: Option<PathBuf>,
        #[clap(short, long)]
        code: Option<String>,
        #[clap(short, long)]
        language: Option<String>,
        #[clap(short, long)]
        title: Option<String>,
        #[clap(short, long, value_enum, default_value_t = Mode::Standard)]
        mode: Mode,
        #[clap(long)]
        json: bool,
    },
    /// Print the prompt that would be sent, without calling the model
    Prompt {
        #[clap(short, long)]
        file: Option<PathBuf>,
        #[clap(short, long)]
        code: Option<String>,
        #[clap(short, long)]
        language: Option<String>,
        #[clap(short, long, value_enum, default_value_t = Mode::Standard)]
        mode: Mode,
    },
    /// Parse a raw model reply read from a file, or stdin with "-"
    Parse {
        input: PathBuf,
        #[clap(short, long, value_enum, default_value_t = Mode::Standard)]
        mode: Mode,
        #[clap(long)]
        json: bool,
        /// Keep the overall score absent instead of deriving it
        #[clap(long)]
        raw_scores: bool,
    },
    /// List stored analyses, newest first
    List {
        #[clap(short, long)]
        language: Option<String>,
        /// Print the distinct languages instead
        #[clap(long)]
        languages: bool,
    },
    Show {
        id: String,
        #[clap(long)]
        json: bool,
    },
    /// Write a cleaned plain-text version of an analysis
    Export {
        id: String,
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    Delete {
        id: String,
    },
    Validate,
}
