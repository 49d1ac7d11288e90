use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Script file written in the Hangul object-dot notation
    pub input: PathBuf,
    /// JSON file the raw script is appended to after a successful run
    #[arg(long)]
    pub history: Option<PathBuf>,
    /// Dump the parse and convert result as JSON instead of a summary
    #[arg(long)]
    pub dump_json: bool,
}
