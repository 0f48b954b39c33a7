use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "rofl")]
#[command(about = "Extract match metadata from League of Legends replay (.rofl) files")]
#[command(version)]
pub struct Cli {
    /// Replay file (.rofl), or a directory of replays for batch extraction
    pub input: String,

    /// Output JSON file, or output directory in batch mode
    pub output: String,

    /// Control colored output
    #[arg(long, default_value = "auto")]
    pub color: ColorMode,

    /// Write single-line JSON instead of 2-space indented JSON
    #[arg(long)]
    pub compact: bool,

    /// Print a participant scoreboard after extraction
    #[arg(short, long)]
    pub summary: bool,

    /// Show debug diagnostics (layout, segment bounds) on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}
