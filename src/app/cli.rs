use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "lyricard")]
#[command(version)]
#[command(about = "A terminal lyrics card for a media player entity", long_about = None)]
pub struct Args {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Entity to follow (overrides [card] entity)
    #[arg(short, long)]
    pub entity: Option<String>,

    /// Read state notifications from this file or FIFO instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write a default config file to the given path (or directory) and exit
    #[arg(long, value_name = "PATH")]
    pub generate_config: Option<PathBuf>,

    /// Print the media player entities found in the first notification and exit
    #[arg(long)]
    pub list_entities: bool,
}
