// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "world-viewer")]
#[command(about = "Windowed viewer for world definition files", long_about = None)]
pub struct Cli {
    /// World definition file
    pub world: PathBuf,

    /// Settings file (JSON); defaults apply when the file is absent
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Override the window width from settings
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the window height from settings
    #[arg(long)]
    pub height: Option<u32>,
}
