use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "adventfs")]
#[command(about = "Virtual filesystem shell for text adventures", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the files in the loaded world
    Ls,
    /// Open a file and print its rendered content
    Read(PathArgs),
    /// Print a file's short inspection description
    Examine(PathArgs),
}

#[derive(clap::Args, Debug)]
pub struct PathArgs {
    /// Virtual path of the file, e.g. /home/player/readme.txt
    pub path: String,
}
