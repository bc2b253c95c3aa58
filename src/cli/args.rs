//! Command-line argument definitions using clap

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::pipeline::DEFAULT_TOOL;

/// ffwizard - Interactively resize and convert images with ffmpeg
#[derive(Parser, Debug)]
#[command(name = "ffwizard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to start browsing from.
    /// Defaults to the current working directory. Relative output
    /// directories are resolved against it.
    #[arg(short = 'C', long = "dir")]
    pub dir: Option<PathBuf>,

    /// Name or path of the transcoding program
    #[arg(long, default_value = DEFAULT_TOOL)]
    pub ffmpeg: String,

    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resolve the absolute directory the wizard starts in
    pub fn start_dir(&self) -> Result<PathBuf> {
        match &self.dir {
            Some(dir) => dir
                .canonicalize()
                .with_context(|| format!("Start directory not found: {}", dir.display())),
            None => std::env::current_dir().context("Failed to read the current directory"),
        }
    }
}
