//! recf - find and open recently modified files
//!
//! recf provides:
//! - Recursive scanning with glob/substring exclusion patterns
//! - Recency ranking by modification time
//! - An interactive fzf picker with a live file preview
//! - Editor launching for the picked file

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    // Check for unsupported platforms
    #[cfg(windows)]
    {
        eprintln!("Error: Windows is not supported; use WSL.");
        std::process::exit(1);
    }

    let cli = cli::Cli::parse();
    cli::run(cli)
}
