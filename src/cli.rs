//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::guard::DEFAULT_THRESHOLD;
use crate::flows::recent::ListFormat;

/// recf - find and open recently modified files.
#[derive(Parser, Debug)]
#[command(name = "recf")]
#[command(
    author,
    version,
    about,
    long_about = r#"recf ranks the regular files under a directory by modification time.

recent prints the newest entries; red hands the ranked list to fzf with a
live preview and opens the selection in your editor.

Exclusion patterns apply to both: globs match whole path segments or the
full relative path, anything else matches as a substring.

Examples:
    recf recent
    recf recent 50 -x '*.log'
    recf red
    recf red --editor "code --wait"
    recf doctor
"#
)]
pub struct Cli {
    /// Root directory to scan.
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory to scan (defaults to the current directory).\n\n\
All paths emitted in results are relative to this root."
    )]
    pub root: PathBuf,

    /// Disable colored output.
    #[arg(
        long,
        global = true,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the most recently modified files.
    #[command(
        long_about = "Walk the tree under ROOT and print the newest files, one per line, as\n\
'<timestamp>  <path>'. Hidden files are included and symlinks are followed.\n\n\
An empty tree prints nothing and still exits 0.\n\n\
Examples:\n\
  recf recent\n\
  recf recent 50\n\
  recf recent -x dist -x '*.lock'\n"
    )]
    Recent {
        /// Number of entries to print.
        #[arg(value_name = "COUNT", default_value_t = 20)]
        count: usize,

        /// Extra exclusion pattern (repeatable).
        #[arg(
            short = 'x',
            long = "exclude",
            value_name = "PATTERN",
            long_help = "Extra exclusion pattern, merged with the defaults.\n\n\
Globs match whole segments or the full relative path ('*' does not cross '/');\n\
anything else matches as a substring of the relative path."
        )]
        exclude: Vec<String>,

        /// Drop the built-in default exclusions.
        #[arg(
            long,
            long_help = "Start from an empty exclusion set instead of the built-in defaults\n\
(.git, node_modules, target, caches, ...)."
        )]
        no_default_excludes: bool,

        /// Output format (plain/jsonl).
        #[arg(
            long,
            default_value = "plain",
            value_name = "FORMAT",
            long_help = "Select the output format.\n\n\
Supported values:\n\
- plain (default): '<timestamp>  <path>' lines\n\
- jsonl: one JSON object per line (path, mtime_ms, mtime)"
        )]
        format: String,
    },

    /// Pick a recent file with fzf and open it in your editor.
    #[command(
        long_about = "Rank the files under ROOT by modification time and hand them to fzf with\n\
a live preview. The selection is opened in the editor and recf exits with the\n\
editor's exit code; leaving the picker without choosing prints 'No file selected.'\n\
and exits 0.\n\n\
Requires fzf on PATH.\n\n\
Examples:\n\
  recf red\n\
  recf red -x vendor\n\
  EDITOR=hx recf red\n"
    )]
    Red {
        /// Extra exclusion pattern (repeatable).
        #[arg(short = 'x', long = "exclude", value_name = "PATTERN")]
        exclude: Vec<String>,

        /// Drop the built-in default exclusions.
        #[arg(long)]
        no_default_excludes: bool,

        /// Editor command used to open the selection.
        #[arg(
            long,
            env = "EDITOR",
            default_value = "vi",
            value_name = "CMD",
            long_help = "Editor command used to open the selection. May carry arguments\n\
(e.g. \"code --wait\"); the chosen path is appended last.\n\n\
Defaults to $EDITOR, falling back to vi."
        )]
        editor: String,

        /// File-count threshold above which a confirmation prompt appears.
        #[arg(
            long,
            default_value_t = DEFAULT_THRESHOLD,
            value_name = "N",
            long_help = "File-count threshold above which recf asks before ranking.\n\n\
A cheap counting pass runs first; if it finds more files than this, you are\n\
prompted (y/N) before the expensive ranking and preview work starts."
        )]
        threshold: usize,
    },

    /// Check external dependencies and environment.
    #[command(
        long_about = "Check whether the external tools recf relies on are installed and\n\
discoverable (fzf), and whether EDITOR is set.\n\n\
Example:\n\
  recf doctor\n"
    )]
    Doctor,

    /// Render the preview for one file (used internally by red).
    #[command(hide = true)]
    Preview {
        /// File to preview.
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Get absolute root path
    let root = cli.root.canonicalize().unwrap_or(cli.root);

    match cli.command {
        Commands::Recent {
            count,
            exclude,
            no_default_excludes,
            format,
        } => {
            let format: ListFormat = format.parse().unwrap_or_default();
            crate::flows::recent::run_recent(&root, count, &exclude, no_default_excludes, format)
        }

        Commands::Red {
            exclude,
            no_default_excludes,
            editor,
            threshold,
        } => crate::flows::red::run_red(&root, &exclude, no_default_excludes, &editor, threshold),

        Commands::Doctor => crate::backends::doctor::run_doctor(),

        Commands::Preview { path } => {
            print!("{}", crate::core::preview::render(&path));
            Ok(())
        }
    }
}
