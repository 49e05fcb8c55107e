//! Scrawl - A minimal terminal text editor with configurable highlighting.
//!
//! # Usage
//!
//! ```bash
//! scrawl notes.txt
//! scrawl --syntax rules.conf main.c
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use scrawl::app::App;

/// A minimal terminal text editor with configurable syntax highlighting
#[derive(Parser, Debug)]
#[command(name = "scrawl", version, about, long_about = None)]
struct Cli {
    /// File to open (created on first save if it does not exist)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Load a highlight rule set ([keywords]/[comments] sections) from this
    /// path; it is written back on quit
    #[arg(short = 's', long = "syntax", value_name = "CONFIG")]
    syntax: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let mut app = App::new(cli.file).with_rule_config(cli.syntax);
    app.run().context("Application error")
}
