//! Print the spacing/punctuation tables a locale rules file produces.
//!
//! Handy when editing per-locale rule files: shows exactly which sorted
//! sets and flags the classifier will answer queries from.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use libtextinput_core::{LocaleRules, SpacingAndPunctuations};

#[derive(Parser, Debug)]
#[command(
    name = "dump_rules",
    about = "Dump the classification tables built from a locale rules file"
)]
struct Args {
    /// Locale rules TOML file; the built-in English table when omitted
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Override the word-separator table with the given characters
    #[arg(long)]
    word_separators: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let rules = match &args.rules {
        Some(path) => LocaleRules::load_toml(path)?,
        None => LocaleRules::default(),
    };

    let mut tables = SpacingAndPunctuations::new(&rules);
    if let Some(raw) = &args.word_separators {
        tables = tables.with_word_separators(raw);
    }

    print!("{}", tables.dump());
    Ok(())
}
