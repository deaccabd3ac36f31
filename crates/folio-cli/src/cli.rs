use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Browse and compare published versions of articles",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// JSON archive of article versions (overrides the config file)
    #[arg(long, global = true)]
    pub archive: Option<PathBuf>,

    /// TOML config file (defaults to ./folio.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List articles that have published versions
    Articles,
    /// List the published versions of an article
    Versions(VersionsArgs),
    /// Print the content of one version
    Show(ShowArgs),
    /// Show changes between two versions
    Compare(CompareArgs),
}

#[derive(Args)]
pub struct VersionsArgs {
    pub slug: String,
}

#[derive(Args)]
pub struct ShowArgs {
    pub slug: String,
    /// Version number (defaults to the current version)
    pub version: Option<u32>,
}

#[derive(Args)]
pub struct CompareArgs {
    pub slug: String,
    /// Older version (defaults to the version before `--to`)
    #[arg(long)]
    pub from: Option<u32>,
    /// Newer version (defaults to the current version)
    #[arg(long)]
    pub to: Option<u32>,
    /// Skip word-level detail for modified paragraphs and headings
    #[arg(long)]
    pub no_words: bool,
    /// Ignore leading and trailing whitespace when diffing words
    #[arg(long)]
    pub ignore_whitespace: bool,
    /// Also print unchanged blocks
    #[arg(long)]
    pub all: bool,
}
