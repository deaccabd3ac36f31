use std::path::Path;

use anyhow::Context;
use folio_diff::DiffOptions;
use folio_sdk::{Folio, FolioConfig};
use tracing::debug;

use crate::cli::*;
use crate::render;

const DEFAULT_CONFIG: &str = "folio.toml";

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let folio = open(&cli)?;
    match cli.command {
        Command::Articles => cmd_articles(&folio, &cli.format),
        Command::Versions(args) => cmd_versions(&folio, args, &cli.format),
        Command::Show(args) => cmd_show(&folio, args, &cli.format),
        Command::Compare(args) => cmd_compare(&folio, args, &cli.format),
    }
}

fn open(cli: &Cli) -> anyhow::Result<Folio> {
    let mut config = match &cli.config {
        Some(path) => FolioConfig::load(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => FolioConfig::load(DEFAULT_CONFIG)?,
        None => FolioConfig::default(),
    };
    if let Some(archive) = &cli.archive {
        config.archive = Some(archive.clone());
    }
    debug!(archive = ?config.archive, "opening archive");
    Folio::from_config(config).context("cannot open version archive (pass --archive or set `archive` in folio.toml)")
}

fn cmd_articles(folio: &Folio, format: &OutputFormat) -> anyhow::Result<()> {
    let articles = folio
        .articles()?
        .into_iter()
        .map(|slug| -> anyhow::Result<(String, usize)> {
            let count = folio.versions(&slug)?.len();
            Ok((slug, count))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&render::articles_json(&articles))?
        ),
        OutputFormat::Text => print!("{}", render::render_articles(&articles)),
    }
    Ok(())
}

fn cmd_versions(folio: &Folio, args: VersionsArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let versions = folio.versions(&args.slug)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&versions)?),
        OutputFormat::Text => print!("{}", render::render_versions(&versions)),
    }
    Ok(())
}

fn cmd_show(folio: &Folio, args: ShowArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let version = match args.version {
        Some(number) => folio.version(&args.slug, number)?,
        None => folio.current_version(&args.slug)?,
    };
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&version)?),
        OutputFormat::Text => print!("{}", render::render_version(&version)),
    }
    Ok(())
}

fn cmd_compare(folio: &Folio, args: CompareArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let to = match args.to {
        Some(number) => number,
        None => folio.current_version(&args.slug)?.version_number,
    };
    let from = match args.from {
        Some(number) => number,
        None => folio
            .previous_version(&args.slug, to)?
            .map(|v| v.version_number)
            .with_context(|| format!("version {to} of {} has no earlier version", args.slug))?,
    };

    let defaults = folio.config().diff;
    let options = DiffOptions {
        compare_words: defaults.compare_words && !args.no_words,
        ignore_whitespace: defaults.ignore_whitespace || args.ignore_whitespace,
    };
    let diff = folio.compare_with(&args.slug, from, to, &options)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&diff)?),
        OutputFormat::Text => print!("{}", render::render_diff(&diff, args.all)),
    }
    Ok(())
}
