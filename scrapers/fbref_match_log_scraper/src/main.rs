use std::{io, path::PathBuf};

use anyhow::Result;
use clap::{ArgGroup, Parser};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fbref_match_log_scraper::{
    config::ScraperConfig, export, scraper::MatchLogScraper, types::ScrapeTarget,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Scrape a team's recent match results from FBref into CSV", long_about = None)]
#[command(group(ArgGroup::new("target").required(true).args(["team", "url"])))]
struct Cli {
    /// Team name, resolved via the known-team table or the site search
    #[arg(long)]
    team: Option<String>,

    /// Direct FBref squad or match log URL
    #[arg(long)]
    url: Option<String>,

    /// Output CSV file path
    #[arg(long, default_value = "output.csv")]
    output: PathBuf,

    /// Write CSV to stdout instead of a file
    #[arg(long)]
    stdout: bool,

    /// Number of recent matches to retrieve
    #[arg(long, default_value_t = 7)]
    matches: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "fbref_match_log_scraper=debug"
    } else {
        "fbref_match_log_scraper=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = ScraperConfig::from_env();
    config.extract.max_matches = cli.matches;

    let target = match (&cli.team, &cli.url) {
        (Some(name), None) => ScrapeTarget::Name(name.clone()),
        (None, Some(url)) => ScrapeTarget::Url(url.clone()),
        _ => unreachable!("clap enforces exactly one of --team/--url"),
    };

    let scraper = MatchLogScraper::new(config)?;
    let result = scraper.scrape(&target)?;

    if result.matches.is_empty() {
        anyhow::bail!("no matches found for team: {}", result.team.name);
    }
    info!(team = %result.team.name, matches = result.matches.len(), "scrape complete");

    if cli.stdout {
        export::write_records(io::stdout().lock(), &result.matches)?;
    } else {
        export::write_records_to_path(&cli.output, &result.matches)?;
        info!(path = %cli.output.display(), "CSV written");
    }

    Ok(())
}
