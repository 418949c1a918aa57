use anyhow::Result;
use tracing::info;

use crate::{
    config::ScraperConfig,
    error::ScrapeError,
    http::HttpClient,
    match_log,
    resolve::TeamResolver,
    types::{ScrapeTarget, TeamMatches},
};

/// Ties resolution, fetch and extraction together. One linear pass per run:
/// resolve, fetch, extract. No retries, no state between runs.
pub struct MatchLogScraper {
    config: ScraperConfig,
    client: HttpClient,
}

impl MatchLogScraper {
    pub fn new(config: ScraperConfig) -> Result<Self> {
        let client = HttpClient::new(&config.scraping)?;
        Ok(Self { config, client })
    }

    pub fn scrape(&self, target: &ScrapeTarget) -> Result<TeamMatches, ScrapeError> {
        let resolver = TeamResolver::new(&self.client, &self.config);
        let resolved = resolver.resolve(target)?;
        info!(team = %resolved.team.name, url = %resolved.matchlogs_url, "fetching match log");

        let html = self.client.get(&resolved.matchlogs_url)?;
        let matches = match_log::parse_match_logs(&html, &self.config.extract)?;
        info!(team = %resolved.team.name, matches = matches.len(), "extraction complete");

        Ok(TeamMatches {
            team: resolved.team,
            matches,
        })
    }
}
