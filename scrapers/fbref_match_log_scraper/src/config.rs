use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    pub base_url: String,
    pub search_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://fbref.com".to_string(),
            search_path: "/en/search/search.fcgi".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScrapingConfig {
    pub user_agent: String,
    pub request_timeout_secs: u64,
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (compatible; FbrefMatchLogScraper/0.1)".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Maps record fields to the `data-stat` keys FBref puts on table cells.
///
/// Cell lookup goes through these keys rather than column positions, so a
/// reordered source table keeps extracting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnMap {
    pub date: String,
    pub competition: String,
    pub venue: String,
    pub opponent: String,
    pub goals_for: String,
    pub goals_against: String,
    pub shots: String,
    pub shots_on_target: String,
    pub shots_off_target: String,
    pub possession: String,
    pub passes_completed: String,
    pub passes_pct: String,
    pub corners_for: String,
    pub corners_against: String,
    pub fouls_committed: String,
    pub fouls_suffered: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            date: "date".to_string(),
            competition: "comp".to_string(),
            venue: "venue".to_string(),
            opponent: "opponent".to_string(),
            goals_for: "goals_for".to_string(),
            goals_against: "goals_against".to_string(),
            shots: "shots".to_string(),
            shots_on_target: "shots_on_target".to_string(),
            shots_off_target: "shots_off_target".to_string(),
            possession: "possession".to_string(),
            passes_completed: "passes_completed".to_string(),
            passes_pct: "passes_pct".to_string(),
            corners_for: "corners".to_string(),
            corners_against: "corners_against".to_string(),
            fouls_committed: "fouls".to_string(),
            fouls_suffered: "fouled".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractConfig {
    pub max_matches: usize,
    pub table_selector: String,
    /// Competition values containing any of these are dropped as
    /// non-competitive fixtures.
    pub friendly_markers: Vec<String>,
    pub columns: ColumnMap,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_matches: 7,
            table_selector: "table.stats_table".to_string(),
            friendly_markers: vec!["Friendly".to_string(), "Friendlies".to_string()],
            columns: ColumnMap::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScraperConfig {
    pub site: SiteConfig,
    pub scraping: ScrapingConfig,
    pub extract: ExtractConfig,
}

impl ScraperConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = env::var("FBREF_BASE_URL") {
            config.site.base_url = base_url;
        }
        if let Ok(user_agent) = env::var("SCRAPER_USER_AGENT") {
            config.scraping.user_agent = user_agent;
        }
        if let Ok(timeout) = env::var("SCRAPER_TIMEOUT_SECS").map_or(Ok(None), |t| t.parse::<u64>().map(Some)) {
            if let Some(timeout) = timeout {
                config.scraping.request_timeout_secs = timeout;
            }
        }
        if let Ok(max) = env::var("SCRAPER_MAX_MATCHES").map_or(Ok(None), |m| m.parse::<usize>().map(Some)) {
            if let Some(max) = max {
                config.extract.max_matches = max;
            }
        }

        config
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            scraping: ScrapingConfig::default(),
            extract: ExtractConfig::default(),
        }
    }
}
