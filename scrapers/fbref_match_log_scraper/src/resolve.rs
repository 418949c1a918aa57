use regex::Regex;
use scraper::{Html, Selector};
use tracing::info;

use crate::{
    config::ScraperConfig,
    error::{ResolutionError, ScrapeError},
    http::HttpClient,
    types::{ScrapeTarget, Team},
    utils,
};

/// Squads FBref is routinely asked about, resolvable without touching the
/// search endpoint.
pub struct KnownTeam {
    pub key: &'static str,
    pub name: &'static str,
    pub id: &'static str,
    pub matchlogs_path: &'static str,
}

pub const KNOWN_TEAMS: &[KnownTeam] = &[
    KnownTeam {
        key: "manchester city",
        name: "Manchester City",
        id: "b8fd03ef",
        matchlogs_path: "/en/squads/b8fd03ef/matchlogs/all_comps/Manchester-City-Scores-and-Fixtures-All-Competitions",
    },
    KnownTeam {
        key: "manchester united",
        name: "Manchester United",
        id: "19538871",
        matchlogs_path: "/en/squads/19538871/matchlogs/all_comps/Manchester-United-Scores-and-Fixtures-All-Competitions",
    },
    KnownTeam {
        key: "liverpool",
        name: "Liverpool",
        id: "822bd0ba",
        matchlogs_path: "/en/squads/822bd0ba/matchlogs/all_comps/Liverpool-Scores-and-Fixtures-All-Competitions",
    },
    KnownTeam {
        key: "arsenal",
        name: "Arsenal",
        id: "18bb7c10",
        matchlogs_path: "/en/squads/18bb7c10/matchlogs/all_comps/Arsenal-Scores-and-Fixtures-All-Competitions",
    },
    KnownTeam {
        key: "chelsea",
        name: "Chelsea",
        id: "cff3d9bb",
        matchlogs_path: "/en/squads/cff3d9bb/matchlogs/all_comps/Chelsea-Scores-and-Fixtures-All-Competitions",
    },
    KnownTeam {
        key: "tottenham",
        name: "Tottenham Hotspur",
        id: "361ca564",
        matchlogs_path: "/en/squads/361ca564/matchlogs/all_comps/Tottenham-Hotspur-Scores-and-Fixtures-All-Competitions",
    },
    KnownTeam {
        key: "barcelona",
        name: "Barcelona",
        id: "206d90db",
        matchlogs_path: "/en/squads/206d90db/matchlogs/all_comps/Barcelona-Scores-and-Fixtures-All-Competitions",
    },
    KnownTeam {
        key: "real madrid",
        name: "Real Madrid",
        id: "53a2f082",
        matchlogs_path: "/en/squads/53a2f082/matchlogs/all_comps/Real-Madrid-Scores-and-Fixtures-All-Competitions",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTeam {
    pub team: Team,
    pub matchlogs_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub name: String,
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamPage {
    pub name: Option<String>,
    pub matchlogs_url: Option<String>,
}

pub struct TeamResolver<'a> {
    client: &'a HttpClient,
    config: &'a ScraperConfig,
}

impl<'a> TeamResolver<'a> {
    pub fn new(client: &'a HttpClient, config: &'a ScraperConfig) -> Self {
        Self { client, config }
    }

    pub fn resolve(&self, target: &ScrapeTarget) -> Result<ResolvedTeam, ScrapeError> {
        match target {
            ScrapeTarget::Name(name) => self.resolve_name(name),
            ScrapeTarget::Url(url) => self.resolve_url(url),
        }
    }

    fn resolve_name(&self, name: &str) -> Result<ResolvedTeam, ScrapeError> {
        if let Some(known) = known_team(name) {
            info!(team = known.name, "resolved via known-team table");
            return Ok(self.from_known(known));
        }

        let search_url = format!(
            "{}{}?search={}",
            self.config.site.base_url,
            self.config.site.search_path,
            urlencoding::encode(name)
        );
        let html = self.client.get(&search_url)?;
        let SearchHit { name: hit_name, id, url } = parse_search_results(&html, &self.config.site.base_url)
            .into_iter()
            .next()
            .ok_or_else(|| ResolutionError::TeamNotFound(name.to_string()))?;
        info!(team = %hit_name, %id, "resolved via site search");

        self.from_squad_page(&url, hit_name, id)
    }

    fn resolve_url(&self, url: &str) -> Result<ResolvedTeam, ScrapeError> {
        let id =
            squad_id(url).ok_or_else(|| ResolutionError::InvalidUrl(url.to_string()))?;

        if let Some(known) = KNOWN_TEAMS.iter().find(|team| team.id == id) {
            info!(team = known.name, "URL matches known team");
            return Ok(self.from_known(known));
        }

        // Already a match log URL: pass through unchanged.
        if url.contains("/matchlogs/") {
            return Ok(ResolvedTeam {
                team: Team {
                    name: utils::team_name_from_slug(url),
                    id,
                },
                matchlogs_url: url.to_string(),
            });
        }

        let fallback_name = utils::team_name_from_slug(url);
        self.from_squad_page(url, fallback_name, id)
    }

    fn from_known(&self, known: &KnownTeam) -> ResolvedTeam {
        ResolvedTeam {
            team: Team {
                name: known.name.to_string(),
                id: known.id.to_string(),
            },
            matchlogs_url: format!("{}{}", self.config.site.base_url, known.matchlogs_path),
        }
    }

    /// Fetch a squad page and locate its Match Logs link; construct the
    /// all-competitions URL when the page offers none.
    fn from_squad_page(
        &self,
        url: &str,
        fallback_name: String,
        id: String,
    ) -> Result<ResolvedTeam, ScrapeError> {
        let html = self.client.get(url)?;
        let page = parse_team_page(&html, &self.config.site.base_url);

        let name = page.name.unwrap_or(fallback_name);
        let matchlogs_url = page.matchlogs_url.unwrap_or_else(|| {
            format!(
                "{}/en/squads/{}/matchlogs/all_comps/{}-Scores-and-Fixtures-All-Competitions",
                self.config.site.base_url,
                id,
                name.replace(' ', "-")
            )
        });

        Ok(ResolvedTeam {
            team: Team { name, id },
            matchlogs_url,
        })
    }
}

fn known_team(name: &str) -> Option<&'static KnownTeam> {
    let key = name.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }
    KNOWN_TEAMS
        .iter()
        .find(|team| team.key == key || key.contains(team.key) || team.key.contains(key.as_str()))
}

/// Squad links from a search results page. Player and non-squad hits are
/// dropped.
pub fn parse_search_results(html: &str, base_url: &str) -> Vec<SearchHit> {
    let document = Html::parse_document(html);
    let link_selector = Selector::parse(".search-item-name a").unwrap();

    let mut hits = Vec::new();
    for link in document.select(&link_selector) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        if !href.contains("/squads/") {
            continue;
        }
        let Some(id) = squad_id(href) else {
            continue;
        };
        hits.push(SearchHit {
            name: link.text().collect::<String>().trim().to_string(),
            id,
            url: absolute_url(base_url, href),
        });
    }
    hits
}

/// Team name and Match Logs link from a squad page.
pub fn parse_team_page(html: &str, base_url: &str) -> TeamPage {
    let document = Html::parse_document(html);

    let name_selector = Selector::parse(r#"h1[itemprop="name"]"#).unwrap();
    let name = document
        .select(&name_selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|name| !name.is_empty());

    let nav_selector = Selector::parse("#inner_nav a").unwrap();
    let matchlogs_url = document
        .select(&nav_selector)
        .find(|link| link.text().collect::<String>().contains("Match Logs"))
        .and_then(|link| link.value().attr("href"))
        .map(|href| absolute_url(base_url, href));

    TeamPage {
        name,
        matchlogs_url,
    }
}

pub fn squad_id(url: &str) -> Option<String> {
    let pattern = Regex::new(r"/squads/([^/]+)/").unwrap();
    pattern
        .captures(url)
        .map(|captures| captures[1].to_string())
}

fn absolute_url(base_url: &str, href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{}{}", base_url, href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASE: &str = "https://fbref.com";

    #[test]
    fn test_parse_search_results_keeps_squads_only() {
        let html = r#"
            <div class="search-item">
                <div class="search-item-name">
                    <a href="/en/squads/b8fd03ef/Manchester-City-Stats">Manchester City</a>
                </div>
            </div>
            <div class="search-item">
                <div class="search-item-name">
                    <a href="/en/players/some-player">Some Player</a>
                </div>
            </div>
        "#;
        let hits = parse_search_results(html, BASE);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Manchester City");
        assert_eq!(hits[0].id, "b8fd03ef");
        assert_eq!(
            hits[0].url,
            "https://fbref.com/en/squads/b8fd03ef/Manchester-City-Stats"
        );
    }

    #[test]
    fn test_parse_team_page() {
        let html = r#"
            <div id="meta"><h1 itemprop="name">Manchester City</h1></div>
            <div id="inner_nav"><ul>
                <li><a href="/en/squads/b8fd03ef/matchlogs/2024-2025/Manchester-City-Match-Logs">Match Logs</a></li>
                <li><a href="/en/squads/b8fd03ef/wages/">Wages</a></li>
            </ul></div>
        "#;
        let page = parse_team_page(html, BASE);
        assert_eq!(page.name.as_deref(), Some("Manchester City"));
        assert_eq!(
            page.matchlogs_url.as_deref(),
            Some("https://fbref.com/en/squads/b8fd03ef/matchlogs/2024-2025/Manchester-City-Match-Logs")
        );
    }

    #[test]
    fn test_parse_team_page_without_matchlogs_link() {
        let page = parse_team_page("<html><body></body></html>", BASE);
        assert_eq!(page.name, None);
        assert_eq!(page.matchlogs_url, None);
    }

    #[test]
    fn test_squad_id() {
        assert_eq!(
            squad_id("https://fbref.com/en/squads/18bb7c10/Arsenal-Stats").as_deref(),
            Some("18bb7c10")
        );
        assert_eq!(squad_id("https://fbref.com/en/players/x/"), None);
    }

    #[test]
    fn test_known_team_matching_is_forgiving() {
        assert_eq!(known_team("Arsenal").unwrap().id, "18bb7c10");
        assert_eq!(known_team("arsenal fc").unwrap().id, "18bb7c10");
        assert_eq!(known_team("TOTTENHAM").unwrap().id, "361ca564");
        assert!(known_team("Stockport County").is_none());
        assert!(known_team("").is_none());
    }
}
