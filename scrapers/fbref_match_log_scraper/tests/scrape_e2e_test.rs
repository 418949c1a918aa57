use fbref_match_log_scraper::{
    config::ScraperConfig,
    error::{FetchError, ResolutionError, ScrapeError},
    scraper::MatchLogScraper,
    types::{ScrapeTarget, Venue},
};
use mockito::Matcher;

const SEARCH_HTML: &str = include_str!("fixtures/search_results.html");
const TEAM_PAGE_HTML: &str = include_str!("fixtures/team_page.html");
const MATCHLOGS_HTML: &str = include_str!("fixtures/matchlogs_all_comps.html");
const NO_TABLE_HTML: &str = include_str!("fixtures/matchlogs_no_table.html");

fn test_config(base_url: String) -> ScraperConfig {
    let mut config = ScraperConfig::default();
    config.site.base_url = base_url;
    config
}

#[test]
fn test_scrape_by_name_via_search_and_team_page() {
    let mut server = mockito::Server::new();

    let search = server
        .mock("GET", "/en/search/search.fcgi")
        .match_query(Matcher::UrlEncoded("search".into(), "Newtown".into()))
        .with_body(SEARCH_HTML)
        .create();
    let team_page = server
        .mock("GET", "/en/squads/aa11bb22/Newtown-Stats")
        .with_body(TEAM_PAGE_HTML)
        .create();
    let matchlogs = server
        .mock("GET", "/en/squads/aa11bb22/matchlogs/2024-2025/Newtown-Match-Logs")
        .with_body(MATCHLOGS_HTML)
        .create();

    let scraper = MatchLogScraper::new(test_config(server.url())).unwrap();
    let result = scraper
        .scrape(&ScrapeTarget::Name("Newtown".to_string()))
        .unwrap();

    assert_eq!(result.team.name, "Newtown");
    assert_eq!(result.team.id, "aa11bb22");
    assert_eq!(result.matches.len(), 7);
    assert_eq!(result.matches[0].opponent, "Southampton");
    assert_eq!(result.matches[0].venue, Venue::Home);

    search.assert();
    team_page.assert();
    matchlogs.assert();
}

#[test]
fn test_scrape_by_squad_url() {
    let mut server = mockito::Server::new();

    let team_page = server
        .mock("GET", "/en/squads/aa11bb22/Newtown-Stats")
        .with_body(TEAM_PAGE_HTML)
        .create();
    let matchlogs = server
        .mock("GET", "/en/squads/aa11bb22/matchlogs/2024-2025/Newtown-Match-Logs")
        .with_body(MATCHLOGS_HTML)
        .create();

    let scraper = MatchLogScraper::new(test_config(server.url())).unwrap();
    let url = format!("{}/en/squads/aa11bb22/Newtown-Stats", server.url());
    let result = scraper.scrape(&ScrapeTarget::Url(url)).unwrap();

    assert_eq!(result.team.name, "Newtown");
    assert_eq!(result.matches.len(), 7);

    team_page.assert();
    matchlogs.assert();
}

#[test]
fn test_matchlog_url_passes_through_without_extra_fetches() {
    let mut server = mockito::Server::new();

    let matchlogs = server
        .mock(
            "GET",
            "/en/squads/aa11bb22/matchlogs/all_comps/Newtown-Scores-and-Fixtures-All-Competitions",
        )
        .with_body(MATCHLOGS_HTML)
        .expect(1)
        .create();

    let scraper = MatchLogScraper::new(test_config(server.url())).unwrap();
    let url = format!(
        "{}/en/squads/aa11bb22/matchlogs/all_comps/Newtown-Scores-and-Fixtures-All-Competitions",
        server.url()
    );
    let result = scraper.scrape(&ScrapeTarget::Url(url)).unwrap();

    assert_eq!(result.team.id, "aa11bb22");
    assert_eq!(result.matches.len(), 7);
    matchlogs.assert();
}

#[test]
fn test_unknown_name_yields_team_not_found() {
    let mut server = mockito::Server::new();

    server
        .mock("GET", "/en/search/search.fcgi")
        .match_query(Matcher::Any)
        .with_body("<html><body><div id=\"content\">No hits</div></body></html>")
        .create();

    let scraper = MatchLogScraper::new(test_config(server.url())).unwrap();
    let result = scraper.scrape(&ScrapeTarget::Name("Nonexistent FC".to_string()));

    assert!(matches!(
        result,
        Err(ScrapeError::Resolution(ResolutionError::TeamNotFound(_)))
    ));
}

#[test]
fn test_non_squad_url_is_rejected_without_fetching() {
    let server = mockito::Server::new();

    let scraper = MatchLogScraper::new(test_config(server.url())).unwrap();
    let url = format!("{}/en/players/f00dbeef/Ned-Newtown", server.url());
    let result = scraper.scrape(&ScrapeTarget::Url(url));

    assert!(matches!(
        result,
        Err(ScrapeError::Resolution(ResolutionError::InvalidUrl(_)))
    ));
}

#[test]
fn test_http_error_status_is_fatal() {
    let mut server = mockito::Server::new();

    server
        .mock(
            "GET",
            "/en/squads/aa11bb22/matchlogs/all_comps/Newtown-Scores-and-Fixtures-All-Competitions",
        )
        .with_status(500)
        .create();

    let scraper = MatchLogScraper::new(test_config(server.url())).unwrap();
    let url = format!(
        "{}/en/squads/aa11bb22/matchlogs/all_comps/Newtown-Scores-and-Fixtures-All-Competitions",
        server.url()
    );
    let result = scraper.scrape(&ScrapeTarget::Url(url));

    assert!(matches!(
        result,
        Err(ScrapeError::Fetch(FetchError::Http { status: 500, .. }))
    ));
}

#[test]
fn test_page_without_match_log_table_is_fatal() {
    let mut server = mockito::Server::new();

    server
        .mock(
            "GET",
            "/en/squads/aa11bb22/matchlogs/all_comps/Newtown-Scores-and-Fixtures-All-Competitions",
        )
        .with_body(NO_TABLE_HTML)
        .create();

    let scraper = MatchLogScraper::new(test_config(server.url())).unwrap();
    let url = format!(
        "{}/en/squads/aa11bb22/matchlogs/all_comps/Newtown-Scores-and-Fixtures-All-Competitions",
        server.url()
    );
    let result = scraper.scrape(&ScrapeTarget::Url(url));

    assert!(matches!(result, Err(ScrapeError::Extraction(_))));
}
