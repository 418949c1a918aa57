use std::num::{ParseFloatError, ParseIntError};

/// Parse a count cell, tolerating thousands separators ("1,234").
pub fn parse_count(raw: &str) -> Result<u32, ParseIntError> {
    raw.trim().replace(',', "").parse()
}

/// Parse a percentage cell, tolerating a trailing '%' ("54.3%").
pub fn parse_percent(raw: &str) -> Result<f64, ParseFloatError> {
    raw.trim().trim_end_matches('%').trim().parse()
}

/// Best-effort team name from the last path segment of a squad URL,
/// e.g. ".../squads/18bb7c10/Arsenal-Stats" -> "Arsenal".
pub fn team_name_from_slug(url: &str) -> String {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(url)
        .trim_end_matches("-Stats")
        .replace('-', " ")
}
