use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
    Home,
    Away,
}

impl Venue {
    /// FBref writes "Home"/"Away"; accept any casing.
    pub fn from_source(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "home" => Some(Self::Home),
            "away" => Some(Self::Away),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Away => "away",
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One played match, as extracted from the match log table.
///
/// Stats FBref omits for a given match stay `None` and render as empty CSV
/// cells; nothing is backfilled with zeroes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub date: String,
    pub opponent: String,
    pub venue: Venue,
    pub goals_for: Option<u32>,
    pub goals_against: Option<u32>,
    pub shots: Option<u32>,
    pub shots_on_target: Option<u32>,
    pub shots_off_target: Option<u32>,
    pub possession_pct: Option<f64>,
    pub passes_completed: Option<u32>,
    pub pass_accuracy_pct: Option<f64>,
    pub corners_for: Option<u32>,
    pub corners_against: Option<u32>,
    pub fouls_committed: Option<u32>,
    pub fouls_suffered: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    /// FBref squad id, the hex token in `/en/squads/<id>/...` URLs.
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMatches {
    pub team: Team,
    pub matches: Vec<MatchRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeTarget {
    Name(String),
    Url(String),
}
