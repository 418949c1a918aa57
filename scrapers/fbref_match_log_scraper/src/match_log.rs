use scraper::Html;
use tracing::{debug, warn};

use crate::{
    config::{ColumnMap, ExtractConfig},
    error::ExtractionError,
    table::{StatRow, StatsTable},
    types::{MatchRecord, Venue},
    utils,
};

/// Extract up to `config.max_matches` played matches from a match log page.
///
/// Rows are taken in document order (most recent first). A row that fails
/// field coercion is skipped with a warning; one bad row never aborts the
/// batch. A missing table does.
pub fn parse_match_logs(
    html: &str,
    config: &ExtractConfig,
) -> Result<Vec<MatchRecord>, ExtractionError> {
    let document = Html::parse_document(html);
    let table = StatsTable::find(&document, &config.table_selector)
        .ok_or(ExtractionError::TableNotFound)?;

    let mut records = Vec::new();
    for row in table.rows() {
        if records.len() >= config.max_matches {
            break;
        }

        // Rows without a date are not match rows.
        let Some(date) = row.cell(&config.columns.date) else {
            continue;
        };
        if !is_competitive(&row, config) {
            debug!(%date, "skipping non-competitive fixture");
            continue;
        }

        match parse_row(&row, date, &config.columns) {
            Ok(record) => records.push(record),
            Err(ExtractionError::FieldParse { field, raw }) => {
                warn!(field, %raw, "skipping match row with unparseable field");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(records)
}

/// A row with no competition cell is competitive by assumption; FBref only
/// labels the column on all-competitions logs.
fn is_competitive(row: &StatRow, config: &ExtractConfig) -> bool {
    match row.cell(&config.columns.competition) {
        None => true,
        Some(comp) => !config
            .friendly_markers
            .iter()
            .any(|marker| comp.contains(marker.as_str())),
    }
}

fn parse_row(
    row: &StatRow,
    date: String,
    columns: &ColumnMap,
) -> Result<MatchRecord, ExtractionError> {
    let opponent = row.cell(&columns.opponent).unwrap_or_default();
    let venue_raw = row.cell(&columns.venue).unwrap_or_default();
    let venue = Venue::from_source(&venue_raw).ok_or(ExtractionError::FieldParse {
        field: "venue",
        raw: venue_raw,
    })?;

    let shots = count_field(row, &columns.shots, "shots")?;
    let shots_on_target = count_field(row, &columns.shots_on_target, "shots_on_target")?;
    // FBref publishes no off-target column; when the source omits it, fall
    // back to the difference of the other two.
    let shots_off_target = match count_field(row, &columns.shots_off_target, "shots_off_target")? {
        Some(off) => Some(off),
        None => match (shots, shots_on_target) {
            (Some(total), Some(on)) => Some(total.saturating_sub(on)),
            _ => None,
        },
    };

    Ok(MatchRecord {
        date,
        opponent,
        venue,
        goals_for: count_field(row, &columns.goals_for, "goals_for")?,
        goals_against: count_field(row, &columns.goals_against, "goals_against")?,
        shots,
        shots_on_target,
        shots_off_target,
        possession_pct: percent_field(row, &columns.possession, "possession_pct")?,
        passes_completed: count_field(row, &columns.passes_completed, "passes_completed")?,
        pass_accuracy_pct: percent_field(row, &columns.passes_pct, "pass_accuracy_pct")?,
        corners_for: count_field(row, &columns.corners_for, "corners_for")?,
        corners_against: count_field(row, &columns.corners_against, "corners_against")?,
        fouls_committed: count_field(row, &columns.fouls_committed, "fouls_committed")?,
        fouls_suffered: count_field(row, &columns.fouls_suffered, "fouls_suffered")?,
    })
}

fn count_field(
    row: &StatRow,
    stat: &str,
    field: &'static str,
) -> Result<Option<u32>, ExtractionError> {
    match row.cell(stat) {
        None => Ok(None),
        Some(raw) => utils::parse_count(&raw)
            .map(Some)
            .map_err(|_| ExtractionError::FieldParse { field, raw }),
    }
}

fn percent_field(
    row: &StatRow,
    stat: &str,
    field: &'static str,
) -> Result<Option<f64>, ExtractionError> {
    match row.cell(stat) {
        None => Ok(None),
        Some(raw) => utils::parse_percent(&raw)
            .map(Some)
            .map_err(|_| ExtractionError::FieldParse { field, raw }),
    }
}
