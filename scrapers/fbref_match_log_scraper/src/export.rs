use std::{io::Write, path::Path};

use crate::types::MatchRecord;

pub const CSV_HEADER: [&str; 15] = [
    "date",
    "opponent",
    "venue",
    "goals_for",
    "goals_against",
    "shots",
    "shots_on_target",
    "shots_off_target",
    "possession_pct",
    "passes_completed",
    "pass_accuracy_pct",
    "corners_for",
    "corners_against",
    "fouls_committed",
    "fouls_suffered",
];

pub fn write_records<W: Write>(writer: W, records: &[MatchRecord]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    write_into(&mut wtr, records)
}

pub fn write_records_to_path(path: &Path, records: &[MatchRecord]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    write_into(&mut wtr, records)
}

fn write_into<W: Write>(
    wtr: &mut csv::Writer<W>,
    records: &[MatchRecord],
) -> Result<(), csv::Error> {
    wtr.write_record(CSV_HEADER)?;

    for record in records {
        wtr.write_record(&[
            record.date.clone(),
            record.opponent.clone(),
            record.venue.to_string(),
            cell(record.goals_for),
            cell(record.goals_against),
            cell(record.shots),
            cell(record.shots_on_target),
            cell(record.shots_off_target),
            cell(record.possession_pct),
            cell(record.passes_completed),
            cell(record.pass_accuracy_pct),
            cell(record.corners_for),
            cell(record.corners_against),
            cell(record.fouls_committed),
            cell(record.fouls_suffered),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
