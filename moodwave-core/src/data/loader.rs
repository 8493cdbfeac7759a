use std::{io::Read, path::Path};

use anyhow::Context;
use chrono::{Datelike, NaiveDate};

use crate::{
    data::record::Record,
    foundation::error::{MoodwaveError, MoodwaveResult},
};

/// Textual date format of the `date` column (`MM-DD-YYYY`).
pub const DATE_FORMAT: &str = "%m-%d-%Y";

#[derive(Debug, serde::Deserialize)]
struct RawRow {
    date: String,
    #[serde(
        rename = "overall-positive-day-score",
        deserialize_with = "csv::invalid_option"
    )]
    overall_score: Option<f64>,
    #[serde(rename = "anxiety-level", deserialize_with = "csv::invalid_option")]
    anxiety: Option<f64>,
    #[serde(rename = "energy-level", deserialize_with = "csv::invalid_option")]
    energy: Option<f64>,
}

/// Counters describing what happened to the input rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct LoadReport {
    /// Data rows read (header excluded).
    pub rows_read: usize,
    /// Rows dropped because the date did not parse.
    pub skipped_invalid_date: usize,
    /// Rows kept with at least one empty or non-numeric value column.
    pub missing_values: usize,
    /// Records remaining after the month filter.
    pub kept: usize,
}

/// Month-filtered, chronologically sorted records plus the load report.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MonthData {
    pub records: Vec<Record>,
    pub report: LoadReport,
}

/// Parse a `MM-DD-YYYY` date; `None` when the text is not a valid calendar date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Stable ascending sort by date; equal dates keep their input order.
pub fn sort_chronological(records: &mut [Record]) {
    records.sort_by_key(|r| r.date);
}

/// Keep records whose month equals `month` (1-12), in every year present.
pub fn filter_month(records: &[Record], month: u32) -> Vec<Record> {
    records
        .iter()
        .filter(|r| r.date.month() == month)
        .cloned()
        .collect()
}

/// Deserialize every valid row of a headed CSV stream, in input order.
///
/// Rows with an unparsable date are skipped and counted. Empty or non-numeric value columns
/// are kept as `None` so every dated day survives. A structurally malformed stream is an error.
pub fn parse_records<R: Read>(reader: R) -> MoodwaveResult<(Vec<Record>, LoadReport)> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut report = LoadReport::default();
    let mut out = Vec::new();

    for (idx, row) in rdr.deserialize::<RawRow>().enumerate() {
        let row = row.map_err(|e| MoodwaveError::data(format!("csv row {}: {e}", idx + 1)))?;
        report.rows_read += 1;

        let Some(date) = parse_date(&row.date) else {
            tracing::warn!(row = idx + 1, date = %row.date, "skipping row with unparsable date");
            report.skipped_invalid_date += 1;
            continue;
        };
        let record = Record {
            date,
            overall_score: row.overall_score,
            anxiety: row.anxiety,
            energy: row.energy,
        };
        if record.has_missing_value() {
            tracing::warn!(row = idx + 1, %date, "row has a missing numeric value");
            report.missing_values += 1;
        }
        out.push(record);
    }

    Ok((out, report))
}

/// Read every valid record from a CSV file, in file order.
pub fn load_records(path: &Path) -> MoodwaveResult<(Vec<Record>, LoadReport)> {
    let file =
        std::fs::File::open(path).with_context(|| format!("open dataset '{}'", path.display()))?;
    parse_records(std::io::BufReader::new(file))
}

/// Load, sort and month-filter a dataset stream.
pub fn month_from_reader<R: Read>(reader: R, month: u32) -> MoodwaveResult<MonthData> {
    let (mut records, mut report) = parse_records(reader)?;
    sort_chronological(&mut records);
    let records = filter_month(&records, month);
    report.kept = records.len();
    Ok(MonthData { records, report })
}

/// Load, sort and month-filter a dataset file.
#[tracing::instrument]
pub fn load_month(path: &Path, month: u32) -> MoodwaveResult<MonthData> {
    let file =
        std::fs::File::open(path).with_context(|| format!("open dataset '{}'", path.display()))?;
    let data = month_from_reader(std::io::BufReader::new(file), month)?;
    tracing::info!(
        rows = data.report.rows_read,
        kept = data.report.kept,
        skipped = data.report.skipped_invalid_date,
        missing_values = data.report.missing_values,
        "dataset loaded"
    );
    Ok(data)
}

#[cfg(test)]
#[path = "../../tests/unit/data/loader.rs"]
mod tests;
