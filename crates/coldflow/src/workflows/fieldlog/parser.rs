use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct FieldLogRow {
    pub(crate) line: u64,
    pub(crate) date: Option<NaiveDate>,
    pub(crate) raw_date: String,
    pub(crate) site: String,
    pub(crate) distance_km: f64,
    pub(crate) starts: u32,
    pub(crate) preheated: Option<bool>,
    pub(crate) raw_preheated: String,
    pub(crate) gap_minutes: f64,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<FieldLogRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        // physical line where the record starts
        let line = record
            .position()
            .map(|position| position.line())
            .unwrap_or_default();
        let row: RawRow = record.deserialize(Some(&headers))?;
        rows.push(FieldLogRow {
            line,
            date: parse_date(&row.date),
            raw_date: row.date,
            site: row.site.unwrap_or_default(),
            distance_km: row.distance_km,
            starts: row.starts,
            preheated: parse_flag(&row.preheated),
            raw_preheated: row.preheated,
            gap_minutes: row.gap_minutes,
        });
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Site", default, deserialize_with = "empty_string_as_none")]
    site: Option<String>,
    #[serde(rename = "Distance Km")]
    distance_km: f64,
    #[serde(rename = "Starts")]
    starts: u32,
    #[serde(rename = "Preheated")]
    preheated: String,
    #[serde(rename = "Gap Minutes")]
    gap_minutes: f64,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Some(true),
        "n" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}
