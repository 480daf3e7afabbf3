//! Scraped records and the default venue model.
//!
//! A [`Record`] is the loosely typed form every helper in this crate consumes:
//! an insertion-ordered map from field name to JSON value. [`Venue`] is the
//! typed model scrapers fill in; it converts into a `Record` and supplies the
//! schema used for CSV export.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::schema::RecordSchema;

/// One scraped entity, keyed by field name.
pub type Record = Map<String, Value>;

/// Field holding the venue name, used for de-duplication.
pub const NAME_FIELD: &str = "name";

/// A wedding/event venue as scraped from a listing page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub capacity: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl RecordSchema for Venue {
    const FIELDS: &'static [&'static str] = &[
        "name",
        "location",
        "price",
        "capacity",
        "rating",
        "reviews",
        "description",
        "url",
    ];
}

impl Venue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Converts into the map form. Every schema field is present; unset
    /// optional fields are `null`.
    pub fn to_record(&self) -> Record {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            // A struct of plain fields always serializes to an object.
            _ => Record::new(),
        }
    }
}

impl From<Venue> for Record {
    fn from(venue: Venue) -> Self {
        venue.to_record()
    }
}

/// Returns the record's name if it is a JSON string.
pub fn record_name(record: &Record) -> Option<&str> {
    record.get(NAME_FIELD).and_then(Value::as_str)
}

/// Loads scraped records from a JSON array file or a JSON Lines file.
///
/// Blank lines in JSON Lines input are skipped. Every entry must be an object.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read records from {}", path.display()))?;
    parse_records(&data).with_context(|| format!("parse records from {}", path.display()))
}

fn parse_records(data: &str) -> Result<Vec<Record>> {
    let values: Vec<Value> = if data.trim_start().starts_with('[') {
        serde_json::from_str(data).context("invalid JSON array")?
    } else {
        data.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(n, line)| {
                serde_json::from_str(line).with_context(|| format!("invalid JSON on line {}", n + 1))
            })
            .collect::<Result<_>>()?
    };

    let mut records = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match value {
            Value::Object(map) => records.push(map),
            other => bail!("entry {index} is not a JSON object: {other}"),
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn venue_record_follows_schema_order() {
        let mut venue = Venue::new("The Barn");
        venue.rating = Some(4.5);
        let record = venue.to_record();
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, Venue::FIELDS);
        assert_eq!(record["name"], "The Barn");
        assert_eq!(record["rating"], 4.5);
        assert!(record["price"].is_null());
    }

    #[test]
    fn record_name_requires_string() {
        let mut record = Record::new();
        assert_eq!(record_name(&record), None);
        record.insert("name".into(), Value::from(7));
        assert_eq!(record_name(&record), None);
        record.insert("name".into(), Value::from("Loft"));
        assert_eq!(record_name(&record), Some("Loft"));
    }

    #[test]
    fn parse_json_array() {
        let records = parse_records(r#"[{"name": "A"}, {"name": "B", "price": "$$"}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["price"], "$$");
    }

    #[test]
    fn parse_json_lines_skips_blank_lines() {
        let data = "{\"name\": \"A\"}\n\n  \n{\"name\": \"B\"}\n";
        let records = parse_records(data).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(record_name(&records[1]), Some("B"));
    }

    #[test]
    fn parse_rejects_non_objects() {
        let err = parse_records(r#"[{"name": "A"}, 3]"#).unwrap_err();
        assert!(err.to_string().contains("entry 1"));
        assert!(parse_records("{\"name\": \"A\"}\nnot json\n").is_err());
    }

    #[test]
    fn load_records_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "{{\"name\": \"Hall\", \"capacity\": \"200\"}}").unwrap();
        f.flush().unwrap();
        let records = load_records(f.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["capacity"], "200");
    }
}
