//! Accept/skip loop for scraped venues.
//!
//! A scraper offers every record it extracts; the collector keeps the ones
//! that carry the required fields and a name it has not seen yet.

use std::collections::HashSet;
use tracing::debug;

use crate::completeness::{is_complete_venue, missing_keys};
use crate::dedup::is_duplicate_venue;
use crate::record::{record_name, Record};

/// Result of offering one record to a [`VenueCollector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    Accepted,
    /// A venue with the same name was already accepted.
    Duplicate,
    /// One or more required fields are absent.
    Incomplete,
    /// The `name` field is missing or not a string.
    Unnamed,
}

/// Counters over everything offered so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectStats {
    pub accepted: usize,
    pub duplicates: usize,
    pub incomplete: usize,
    pub unnamed: usize,
}

impl CollectStats {
    pub fn skipped(&self) -> usize {
        self.duplicates + self.incomplete + self.unnamed
    }
}

#[derive(Debug, Default)]
pub struct VenueCollector {
    required_fields: Vec<String>,
    seen_names: HashSet<String>,
    records: Vec<Record>,
    stats: CollectStats,
}

impl VenueCollector {
    pub fn new<I, S>(required_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required_fields: required_fields.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Checks completeness, then the name, then duplication. Accepted names
    /// are recorded only after the duplicate check.
    pub fn offer(&mut self, record: Record) -> Offer {
        if !is_complete_venue(&record, &self.required_fields) {
            debug!(
                missing = ?missing_keys(&record, &self.required_fields),
                "skipping incomplete venue"
            );
            self.stats.incomplete += 1;
            return Offer::Incomplete;
        }

        let name = match record_name(&record) {
            Some(name) => name.to_string(),
            None => {
                debug!("skipping venue without a string name");
                self.stats.unnamed += 1;
                return Offer::Unnamed;
            }
        };

        if is_duplicate_venue(&name, &self.seen_names) {
            debug!(name = %name, "skipping duplicate venue");
            self.stats.duplicates += 1;
            return Offer::Duplicate;
        }

        self.seen_names.insert(name);
        self.records.push(record);
        self.stats.accepted += 1;
        Offer::Accepted
    }

    pub fn extend<I: IntoIterator<Item = Record>>(&mut self, records: I) {
        for record in records {
            self.offer(record);
        }
    }

    pub fn seen_names(&self) -> &HashSet<String> {
        &self.seen_names
    }

    pub fn stats(&self) -> CollectStats {
        self.stats
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Accepted records in offer order.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}
