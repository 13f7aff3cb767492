//! Ordered in-memory record store

use crate::error::RecordError;
use crate::ingest::{self, IngestReport};
use crate::record::Record;

/// The single source of truth for the dashboard.
///
/// Insertion order is kept; a record's position is the row index shown in
/// the table and used for deletion.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Validate the raw fields and append the record to the end
    pub fn add(&mut self, location: &str, air_quality_index: &str, traffic_level: &str) -> Result<usize, RecordError> {
        let record = ingest::validate(location, air_quality_index, traffic_level)?;
        Ok(self.push(record))
    }

    /// Append an already validated record, returning its position
    pub fn push(&mut self, record: Record) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// Remove the record at `index`; out of range is a no-op
    pub fn remove(&mut self, index: usize) -> Option<Record> {
        if index < self.records.len() {
            Some(self.records.remove(index))
        } else {
            None
        }
    }

    /// Append every well-formed line of `text`
    pub fn extend_from_text(&mut self, text: &str) -> IngestReport {
        let (records, report) = ingest::parse_bulk(text);
        self.records.extend(records);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_last() {
        let mut store = RecordStore::new();
        store.add("Delhi", "250", "Severe").unwrap();
        let index = store.add("Mumbai", "90", "Low").unwrap();

        assert_eq!(index, 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.records().last(), Some(&Record::new("Mumbai", 90, "Low")));
    }

    #[test]
    fn test_invalid_add_leaves_store_unchanged() {
        let mut store = RecordStore::new();
        store.add("Delhi", "250", "Severe").unwrap();

        assert!(store.add("", "250", "Severe").is_err());
        assert!(store.add("Pune", "250", "").is_err());
        assert!(store.add("Pune", "abc", "Low").is_err());
        assert!(store.add("Pune", "", "Low").is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut store = RecordStore::new();
        store.add("A", "1", "Low").unwrap();
        store.add("B", "2", "Low").unwrap();
        store.add("C", "3", "Low").unwrap();

        assert_eq!(store.remove(1), Some(Record::new("B", 2, "Low")));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).map(|r| r.location.as_str()), Some("C"));

        assert_eq!(store.remove(2), None);
        assert_eq!(store.remove(usize::MAX), None);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_extend_from_text() {
        let mut store = RecordStore::new();
        store.add("Pune", "40", "Low").unwrap();
        let report = store.extend_from_text("Delhi,250,Severe\nBadRow\nMumbai,90,Low");

        assert_eq!(report.accepted, 2);
        assert_eq!(store.len(), 3);
        assert_eq!(store.records()[1], Record::new("Delhi", 250, "Severe"));
        assert_eq!(store.records()[2], Record::new("Mumbai", 90, "Low"));
    }
}
