//! Record validation for manual entry and bulk text import
//!
//! Bulk import format: one record per line, `location,aqi,traffic`, no header
//! and no quoting. Only the traffic field is trimmed.

use crate::error::RecordError;
use crate::record::Record;

/// Number of comma separated fields in one import line
const FIELDS_PER_LINE: usize = 3;

/// Outcome of a bulk import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub accepted: usize,
    pub skipped: usize,
}

/// Validate the three raw form fields and build a record.
///
/// Fields are taken as given: a location of `" "` is accepted, an AQI of
/// `" 90"` is not.
pub fn validate(location: &str, air_quality_index: &str, traffic_level: &str) -> Result<Record, RecordError> {
    if location.is_empty() {
        return Err(RecordError::EmptyLocation);
    }
    if traffic_level.is_empty() {
        return Err(RecordError::EmptyTrafficLevel);
    }
    let aqi = air_quality_index
        .parse::<i64>()
        .map_err(|_| RecordError::InvalidAirQuality(air_quality_index.to_string()))?;

    Ok(Record::new(location, aqi, traffic_level))
}

/// Parse one line of a bulk import
pub fn parse_line(line: &str) -> Result<Record, RecordError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELDS_PER_LINE {
        return Err(RecordError::WrongFieldCount(fields.len()));
    }

    validate(fields[0], fields[1], fields[2].trim())
}

/// Parse every line of an import, keeping the good records in order
pub fn parse_bulk(text: &str) -> (Vec<Record>, IngestReport) {
    let mut records = Vec::new();
    let mut report = IngestReport::default();

    for (line_no, line) in text.split('\n').enumerate() {
        match parse_line(line) {
            Ok(record) => {
                records.push(record);
                report.accepted += 1;
            }
            Err(e) => {
                tracing::debug!("Skipping import line {}: {}", line_no + 1, e);
                report.skipped += 1;
            }
        }
    }

    (records, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_fields() {
        assert_eq!(validate("", "90", "Low"), Err(RecordError::EmptyLocation));
        assert_eq!(validate("Pune", "90", ""), Err(RecordError::EmptyTrafficLevel));
        assert_eq!(
            validate("Pune", "ninety", "Low"),
            Err(RecordError::InvalidAirQuality("ninety".to_string()))
        );
    }

    #[test]
    fn test_parse_line() {
        let record = parse_line("Delhi,250,Severe").unwrap();
        assert_eq!(record, Record::new("Delhi", 250, "Severe"));

        assert_eq!(parse_line("BadRow"), Err(RecordError::WrongFieldCount(1)));
        assert_eq!(parse_line("a,1,b,c"), Err(RecordError::WrongFieldCount(4)));
        assert_eq!(parse_line(""), Err(RecordError::WrongFieldCount(1)));
    }

    #[test]
    fn test_only_traffic_field_is_trimmed() {
        let record = parse_line("Delhi,250, Severe \r").unwrap();
        assert_eq!(record.traffic_level, "Severe");

        assert!(parse_line("Delhi, 250,Severe").is_err());
        assert!(parse_line("Delhi,250,   ").is_err());

        let record = parse_line(" Delhi,250,Low").unwrap();
        assert_eq!(record.location, " Delhi");
    }

    #[test]
    fn test_parse_bulk_skips_malformed_lines() {
        let (records, report) = parse_bulk("Delhi,250,Severe\nBadRow\nMumbai,90,Low");
        assert_eq!(records, vec![
            Record::new("Delhi", 250, "Severe"),
            Record::new("Mumbai", 90, "Low"),
        ]);
        assert_eq!(report, IngestReport { accepted: 2, skipped: 1 });
    }

    #[test]
    fn test_parse_bulk_accepts_crlf() {
        let (records, report) = parse_bulk("Delhi,250,Severe\r\nMumbai,90,Low\r\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].traffic_level, "Low");
        // trailing newline leaves one empty line
        assert_eq!(report.skipped, 1);
    }
}
