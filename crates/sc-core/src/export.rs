//! Text exports of the table and the vehicle feed

use crate::error::ExportError;
use crate::record::Record;

/// Write the records as CSV with a header row
pub fn export_records_csv(records: &[Record]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["location", "air_quality_index", "traffic_level"])?;

    for record in records {
        let aqi = record.air_quality_index.to_string();
        writer.write_record([record.location.as_str(), aqi.as_str(), record.traffic_level.as_str()])?;
    }

    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

/// Dump the feed lines, one per line
pub fn export_feed<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
    lines.into_iter().collect::<Vec<_>>().join("\n")
}
