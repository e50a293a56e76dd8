//! Export ranked impact records as CSV or JSON.

use repa_core::error::Result;
use repa_core::types::ImpactRecord;
use std::path::Path;

/// Column order of [`records_to_csv`].
pub const CSV_HEADER: &str = "topic_id,topic_label,depth,depth_score,influence_score,semantic_score,impact_factor,frequency,centrality,is_specific_topic,equivalents_count,contributions_count";

/// Output layout for exported records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Infer the format from a file extension, defaulting to CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ExportFormat::Json,
            _ => ExportFormat::Csv,
        }
    }
}

/// Render records as CSV with a header row.
pub fn records_to_csv(records: &[ImpactRecord]) -> String {
    let mut csv = String::new();
    csv.push_str(CSV_HEADER);
    csv.push('\n');
    for r in records {
        csv.push_str(&format!(
            "{},{},{},{:.6},{:.6},{:.6},{:.6},{},{:.6},{},{},{}\n",
            csv_field(&r.topic_id),
            csv_field(&r.topic_label),
            r.depth,
            r.depth_score,
            r.influence_score,
            r.semantic_score,
            r.impact_factor,
            r.frequency,
            r.centrality,
            r.is_specific_topic,
            r.equivalents_count,
            r.contributions_count,
        ));
    }
    csv
}

/// Quote a field if it contains a separator, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render records as a pretty-printed JSON array.
pub fn records_to_json(records: &[ImpactRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Render records in `format`.
pub fn render(records: &[ImpactRecord], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => Ok(records_to_csv(records)),
        ExportFormat::Json => records_to_json(records),
    }
}

/// Write records to `path` in `format`.
pub fn write_records(records: &[ImpactRecord], path: &Path, format: ExportFormat) -> Result<()> {
    let content = render(records, format)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(topic: &str) -> ImpactRecord {
        ImpactRecord {
            topic_id: topic.to_string(),
            topic_label: repa_core::types::topic_label(topic),
            depth: 2,
            depth_score: 1.0,
            influence_score: 0.5,
            semantic_score: 0.25,
            impact_factor: 0.6375,
            frequency: 3,
            centrality: 0.125,
            is_specific_topic: true,
            equivalents_count: 1,
            contributions_count: 0,
        }
    }

    #[test]
    fn csv_has_header_and_rows() {
        let csv = records_to_csv(&[record("machine learning")]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(
            lines[1],
            "machine learning,Machine Learning,2,1.000000,0.500000,0.250000,0.637500,3,0.125000,true,1,0"
        );
    }

    #[test]
    fn csv_quotes_special_fields() {
        let csv = records_to_csv(&[record("data, \"big\"")]);
        assert!(csv.contains("\"data, \"\"big\"\"\""));
    }

    #[test]
    fn json_round_trips_records() {
        let records = vec![record("planning"), record("ai")];
        let json = records_to_json(&records).unwrap();
        let parsed: Vec<ImpactRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn write_records_picks_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ranked.json");
        let format = ExportFormat::from_path(&path);
        assert_eq!(format, ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("ranked.csv")), ExportFormat::Csv);

        write_records(&[record("ai")], &path, format).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.trim_start().starts_with('['));
    }
}
