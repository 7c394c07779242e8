use crate::core::codec::ServiceAreaCodec;
use crate::domain::model::RadiusMode;
use crate::utils::error::{AreaError, Result};
use serde::Serialize;
use std::io::{Read, Write};
use tracing::{debug, info};

const OUTPUT_HEADERS: [&str; 7] = [
    "id",
    "radius",
    "business_plz",
    "business_canton",
    "custom_cantons",
    "estimated_codes",
    "summary",
];

/// Splits an exported stored-area cell into its entries.
///
/// Understands plain `ZH,BE`, Postgres array text `{ZH,BE}` and JSON-style
/// `["ZH","BE"]`.
pub fn parse_stored_cell(cell: &str) -> Vec<String> {
    let trimmed = cell.trim();
    let inner = trimmed
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .or_else(|| trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')))
        .unwrap_or(trimmed);

    inner
        .split(',')
        .map(|token| token.trim().trim_matches('"').trim())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub total: usize,
    pub city: usize,
    pub canton: usize,
    pub nationwide: usize,
    pub custom: usize,
}

impl BatchReport {
    fn record(&mut self, radius: RadiusMode) {
        self.total += 1;
        match radius {
            RadiusMode::City => self.city += 1,
            RadiusMode::Canton => self.canton += 1,
            RadiusMode::Nationwide => self.nationwide += 1,
            RadiusMode::Custom => self.custom += 1,
        }
    }
}

/// Decodes every row of a CSV export and writes one classified row per input row.
pub struct BatchProcessor<'c, 'a> {
    codec: &'c ServiceAreaCodec<'a>,
    id_column: String,
    areas_column: String,
}

impl<'c, 'a> BatchProcessor<'c, 'a> {
    pub fn new(codec: &'c ServiceAreaCodec<'a>) -> Self {
        Self {
            codec,
            id_column: "id".to_string(),
            areas_column: "service_areas".to_string(),
        }
    }

    pub fn with_columns(
        mut self,
        id_column: impl Into<String>,
        areas_column: impl Into<String>,
    ) -> Self {
        self.id_column = id_column.into();
        self.areas_column = areas_column.into();
        self
    }

    pub fn run<R: Read, W: Write>(&self, input: R, output: W) -> Result<BatchReport> {
        let mut reader = csv::Reader::from_reader(input);
        let headers = reader.headers()?.clone();
        let id_idx = self.column_index(&headers, &self.id_column)?;
        let areas_idx = self.column_index(&headers, &self.areas_column)?;

        let mut writer = csv::Writer::from_writer(output);
        writer.write_record(OUTPUT_HEADERS)?;

        let mut report = BatchReport::default();
        for record in reader.records() {
            let record = record?;
            let id = record.get(id_idx).unwrap_or_default();
            let stored = parse_stored_cell(record.get(areas_idx).unwrap_or_default());

            let config = self.codec.decode(&stored);
            let encoded = self.codec.encode_config(&config);
            let estimate = self.codec.estimate_code_count(&encoded);
            let summary = self.codec.summarize_config(&config);
            debug!(id, radius = %config.radius, estimate, "classified row");

            writer.write_record([
                id,
                config.radius.as_str(),
                config.business_plz.as_str(),
                config.business_canton.as_str(),
                config.custom_cantons.join(",").as_str(),
                estimate.to_string().as_str(),
                summary.as_str(),
            ])?;
            report.record(config.radius);
        }
        writer.flush()?;

        info!(
            total = report.total,
            city = report.city,
            canton = report.canton,
            nationwide = report.nationwide,
            custom = report.custom,
            "batch classification finished"
        );
        Ok(report)
    }

    fn column_index(&self, headers: &csv::StringRecord, name: &str) -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| AreaError::BatchInputError {
                message: format!(
                    "column '{}' not found (available: {})",
                    name,
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::postal_index::PostalRangeIndex;
    use crate::core::registry::RegionRegistry;

    #[test]
    fn test_parse_stored_cell_formats() {
        assert_eq!(parse_stored_cell("ZH,BE"), vec!["ZH", "BE"]);
        assert_eq!(parse_stored_cell("{ZH,BE}"), vec!["ZH", "BE"]);
        assert_eq!(parse_stored_cell(r#"["ZH", "BE"]"#), vec!["ZH", "BE"]);
        assert_eq!(parse_stored_cell(" 8000 "), vec!["8000"]);
        assert!(parse_stored_cell("{}").is_empty());
        assert!(parse_stored_cell("").is_empty());
    }

    #[test]
    fn test_run_classifies_rows() {
        let registry = RegionRegistry::swiss();
        let index = PostalRangeIndex::swiss();
        let codec = ServiceAreaCodec::new(&registry, &index);
        let processor = BatchProcessor::new(&codec);

        let input = "id,service_areas\n1,\"{ZH}\"\n2,8000\n3,\"ZH,BE\"\n4,\n";
        let mut output = Vec::new();
        let report = processor.run(input.as_bytes(), &mut output).unwrap();

        assert_eq!(report.total, 4);
        assert_eq!(report.canton, 2);
        assert_eq!(report.city, 1);
        assert_eq!(report.custom, 1);

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5); // Header + 4 rows
        assert!(lines[0].starts_with("id,radius,business_plz"));
        assert!(lines[1].starts_with("1,canton,,ZH,,650,"));
        assert!(lines[2].starts_with("2,city,8000,,,0,"));
        assert!(lines[3].contains("\"ZH,BE\""));
    }

    #[test]
    fn test_run_missing_column() {
        let registry = RegionRegistry::swiss();
        let index = PostalRangeIndex::swiss();
        let codec = ServiceAreaCodec::new(&registry, &index);
        let processor = BatchProcessor::new(&codec).with_columns("id", "areas");

        let result = processor.run("id,service_areas\n1,ZH\n".as_bytes(), Vec::new());
        assert!(matches!(result, Err(AreaError::BatchInputError { .. })));
    }
}
