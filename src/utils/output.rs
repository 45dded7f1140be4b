use crate::utils::error::{ClientError, Result};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Csv,
    Tsv,
    #[default]
    Json,
}

impl FromStr for OutputFormat {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            other => Err(ClientError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Valid formats: csv, tsv, json".to_string(),
            }),
        }
    }
}

/// Renders flat rows; CSV and TSV take their header from the field names.
pub fn render<R: Serialize>(rows: &[R], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Csv => render_delimited(rows, b','),
        OutputFormat::Tsv => render_delimited(rows, b'\t'),
    }
}

fn render_delimited<R: Serialize>(rows: &[R], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    for row in rows {
        writer.serialize(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ClientError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| {
        ClientError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}
