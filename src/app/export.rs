use crate::domain::model::OrderSummary;
use crate::utils::error::{MenuError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

pub fn summary_to_json(summary: &OrderSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

#[derive(Serialize)]
struct CsvRow<'a> {
    id: u64,
    name: &'a str,
    unit_price: String,
    quantity: u32,
    line_total: String,
}

/// One row per cart line; prices in major units with two decimals.
pub fn summary_to_csv(summary: &OrderSummary) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for line in &summary.lines {
        writer.serialize(CsvRow {
            id: line.id,
            name: &line.name,
            unit_price: line.unit_price.to_string(),
            quantity: line.quantity,
            line_total: line.line_total.to_string(),
        })?;
    }
    if summary.lines.is_empty() {
        writer.write_record(["id", "name", "unit_price", "quantity", "line_total"])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| MenuError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| MenuError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
