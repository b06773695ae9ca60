use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use sector_core::errors::InterchangeError;
use sector_core::types::{InfluenceMatrix, ProjectExport, VariableRecord};

use super::csv_error;

/// `code,name,description`, one line per variable. A missing code becomes `VAR{i}` (1-based).
pub fn variables_csv(variables: &[VariableRecord]) -> Result<String, InterchangeError> {
    let mut writer = csv_writer();
    writer
        .write_record(["code", "name", "description"])
        .map_err(csv_error)?;
    for (i, var) in variables.iter().enumerate() {
        let code = match &var.code {
            Some(code) if !code.is_empty() => code.clone(),
            _ => format!("VAR{}", i + 1),
        };
        let description = var.description.as_deref().unwrap_or("");
        writer
            .write_record([code.as_str(), var.name.as_str(), description])
            .map_err(csv_error)?;
    }
    finish(writer)
}

/// Blank corner cell, names across the top, one labelled row per variable.
/// The diagonal is written as zero whatever the stored value.
pub fn matrix_csv(names: &[String], matrix: &InfluenceMatrix) -> Result<String, InterchangeError> {
    let matrix = matrix.with_zero_diagonal();
    let mut writer = csv_writer();
    writer
        .write_record(std::iter::once("").chain(names.iter().map(String::as_str)))
        .map_err(csv_error)?;
    for (name, row) in names.iter().zip(matrix.rows()) {
        let record: Vec<String> = std::iter::once(name.clone())
            .chain(row.iter().map(f64::to_string))
            .collect();
        writer.write_record(&record).map_err(csv_error)?;
    }
    finish(writer)
}

pub fn export_json(doc: &ProjectExport) -> Result<String, InterchangeError> {
    serde_json::to_string_pretty(doc).map_err(|e| InterchangeError::Json {
        message: e.to_string(),
    })
}

fn csv_writer() -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new())
}

fn finish(writer: Writer<Vec<u8>>) -> Result<String, InterchangeError> {
    let bytes = writer.into_inner().map_err(|e| csv_error(e.error()))?;
    String::from_utf8(bytes).map_err(csv_error)
}
