use csv::{ReaderBuilder, StringRecord};
use sector_core::errors::InterchangeError;
use sector_core::types::{InfluenceMatrix, VariableSet};

use super::csv_error;

/// Decoded variables and matrix, not yet checked against any scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportBundle {
    pub variables: VariableSet,
    pub matrix: InfluenceMatrix,
}

/// Decode a `variables.csv` / `matrix.csv` pair.
///
/// Structural checks only: the caller still has to run matrix validation
/// against the project scale before writing anything.
pub fn parse_import(variables_csv: &str, matrix_csv: &str) -> Result<ImportBundle, InterchangeError> {
    let names = parse_variable_names(variables_csv)?;
    let variables = VariableSet::from_raw(&names).map_err(|_| InterchangeError::NoVariables)?;
    let matrix = parse_matrix(matrix_csv, variables.names())?;
    Ok(ImportBundle { variables, matrix })
}

fn clean(text: &str) -> &str {
    text.trim_start_matches('\u{feff}').trim()
}

/// Every record of `text`, with each blank line kept as an empty record so
/// record `k` sits on file line `k + 1` when no field spans lines.
fn read_records(text: &str) -> Result<Vec<Vec<String>>, InterchangeError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut records: Vec<Vec<String>> = Vec::new();
    let mut record = StringRecord::new();
    // End of the previous record's content, terminator excluded.
    let mut content_end = 0;

    while reader.read_record(&mut record).map_err(csv_error)? {
        let breaks = leading_line_breaks(text.get(content_end..).unwrap_or(""));
        // The first break after a record is its own terminator.
        let blank_lines = if records.is_empty() {
            breaks
        } else {
            breaks.saturating_sub(1)
        };
        records.extend(std::iter::repeat_with(Vec::new).take(blank_lines));
        records.push(record.iter().map(str::to_string).collect());

        let consumed = usize::try_from(reader.position().byte()).unwrap_or(text.len());
        content_end = text
            .get(..consumed)
            .unwrap_or(text)
            .trim_end_matches(['\r', '\n'])
            .len();
    }
    Ok(records)
}

/// Line breaks before the first other character. `\r\n` counts once.
fn leading_line_breaks(text: &str) -> usize {
    let rest = text.trim_start_matches(['\r', '\n']);
    text[..text.len() - rest.len()].replace("\r\n", "\n").len()
}

fn parse_variable_names(text: &str) -> Result<Vec<String>, InterchangeError> {
    let mut records = read_records(clean(text))?.into_iter();
    let header = records.next().unwrap_or_default();
    let name_col = header
        .iter()
        .position(|h| h.trim() == "name")
        .ok_or(InterchangeError::MissingNameColumn)?;

    Ok(records
        .filter_map(|record| record.get(name_col).map(|n| n.trim().to_string()))
        .filter(|name| !name.is_empty())
        .collect())
}

fn parse_matrix(text: &str, names: &[String]) -> Result<InfluenceMatrix, InterchangeError> {
    let records = read_records(clean(text))?;
    if records.len() < 2 {
        return Err(InterchangeError::InvalidMatrix {
            reason: "expected a header row and at least one data row".to_string(),
        });
    }

    let n = names.len();
    let header = records[0].get(1..).unwrap_or_default();
    let body = &records[1..];
    if header.len() != n || body.len() != n {
        return Err(InterchangeError::InvalidMatrix {
            reason: format!("must be {n}x{n} with headers matching the variables"),
        });
    }
    if header.iter().map(|h| h.trim()).ne(names.iter().map(String::as_str)) {
        return Err(InterchangeError::HeaderMismatch);
    }

    let mut rows = Vec::with_capacity(n);
    for (i, record) in body.iter().enumerate() {
        let line = i + 2;
        let label = record.first().map(|s| s.trim()).unwrap_or("");
        if label != names[i] {
            return Err(InterchangeError::RowHeaderMismatch {
                row: line,
                found: label.to_string(),
                expected: names[i].clone(),
            });
        }
        let cells = record.get(1..).unwrap_or_default();
        if cells.len() != n {
            return Err(InterchangeError::RowLength {
                row: line,
                found: cells.len(),
                expected: n,
            });
        }
        let values = cells
            .iter()
            .map(|c| c.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| InterchangeError::NonNumeric { row: line })?;
        rows.push(values);
    }

    InfluenceMatrix::from_rows(rows).map_err(|e| InterchangeError::InvalidMatrix {
        reason: e.to_string(),
    })
}
