//! Boundary encodings: JSON export document, variables/matrix CSV.
//!
//! Variable order is row and column order in every encoding.

use std::fmt;

use sector_core::errors::InterchangeError;

mod export;
mod import;

pub use export::{export_json, matrix_csv, variables_csv};
pub use import::{parse_import, ImportBundle};

fn csv_error(err: impl fmt::Display) -> InterchangeError {
    InterchangeError::Csv {
        message: err.to_string(),
    }
}
