//! Scale and matrix validation. Gates every matrix write.

pub mod matrix_validator;
pub mod scale_validator;

pub use matrix_validator::{validate_matrix, validate_rows, validate_shape};
pub use scale_validator::validate_value;
