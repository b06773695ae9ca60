//! Ordered variable names. Position is the only join key with the matrix.

use serde::{Deserialize, Serialize};

use crate::errors::AnalysisError;

/// Ordered, non-empty sequence of trimmed variable names.
///
/// Index `i` in the set is row and column `i` of the influence matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableSet {
    names: Vec<String>,
}

impl VariableSet {
    /// Trim every name and drop blanks. Fails if nothing is left.
    pub fn from_raw<I, S>(names: I) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        if names.is_empty() {
            return Err(AnalysisError::NoVariables);
        }
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

/// A persisted variable: storage id plus name. Rows come back in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableRecord {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl VariableRecord {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            code: None,
            description: None,
        }
    }
}
