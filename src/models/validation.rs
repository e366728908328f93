use serde::{Deserialize, Serialize};

use crate::error::FarmError;

/// A single problem found while validating a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Row position for imported data, `None` for records entered directly.
    pub row_index: Option<usize>,
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            row_index: None,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Attach the import row this issue came from.
    pub fn at_row(mut self, row_index: usize) -> Self {
        self.row_index = Some(row_index);
        self
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.row_index {
            Some(row) => write!(f, "row {}: {}: {}", row + 1, self.field, self.message),
            None => write!(f, "{}: {}", self.field, self.message),
        }
    }
}

/// Turn the first issue of a list into a `FarmError::ValidationError`.
pub(crate) fn first_issue(label: &str, issues: Vec<ValidationIssue>) -> Result<(), FarmError> {
    match issues.into_iter().next() {
        Some(issue) => Err(FarmError::ValidationError(format!("{label}: {issue}"))),
        None => Ok(()),
    }
}

pub(crate) fn require_text(issues: &mut Vec<ValidationIssue>, field: &str, value: &str) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::new(field, format!("{field} must not be empty")));
    }
}
