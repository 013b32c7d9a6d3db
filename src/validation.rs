use serde::Serialize;

use crate::errors::ParseIssue;

/// Outcome of one parse call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    errors: Vec<ParseIssue>,
    warnings: Vec<ParseIssue>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn errors(&self) -> &[ParseIssue] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ParseIssue] {
        &self.warnings
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }

    pub(crate) fn add_error(&mut self, issue: ParseIssue) {
        self.errors.push(issue);
    }

    pub(crate) fn add_warning(&mut self, issue: ParseIssue) {
        self.warnings.push(issue);
    }
}
