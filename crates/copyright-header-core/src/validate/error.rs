//! Diagnostic types for copyright header validation.
//!
//! A non-compliant file is not a failure of the validator; it is reported
//! as a [`ValidationError`] value.

use super::tokens::{RequiredToken, describe};
use crate::header::Span;
use serde::Serialize;
use thiserror::Error;

/// Identifier of the copyright header rule.
pub const RULE_ID: &str = "copyright-present";

/// The severity of a validation issue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Reported, but does not fail the run under the default policy.
    Warning,
    /// A file that must be fixed.
    #[default]
    Error,
}

/// A copyright header issue found in a source file.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValidationError {
    /// The file has no header comment or block at all.
    #[error("line {line}: missing copyright header")]
    MissingHeader {
        /// File the issue was found in.
        file: String,
        /// The line number (1-based).
        line: usize,
        /// Location of the issue.
        span: Span,
        /// Reported severity.
        severity: Severity,
    },

    /// A header exists but lacks one or more required tokens.
    #[error("line {line}: copyright header is missing the {}", describe(.missing))]
    IncompleteHeader {
        /// File the issue was found in.
        file: String,
        /// The line number (1-based).
        line: usize,
        /// Tokens the header lacks.
        missing: Vec<RequiredToken>,
        /// Location of the issue.
        span: Span,
        /// Reported severity.
        severity: Severity,
    },
}

impl ValidationError {
    /// Creates a missing header error.
    pub fn missing_header(file: impl Into<String>, span: Span, severity: Severity) -> Self {
        Self::MissingHeader {
            file: file.into(),
            line: span.line,
            span,
            severity,
        }
    }

    /// Creates an incomplete header error.
    pub fn incomplete_header(
        file: impl Into<String>,
        missing: Vec<RequiredToken>,
        span: Span,
        severity: Severity,
    ) -> Self {
        Self::IncompleteHeader {
            file: file.into(),
            line: span.line,
            missing,
            span,
            severity,
        }
    }

    /// Returns the identifier of the rule that produced this error.
    pub fn rule_id(&self) -> &'static str {
        RULE_ID
    }

    /// Returns the file this error was found in.
    pub fn file(&self) -> &str {
        match self {
            ValidationError::MissingHeader { file, .. } => file,
            ValidationError::IncompleteHeader { file, .. } => file,
        }
    }

    /// Returns the span associated with this error.
    pub fn span(&self) -> &Span {
        match self {
            ValidationError::MissingHeader { span, .. } => span,
            ValidationError::IncompleteHeader { span, .. } => span,
        }
    }

    /// Returns the line number where this error occurred.
    pub fn line(&self) -> usize {
        match self {
            ValidationError::MissingHeader { line, .. } => *line,
            ValidationError::IncompleteHeader { line, .. } => *line,
        }
    }

    /// Returns the tokens the header lacks.
    pub fn missing(&self) -> &[RequiredToken] {
        match self {
            ValidationError::MissingHeader { .. } => &RequiredToken::ALL,
            ValidationError::IncompleteHeader { missing, .. } => missing,
        }
    }

    /// Returns the severity of this error.
    pub fn severity(&self) -> Severity {
        match self {
            ValidationError::MissingHeader { severity, .. } => *severity,
            ValidationError::IncompleteHeader { severity, .. } => *severity,
        }
    }
}

/// The result of validating one or more source files.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationResult {
    /// All validation errors found.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates a new empty validation result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validation result with the given errors.
    pub fn with_errors(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Returns true if validation passed with no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if there are validation errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns only errors (not warnings).
    pub fn errors_only(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.severity() == Severity::Error)
    }

    /// Returns only warnings.
    pub fn warnings_only(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.severity() == Severity::Warning)
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Merges another validation result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }
}

impl From<Option<ValidationError>> for ValidationResult {
    fn from(error: Option<ValidationError>) -> Self {
        Self {
            errors: error.into_iter().collect(),
        }
    }
}
