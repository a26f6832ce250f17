//! Output formatting for the CLI.
//!
//! This module provides human-readable and JSON output formatters for validation results.

use copyright_header_core::validate::{Severity, ValidationError, ValidationResult};
use colored::Colorize;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;

/// JSON output format.
#[derive(Debug, Default, Serialize)]
pub struct JsonOutput {
    /// Number of files checked.
    pub files: usize,
    /// All issues, in file order.
    pub issues: Vec<JsonIssue>,
}

impl JsonOutput {
    /// Creates a new empty JSON output.
    pub fn new(files: usize) -> Self {
        Self {
            files,
            issues: Vec::new(),
        }
    }

    /// Adds the issues of a validation result.
    pub fn add_results(&mut self, result: &ValidationResult) {
        self.issues.extend(result.errors.iter().map(JsonIssue::from));
    }

    /// Writes the JSON output to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}

/// A single issue in JSON format.
#[derive(Debug, Serialize)]
pub struct JsonIssue {
    /// File the issue was found in, relative to the repository root.
    pub file: String,
    /// Line number where the issue occurred.
    pub line: usize,
    /// Column number where the issue occurred.
    pub column: usize,
    /// Identifier of the rule that reported the issue.
    pub rule: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Severity of the issue.
    pub severity: Severity,
}

impl From<&ValidationError> for JsonIssue {
    fn from(error: &ValidationError) -> Self {
        let span = error.span();
        Self {
            file: error.file().to_string(),
            line: span.line,
            column: span.column,
            rule: error.rule_id(),
            message: error.to_string(),
            severity: error.severity(),
        }
    }
}

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Writes a header for a file.
    pub fn write_file_header(&mut self, file: &str) -> std::io::Result<()> {
        let header = format!("==> {}", file);
        if self.use_colors {
            writeln!(self.writer, "\n{}", header.cyan().bold())?;
        } else {
            writeln!(self.writer, "\n{}", header)?;
        }
        Ok(())
    }

    /// Writes validation results for a file.
    pub fn write_file_results(&mut self, file: &str, result: &ValidationResult) -> std::io::Result<()> {
        if result.errors.is_empty() {
            return Ok(());
        }

        self.write_file_header(file)?;

        for error in &result.errors {
            self.write_issue(error)?;
        }

        Ok(())
    }

    /// Writes a single issue.
    pub fn write_issue(&mut self, error: &ValidationError) -> std::io::Result<()> {
        let severity = error.severity();
        let message = format!("{} [{}]", error, error.rule_id());

        let label = match severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
        };

        if self.use_colors {
            let colored_label = match severity {
                Severity::Error => format!("[{}]", label).red().bold(),
                Severity::Warning => format!("[{}]", label).yellow().bold(),
            };
            writeln!(self.writer, "  {} {}", colored_label, message)?;
        } else {
            writeln!(self.writer, "  [{}] {}", label, message)?;
        }

        Ok(())
    }

    /// Writes a summary of all validation results.
    pub fn write_summary(
        &mut self,
        files: usize,
        total_errors: usize,
        total_warnings: usize,
    ) -> std::io::Result<()> {
        writeln!(self.writer)?;

        if total_errors == 0 && total_warnings == 0 {
            let message = format!("✓ All {} file(s) have a valid copyright header", files);
            if self.use_colors {
                writeln!(self.writer, "{}", message.green().bold())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        } else {
            let message = format!(
                "✗ Found {} error(s) and {} warning(s) in {} file(s)",
                total_errors, total_warnings, files
            );
            if self.use_colors {
                writeln!(self.writer, "{}", message.red().bold())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        }

        Ok(())
    }

    /// Writes a startup error.
    pub fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Error:".red().bold(), message)?;
        } else {
            writeln!(self.writer, "Error: {}", message)?;
        }
        Ok(())
    }
}

/// Collects all validation results organized by file.
#[derive(Debug, Default)]
pub struct ValidationResults {
    results: HashMap<String, ValidationResult>,
    order: Vec<String>,
    files_checked: usize,
}

impl ValidationResults {
    /// Creates a new empty results collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds results for a checked file.
    pub fn add(&mut self, file: impl Into<String>, result: ValidationResult) {
        self.files_checked += 1;
        if result.errors.is_empty() {
            return;
        }
        let name = file.into();
        if !self.results.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.results.entry(name).or_default().merge(result);
    }

    /// Returns the number of files checked.
    pub fn files_checked(&self) -> usize {
        self.files_checked
    }

    /// Returns the total number of errors.
    pub fn total_errors(&self) -> usize {
        self.results.values().map(|r| r.errors_only().count()).sum()
    }

    /// Returns the total number of warnings.
    pub fn total_warnings(&self) -> usize {
        self.results
            .values()
            .map(|r| r.warnings_only().count())
            .sum()
    }

    /// Returns true if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.total_errors() > 0
    }

    /// Returns true if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        self.total_warnings() > 0
    }

    /// Iterates over files with issues, in the order they were checked.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationResult)> {
        self.order
            .iter()
            .filter_map(|name| self.results.get(name).map(|r| (name.as_str(), r)))
    }

    /// Writes results in human-readable format.
    pub fn write_human<W: Write>(&self, writer: &mut W, use_colors: bool) -> std::io::Result<()> {
        let mut output = HumanOutput::new(writer, use_colors);

        for (file, result) in self.iter() {
            output.write_file_results(file, result)?;
        }

        output.write_summary(self.files_checked, self.total_errors(), self.total_warnings())?;

        Ok(())
    }

    /// Writes results in JSON format.
    pub fn write_json<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut json_output = JsonOutput::new(self.files_checked);

        for (_, result) in self.iter() {
            json_output.add_results(result);
        }

        json_output.write(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copyright_header_core::header::Span;
    use copyright_header_core::validate::RequiredToken;

    fn test_span() -> Span {
        Span::new(0, 2, 1, 5)
    }

    fn missing(file: &str) -> ValidationError {
        ValidationError::missing_header(file, test_span(), Severity::Error)
    }

    fn incomplete_warning(file: &str) -> ValidationError {
        ValidationError::incomplete_header(file, vec![RequiredToken::Year], test_span(), Severity::Warning)
    }

    #[test]
    fn test_json_issue_from_error() {
        let issue = JsonIssue::from(&missing("src/Foo.cs"));

        assert_eq!(issue.file, "src/Foo.cs");
        assert_eq!(issue.line, 2);
        assert_eq!(issue.column, 1);
        assert_eq!(issue.rule, "copyright-present");
        assert!(issue.message.contains("missing copyright header"));
        assert_eq!(issue.severity, Severity::Error);
    }

    #[test]
    fn test_json_output_serialize() {
        let mut results = ValidationResults::new();
        results.add("src/Foo.cs", ValidationResult::with_errors(vec![missing("src/Foo.cs")]));
        results.add("src/Bar.cs", ValidationResult::new());

        let mut buf = Vec::new();
        results.write_json(&mut buf).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["files"], 2);
        let issues = json["issues"].as_array().unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0]["file"], "src/Foo.cs");
        assert_eq!(issues[0]["rule"], "copyright-present");
        assert_eq!(issues[0]["severity"], "error");
    }

    #[test]
    fn test_human_output_no_colors() {
        let mut buf = Vec::new();
        let mut output = HumanOutput::new(&mut buf, false);

        output.write_issue(&incomplete_warning("src/Foo.cs")).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("[WARN]"));
        assert!(text.contains("missing the year"));
        assert!(text.contains("[copyright-present]"));
    }

    #[test]
    fn test_human_output_groups_by_file() {
        let mut results = ValidationResults::new();
        results.add("a.cs", ValidationResult::with_errors(vec![missing("a.cs")]));
        results.add("b.cs", ValidationResult::with_errors(vec![incomplete_warning("b.cs")]));

        let mut buf = Vec::new();
        results.write_human(&mut buf, false).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let a = text.find("==> a.cs").unwrap();
        let b = text.find("==> b.cs").unwrap();
        assert!(a < b);
        assert!(text.contains("1 error(s) and 1 warning(s) in 2 file(s)"));
    }

    #[test]
    fn test_validation_results_totals() {
        let mut results = ValidationResults::new();
        results.add("a.cs", ValidationResult::with_errors(vec![missing("a.cs")]));
        results.add("b.cs", ValidationResult::with_errors(vec![incomplete_warning("b.cs")]));
        results.add("c.cs", ValidationResult::new());

        assert_eq!(results.files_checked(), 3);
        assert_eq!(results.total_errors(), 1);
        assert_eq!(results.total_warnings(), 1);
        assert!(results.has_errors());
        assert!(results.has_warnings());
        assert_eq!(results.iter().count(), 2);
    }

    #[test]
    fn test_human_output_summary_valid() {
        let mut buf = Vec::new();
        let mut output = HumanOutput::new(&mut buf, false);
        output.write_summary(4, 0, 0).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("All 4 file(s) have a valid copyright header"));
    }

    #[test]
    fn test_write_error() {
        let mut buf = Vec::new();
        HumanOutput::new(&mut buf, false).write_error("boom").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Error: boom\n");
    }
}
