//! Check traits and runner for source file validation.
//!
//! This module provides a trait-based system for implementing validation checks
//! that can be composed and run together over a [`SourceUnit`].

mod copyright;

pub use copyright::{CopyrightPresentCheck, evaluate};

use crate::classify::GeneratedPatterns;
use crate::header::{CommentSyntax, Language, SourceUnit};
use crate::validate::{Severity, ValidationResult};
use log::{debug, info};

/// Configuration options for validation checks.
#[derive(Debug, Clone, Default)]
pub struct CheckConfig {
    /// Company name every header must contain. `None` or empty means no
    /// header can comply.
    pub company_name: Option<String>,
    /// Additional glob patterns for files treated as generated.
    pub generated_patterns: GeneratedPatterns,
    /// Severity of reported issues.
    pub severity: Severity,
    /// Forces a comment syntax instead of detecting it from the file name.
    pub language: Option<Language>,
}

impl CheckConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the required company name.
    pub fn with_company_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = Some(name.into());
        self
    }

    /// Sets the generated-file patterns.
    pub fn with_generated_patterns(mut self, patterns: GeneratedPatterns) -> Self {
        self.generated_patterns = patterns;
        self
    }

    /// Sets the severity of reported issues.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Forces the comment syntax of the given language for every file.
    pub fn with_language_override(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Returns the configured company name, if any.
    pub fn company_name(&self) -> Option<&str> {
        self.company_name.as_deref()
    }

    /// Returns the language whose comment syntax applies to `file_name`.
    pub fn language_for(&self, file_name: &str) -> Language {
        self.language
            .unwrap_or_else(|| Language::for_file_name(file_name))
    }
}

/// Context provided to checks.
#[derive(Debug)]
pub struct CheckContext<'a> {
    /// The source file under analysis.
    pub unit: &'a SourceUnit,
    /// Configuration options.
    pub config: &'a CheckConfig,
}

impl<'a> CheckContext<'a> {
    /// Creates a new check context.
    pub fn new(unit: &'a SourceUnit, config: &'a CheckConfig) -> Self {
        Self { unit, config }
    }

    /// Returns the comment syntax for the unit.
    pub fn syntax(&self) -> &'static dyn CommentSyntax {
        self.config.language_for(&self.unit.file_name).syntax()
    }
}

/// A validation check over a single source file.
pub trait Check: Send + Sync {
    /// Returns the name of this check.
    fn name(&self) -> &'static str;

    /// Runs the check and returns validation results.
    fn run(&self, ctx: &CheckContext) -> ValidationResult;
}

/// Runs multiple validation checks and collects results.
#[derive(Default)]
pub struct CheckRunner {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRunner {
    /// Creates a new check runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a check runner with all built-in checks.
    pub fn with_all_checks() -> Self {
        let mut runner = Self::new();
        runner.add_check(CopyrightPresentCheck::new());
        runner
    }

    /// Adds a check.
    pub fn add_check<C: Check + 'static>(&mut self, check: C) {
        self.checks.push(Box::new(check));
    }

    /// Returns the names of the registered checks.
    pub fn check_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.checks.iter().map(|check| check.name())
    }

    /// Runs all checks against `unit` and returns combined results.
    pub fn run(&self, unit: &SourceUnit, config: &CheckConfig) -> ValidationResult {
        debug!("Running {} checks on {}", self.checks.len(), unit.file_name);
        let ctx = CheckContext::new(unit, config);
        let mut result = ValidationResult::new();

        for check in &self.checks {
            let check_result = check.run(&ctx);
            debug!(
                "Check '{}' found {} issues in {}",
                check.name(),
                check_result.errors.len(),
                unit.file_name
            );
            result.merge(check_result);
        }

        result
    }

    /// Runs all checks against every unit and returns combined results.
    pub fn run_all<'a>(
        &self,
        units: impl IntoIterator<Item = &'a SourceUnit>,
        config: &CheckConfig,
    ) -> ValidationResult {
        let mut result = ValidationResult::new();
        let mut files = 0usize;

        for unit in units {
            result.merge(self.run(unit, config));
            files += 1;
        }

        info!(
            "Checked {} files: {} total issues",
            files,
            result.errors.len()
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_config_builder() {
        let config = CheckConfig::new()
            .with_company_name("Acme")
            .with_severity(Severity::Warning)
            .with_language_override(Language::Hash);

        assert_eq!(config.company_name(), Some("Acme"));
        assert_eq!(config.severity, Severity::Warning);
        assert_eq!(config.language_for("Foo.cs"), Language::Hash);
    }

    #[test]
    fn language_detected_from_file_name() {
        let config = CheckConfig::new();
        assert_eq!(config.language_for("Foo.cs"), Language::CSharp);
        assert_eq!(config.language_for("build.py"), Language::Hash);
        assert_eq!(config.language_for("Test0"), Language::CSharp);
    }

    #[test]
    fn check_context_syntax() {
        let unit = SourceUnit::new("lib.rs", "fn main() {}\n");
        let config = CheckConfig::new();
        let ctx = CheckContext::new(&unit, &config);
        assert_eq!(ctx.syntax().name(), "c-style");
    }

    #[test]
    fn check_runner_creation() {
        let runner = CheckRunner::new();
        assert!(runner.checks.is_empty());
    }

    #[test]
    fn check_runner_with_all_checks() {
        let runner = CheckRunner::with_all_checks();
        assert_eq!(runner.check_names().collect::<Vec<_>>(), vec!["copyright-present"]);
    }

    #[test]
    fn check_runner_runs_over_units() {
        let runner = CheckRunner::with_all_checks();
        let config = CheckConfig::new().with_company_name("Acme");
        let units = [
            SourceUnit::new("a.cs", "// © Acme 2021\nclass A {}\n"),
            SourceUnit::new("b.cs", "class B {}\n"),
            SourceUnit::new("c.cs", ""),
        ];

        let result = runner.run_all(&units, &config);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].file(), "b.cs");
    }
}
