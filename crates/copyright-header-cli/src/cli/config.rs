//! Configuration handling for the CLI.
//!
//! This module converts CLI arguments into the library's configuration types.

use crate::cli::{Args, FailureLevel};
use copyright_header_core::GeneratedPatterns;
use copyright_header_core::validate::checks::CheckConfig;
use copyright_header_core::validate::file_walker::FileWalkerConfig;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Application exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Validation passed successfully.
    Success = 0,
    /// Application startup failed (wrong configuration or internal error).
    StartupFailure = 1,
    /// Application terminated by signal (SIGINT/SIGTERM).
    Terminated = 2,
    /// Validation failed (checks found issues).
    ValidationFailed = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Validated and processed configuration for running the validator.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Path to the repository root.
    pub repo_path: PathBuf,
    /// Configuration for the check runner.
    pub check_config: CheckConfig,
    /// Which files to visit.
    pub walker_config: FileWalkerConfig,
    /// Failure level for determining exit code.
    pub failure_level: FailureLevel,
    /// Whether to output JSON.
    pub json_output: bool,
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let repo_path = args.repository_path.canonicalize().map_err(|e| {
            ConfigError::Invalid(format!(
                "repository path '{}' is invalid: {}",
                args.repository_path.display(),
                e
            ))
        })?;

        if !repo_path.is_dir() {
            return Err(ConfigError::Invalid(format!(
                "repository path '{}' is not a directory",
                repo_path.display()
            )));
        }

        let walker_config = FileWalkerConfig::new()
            .with_hidden(args.include_hidden)
            .with_gitignore(args.respect_gitignore)
            .with_extensions(&args.extensions);

        if walker_config.extensions.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one file extension must be given".to_string(),
            ));
        }

        let patterns = GeneratedPatterns::new(args.effective_generated_patterns())
            .map_err(|e| ConfigError::Invalid(format!("invalid generated pattern: {}", e)))?;

        let mut check_config = CheckConfig::new()
            .with_generated_patterns(patterns)
            .with_severity(args.severity.into());

        match args.effective_company_name() {
            Some(name) => check_config = check_config.with_company_name(name),
            None => warn!("No company name configured; every checked file will be reported"),
        }

        Ok(Self {
            repo_path,
            check_config,
            walker_config,
            failure_level: args.check_failure_level,
            json_output: args.json,
        })
    }

    /// Determines the exit code based on validation results.
    pub fn exit_code_for_results(&self, has_errors: bool, has_warnings: bool) -> ExitCode {
        if has_errors {
            return ExitCode::ValidationFailed;
        }

        match self.failure_level {
            FailureLevel::Warning if has_warnings => ExitCode::ValidationFailed,
            _ => ExitCode::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use copyright_header_core::Severity;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/Program.cs"), "class Program {}\n").unwrap();
        dir
    }

    fn parse(dir: &TempDir, extra: &[&str]) -> Args {
        let mut argv = vec![
            "copyright-header-validator",
            "--repository-path",
            dir.path().to_str().unwrap(),
        ];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::StartupFailure), 1);
        assert_eq!(i32::from(ExitCode::Terminated), 2);
        assert_eq!(i32::from(ExitCode::ValidationFailed), 3);
    }

    #[test]
    fn test_validated_config() {
        let dir = create_test_repo();
        let args = parse(
            &dir,
            &[
                "--company-name",
                "Acme",
                "--generated-patterns",
                "**/Migrations/**",
                "--severity",
                "warning",
            ],
        );
        let config = ValidatedConfig::from_args(&args).unwrap();

        assert_eq!(config.check_config.company_name(), Some("Acme"));
        assert_eq!(config.check_config.severity, Severity::Warning);
        assert!(config.check_config.generated_patterns.is_match("src/Migrations/Init.cs"));
        assert_eq!(config.walker_config.extensions, vec!["cs".to_string()]);
        assert!(config.walker_config.respect_gitignore);
    }

    #[test]
    fn test_missing_company_is_allowed() {
        let dir = create_test_repo();
        let config = ValidatedConfig::from_args(&parse(&dir, &[])).unwrap();
        assert_eq!(config.check_config.company_name(), None);
    }

    #[test]
    fn test_invalid_repository_path() {
        let args = Args::parse_from([
            "copyright-header-validator",
            "--repository-path",
            "/definitely/not/a/real/path",
        ]);
        let result = ValidatedConfig::from_args(&args);
        assert!(result.unwrap_err().to_string().contains("repository path"));
    }

    #[test]
    fn test_repository_path_must_be_directory() {
        let dir = create_test_repo();
        let file = dir.path().join("src/Program.cs");
        let args = Args::parse_from([
            "copyright-header-validator",
            "--repository-path",
            file.to_str().unwrap(),
        ]);
        assert!(ValidatedConfig::from_args(&args).is_err());
    }

    #[test]
    fn test_invalid_generated_pattern() {
        let dir = create_test_repo();
        let args = parse(&dir, &["--generated-patterns", "src/[broken"]);
        let error = ValidatedConfig::from_args(&args).unwrap_err();
        assert!(error.to_string().contains("generated pattern"));
    }

    #[test]
    fn test_empty_extensions_rejected() {
        let dir = create_test_repo();
        let args = parse(&dir, &["--extensions", ","]);
        assert!(ValidatedConfig::from_args(&args).is_err());
    }

    #[test]
    fn test_exit_code_for_results() {
        let dir = create_test_repo();
        let config = ValidatedConfig::from_args(&parse(&dir, &[])).unwrap();

        assert_eq!(config.exit_code_for_results(false, false), ExitCode::Success);
        assert_eq!(config.exit_code_for_results(true, false), ExitCode::ValidationFailed);
        assert_eq!(config.exit_code_for_results(false, true), ExitCode::ValidationFailed);
    }

    #[test]
    fn test_exit_code_error_level() {
        let dir = create_test_repo();
        let args = parse(&dir, &["--check-failure-level", "error"]);
        let config = ValidatedConfig::from_args(&args).unwrap();

        assert_eq!(config.exit_code_for_results(false, true), ExitCode::Success);
        assert_eq!(config.exit_code_for_results(true, true), ExitCode::ValidationFailed);
    }
}
