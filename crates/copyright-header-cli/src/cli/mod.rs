//! CLI module for the copyright header validator.
//!
//! This module provides command-line argument parsing using Clap with
//! environment variable support.

pub mod config;
pub mod output;

use clap::{Parser, ValueEnum};
use copyright_header_core::Severity;
use std::path::PathBuf;

/// Copyright header validator - checks that source files start with a
/// copyright notice.
///
/// Every authored file must open with a header naming the configured
/// company and a four-digit year. Generated files are skipped. Supports both
/// human-readable and JSON output formats.
#[derive(Parser, Debug)]
#[command(name = "copyright-header-validator")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the repository root.
    #[arg(long, env = "REPOSITORY_PATH", default_value = ".")]
    pub repository_path: PathBuf,

    /// Company name every copyright header must contain.
    #[arg(long, env = "COMPANY_NAME")]
    pub company_name: Option<String>,

    /// Comma-separated glob patterns for files treated as generated.
    #[arg(long, env = "GENERATED_PATTERNS", value_delimiter = ',')]
    pub generated_patterns: Option<Vec<String>>,

    /// Comma-separated list of file extensions to check.
    #[arg(long, env = "EXTENSIONS", value_delimiter = ',', default_value = "cs")]
    pub extensions: Vec<String>,

    /// Check hidden files and directories.
    #[arg(long, env = "INCLUDE_HIDDEN")]
    pub include_hidden: bool,

    /// Skip files ignored by .gitignore.
    #[arg(
        long,
        env = "RESPECT_GITIGNORE",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub respect_gitignore: bool,

    /// Severity of reported issues.
    #[arg(long, env = "SEVERITY", default_value = "error")]
    pub severity: SeverityLevel,

    /// Failure level for validation issues.
    /// 'warning' treats both errors and warnings as failures.
    /// 'error' only treats errors as failures.
    #[arg(long, env = "CHECK_FAILURE_LEVEL", default_value = "warning")]
    pub check_failure_level: FailureLevel,

    /// Output validation results as JSON instead of human-readable format.
    #[arg(long, short = 'j')]
    pub json: bool,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Severity assigned to reported issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SeverityLevel {
    /// Report issues as errors.
    #[default]
    Error,
    /// Report issues as warnings.
    Warning,
}

impl From<SeverityLevel> for Severity {
    fn from(level: SeverityLevel) -> Self {
        match level {
            SeverityLevel::Error => Severity::Error,
            SeverityLevel::Warning => Severity::Warning,
        }
    }
}

/// Failure level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FailureLevel {
    /// Treat both warnings and errors as failures (exit code 3).
    #[default]
    Warning,
    /// Only treat errors as failures.
    Error,
}

impl Args {
    /// Returns the generated-file patterns, empty by default.
    pub fn effective_generated_patterns(&self) -> Vec<String> {
        self.generated_patterns
            .iter()
            .flatten()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// Returns the configured company name, treating an empty value as unset.
    pub fn effective_company_name(&self) -> Option<&str> {
        self.company_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
