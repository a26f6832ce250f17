//! Validation of copyright headers.
//!
//! This module checks located headers against the required tokens and turns
//! failures into diagnostics.
//!
//! # Example
//!
//! ```rust
//! use copyright_header_core::header::SourceUnit;
//! use copyright_header_core::validate::checks::{CheckConfig, evaluate};
//!
//! let config = CheckConfig::new().with_company_name("Acme Corp.");
//!
//! let unit = SourceUnit::new("Program.cs", "// © Acme Corp. 2024\nclass Program {}\n");
//! assert!(evaluate(&unit, &config).is_none());
//!
//! let unit = SourceUnit::new("Program.cs", "class Program {}\n");
//! if let Some(error) = evaluate(&unit, &config) {
//!     eprintln!("{}", error);
//! }
//! ```

pub mod checks;
mod error;
pub mod file_walker;
mod header;
mod tokens;

// Re-export public types
pub use error::{RULE_ID, Severity, ValidationError, ValidationResult};
pub use header::{NO_HEADER_LINE, Verdict, validate_header};
pub use tokens::{
    RequiredToken, has_company_name, has_copyright_marker, has_year, missing_tokens,
};
