//! Copyright Header Validator Core
//!
//! A library for checking that source files open with a copyright header
//! naming the configured company and a year.
//!
//! # Features
//!
//! - **Header scanning**: Locate the leading comment run or `#region` block
//!   of a file, with per-language comment syntax
//! - **Validation**: Require a copyright marker (`©` or `Copyright`), the
//!   company name and a four-digit year
//! - **Generated files**: Skip designer, `.g.cs`, `AssemblyInfo` and
//!   `<auto-generated>` files, plus user-configured glob patterns
//!
//! # Quick Start
//!
//! ```rust
//! use copyright_header_core::{CheckConfig, CheckRunner, SourceUnit};
//!
//! let source = r#"#region Header
//! // © Acme Corp. 2024
//! #endregion
//! namespace Acme;
//! "#;
//!
//! let unit = SourceUnit::new("src/Program.cs", source);
//! let config = CheckConfig::new().with_company_name("Acme Corp.");
//!
//! let result = CheckRunner::with_all_checks().run(&unit, &config);
//! if result.is_ok() {
//!     println!("header is valid");
//! } else {
//!     for error in &result.errors {
//!         eprintln!("{}", error);
//!     }
//! }
//! ```
//!
//! # Modules
//!
//! - [`header`]: Source model and header location
//! - [`classify`]: Generated-file detection
//! - [`validate`]: Token validation, checks and diagnostics

pub mod classify;
#[cfg(feature = "generate")]
pub mod generate;
pub mod header;
pub mod validate;

// Re-export commonly used types at the crate root
pub use classify::{GeneratedPatterns, is_generated};
pub use header::{HeaderStructure, Language, SourceUnit, locate};
pub use validate::checks::{Check, CheckConfig, CheckContext, CheckRunner, CopyrightPresentCheck, evaluate};
pub use validate::{Severity, ValidationError, ValidationResult, Verdict, validate_header};
