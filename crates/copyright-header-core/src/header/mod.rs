//! Header scanning for source files.
//!
//! This module turns raw file text into a [`SourceUnit`] and extracts the
//! header-like construct at the top of it, with span metadata for
//! diagnostics.
//!
//! # Example
//!
//! ```rust
//! use copyright_header_core::header::{locate, HeaderStructure, Language, SourceUnit};
//!
//! let unit = SourceUnit::new("Foo.cs", "#region Header\n// © Acme 2021\n#endregion\n");
//! let header = locate(&unit, Language::CSharp.syntax());
//!
//! match header {
//!     HeaderStructure::DelimitedBlock { title, body, .. } => {
//!         assert_eq!(title, "Header");
//!         assert_eq!(body.len(), 1);
//!     }
//!     other => panic!("unexpected header: {}", other),
//! }
//! ```

mod ast;
mod lexer;
mod locator;
pub mod span;
mod syntax;

// Re-export public types
pub use ast::{CommentLine, HeaderStructure, SourceLine, SourceUnit};
pub use locator::{leading_trivia, locate};
pub use span::Span;
pub use syntax::{CSharpSyntax, CStyleSyntax, CommentSyntax, HashSyntax, Language, PowerShellSyntax};

// Re-export lexer utilities that may be useful for custom syntaxes
pub use lexer::{parse_auto_generated_tag, parse_line_comment, parse_region_close, parse_region_open};
