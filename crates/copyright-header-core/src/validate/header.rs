//! Validation of a located header against the required tokens.

use super::tokens::{RequiredToken, missing_tokens};
use crate::header::{CommentLine, HeaderStructure};

/// Line reported when a file has no header at all.
///
/// Matches the line the first declaration lands on once a one-line header
/// is inserted above it.
pub const NO_HEADER_LINE: usize = 2;

/// The outcome of validating a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The header carries every required token.
    Compliant,
    /// The header is absent or incomplete.
    NonCompliant {
        /// Line to report, or `None` when the header has no block to anchor
        /// the diagnostic to.
        anchor: Option<usize>,
        /// Tokens that no candidate text satisfied.
        missing: Vec<RequiredToken>,
    },
}

impl Verdict {
    /// Returns true if the header is compliant.
    pub fn is_compliant(&self) -> bool {
        matches!(self, Verdict::Compliant)
    }

    fn from_missing(missing: Vec<RequiredToken>, anchor: Option<usize>) -> Self {
        if missing.is_empty() {
            Verdict::Compliant
        } else {
            Verdict::NonCompliant { anchor, missing }
        }
    }
}

/// Joins comment texts with single spaces.
fn concatenate(lines: &[CommentLine]) -> String {
    lines
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Checks `structure` for a copyright marker, `company_name` and a year.
///
/// A delimited block passes if its title alone carries all tokens, or else
/// if its body does. Plain comments are checked as one concatenated text.
pub fn validate_header(structure: &HeaderStructure, company_name: Option<&str>) -> Verdict {
    match structure {
        HeaderStructure::None => Verdict::NonCompliant {
            anchor: Some(NO_HEADER_LINE),
            missing: RequiredToken::ALL.to_vec(),
        },
        HeaderStructure::DelimitedBlock {
            title,
            body,
            start_line,
            ..
        } => {
            if missing_tokens(title, company_name).is_empty() {
                return Verdict::Compliant;
            }
            let missing = missing_tokens(&concatenate(body), company_name);
            Verdict::from_missing(missing, Some(start_line + 1))
        }
        HeaderStructure::PlainComments { lines } => {
            Verdict::from_missing(missing_tokens(&concatenate(lines), company_name), None)
        }
    }
}
