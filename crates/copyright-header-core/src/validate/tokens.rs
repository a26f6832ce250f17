//! Required copyright tokens and their matchers.

use serde::Serialize;
use std::fmt::{self, Display};

/// The copyright sign.
pub const COPYRIGHT_SIGN: char = '©';

/// The copyright word, matched as a whole word.
pub const COPYRIGHT_WORD: &str = "Copyright";

/// A token a compliant header must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredToken {
    /// `©` or the word `Copyright`.
    CopyrightMarker,
    /// The configured company name.
    CompanyName,
    /// A four-digit year.
    Year,
}

impl RequiredToken {
    /// All tokens, in reporting order.
    pub const ALL: [RequiredToken; 3] = [
        RequiredToken::CopyrightMarker,
        RequiredToken::CompanyName,
        RequiredToken::Year,
    ];
}

impl Display for RequiredToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequiredToken::CopyrightMarker => "copyright marker",
            RequiredToken::CompanyName => "company name",
            RequiredToken::Year => "year",
        };
        f.write_str(name)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Returns true if `text` contains `©` or the whole word `Copyright`.
pub fn has_copyright_marker(text: &str) -> bool {
    if text.contains(COPYRIGHT_SIGN) {
        return true;
    }

    text.match_indices(COPYRIGHT_WORD).any(|(start, word)| {
        let end = start + word.len();
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

/// Returns true if `text` contains the company name verbatim.
///
/// A missing or empty company name never matches.
pub fn has_company_name(text: &str, company_name: Option<&str>) -> bool {
    match company_name {
        Some(name) if !name.is_empty() => text.contains(name),
        _ => false,
    }
}

/// Returns true if `text` contains a run of exactly four ASCII digits.
pub fn has_year(text: &str) -> bool {
    text.split(|c: char| !c.is_ascii_digit())
        .any(|run| run.len() == 4)
}

/// Returns the tokens `text` lacks, in reporting order.
pub fn missing_tokens(text: &str, company_name: Option<&str>) -> Vec<RequiredToken> {
    RequiredToken::ALL
        .into_iter()
        .filter(|token| match token {
            RequiredToken::CopyrightMarker => !has_copyright_marker(text),
            RequiredToken::CompanyName => !has_company_name(text, company_name),
            RequiredToken::Year => !has_year(text),
        })
        .collect()
}

/// Formats tokens as a human-readable list, e.g. `company name and year`.
pub(crate) fn describe(tokens: &[RequiredToken]) -> String {
    match tokens {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let init: Vec<String> = init.iter().map(ToString::to_string).collect();
            format!("{} and {}", init.join(", "), last)
        }
    }
}
