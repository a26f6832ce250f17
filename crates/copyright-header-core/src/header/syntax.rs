//! Per-language comment and delimiter recognition.
//!
//! The locator never looks at raw comment markers itself; it asks a
//! [`CommentSyntax`] strategy. Each supported language family provides one.

use super::lexer::{parse_line_comment, parse_region_close, parse_region_open, parse_slash_comment};
use std::fmt::{self, Display};
use std::path::Path;

/// Recognizes comments and delimited header blocks for one language family.
pub trait CommentSyntax: Send + Sync {
    /// Returns the name of this syntax.
    fn name(&self) -> &'static str;

    /// Returns the text of a single-line comment, without its marker.
    fn line_comment<'a>(&self, line: &'a str) -> Option<&'a str>;

    /// Returns the opening and closing delimiters of multi-line comments,
    /// if the language has them.
    fn block_comment_delimiters(&self) -> Option<(&'static str, &'static str)> {
        None
    }

    /// Returns the title of a delimited-block opener (e.g. `#region Title`).
    fn block_open<'a>(&self, _line: &'a str) -> Option<&'a str> {
        None
    }

    /// Returns true if the line closes a delimited block.
    fn is_block_close(&self, _line: &str) -> bool {
        false
    }
}

/// C# comments plus `#region` / `#endregion` blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpSyntax;

impl CommentSyntax for CSharpSyntax {
    fn name(&self) -> &'static str {
        "csharp"
    }

    fn line_comment<'a>(&self, line: &'a str) -> Option<&'a str> {
        parse_slash_comment(line).ok().map(|(_, text)| text)
    }

    fn block_comment_delimiters(&self) -> Option<(&'static str, &'static str)> {
        Some(("/*", "*/"))
    }

    fn block_open<'a>(&self, line: &'a str) -> Option<&'a str> {
        parse_region_open(line).ok().map(|(_, title)| title)
    }

    fn is_block_close(&self, line: &str) -> bool {
        parse_region_close(line).is_ok()
    }
}

/// `//` and `/* */` comments without delimited blocks (Rust, C, Java, Go, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct CStyleSyntax;

impl CommentSyntax for CStyleSyntax {
    fn name(&self) -> &'static str {
        "c-style"
    }

    fn line_comment<'a>(&self, line: &'a str) -> Option<&'a str> {
        // `//!` inner doc comments carry headers in Rust crates.
        parse_slash_comment(line)
            .ok()
            .map(|(_, text)| text.strip_prefix('!').unwrap_or(text))
    }

    fn block_comment_delimiters(&self) -> Option<(&'static str, &'static str)> {
        Some(("/*", "*/"))
    }
}

/// `#` comments (shell, Python, Ruby, YAML, TOML, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct HashSyntax;

impl CommentSyntax for HashSyntax {
    fn name(&self) -> &'static str {
        "hash"
    }

    fn line_comment<'a>(&self, line: &'a str) -> Option<&'a str> {
        parse_line_comment("#", line).ok().map(|(_, text)| text)
    }
}

/// `#` comments plus `<# #>` blocks and `#region` directives (PowerShell).
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerShellSyntax;

impl CommentSyntax for PowerShellSyntax {
    fn name(&self) -> &'static str {
        "powershell"
    }

    fn line_comment<'a>(&self, line: &'a str) -> Option<&'a str> {
        if self.block_open(line).is_some() || self.is_block_close(line) {
            return None;
        }
        parse_line_comment("#", line).ok().map(|(_, text)| text)
    }

    fn block_comment_delimiters(&self) -> Option<(&'static str, &'static str)> {
        Some(("<#", "#>"))
    }

    fn block_open<'a>(&self, line: &'a str) -> Option<&'a str> {
        parse_region_open(line).ok().map(|(_, title)| title)
    }

    fn is_block_close(&self, line: &str) -> bool {
        parse_region_close(line).is_ok()
    }
}

static CSHARP: CSharpSyntax = CSharpSyntax;
static C_STYLE: CStyleSyntax = CStyleSyntax;
static HASH: HashSyntax = HashSyntax;
static POWERSHELL: PowerShellSyntax = PowerShellSyntax;

/// Language families with a known comment syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// C# (`.cs`).
    CSharp,
    /// C-style comments without region blocks.
    CStyle,
    /// Hash comments.
    Hash,
    /// PowerShell.
    PowerShell,
}

impl Language {
    /// Detects the language from a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        let language = match ext.as_str() {
            "cs" | "csx" => Self::CSharp,
            "rs" | "c" | "h" | "cc" | "cpp" | "cxx" | "hpp" | "hh" | "java" | "kt" | "kts"
            | "go" | "js" | "jsx" | "mjs" | "ts" | "tsx" | "swift" | "scala" | "dart"
            | "proto" => Self::CStyle,
            "py" | "sh" | "bash" | "zsh" | "rb" | "pl" | "pm" | "r" | "yaml" | "yml"
            | "toml" | "cmake" => Self::Hash,
            "ps1" | "psm1" | "psd1" => Self::PowerShell,
            _ => return None,
        };
        Some(language)
    }

    /// Detects the language from a file path.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Detects the language from a file name, falling back to C#.
    pub fn for_file_name(file_name: &str) -> Self {
        Self::from_path(file_name).unwrap_or(Self::CSharp)
    }

    /// Returns the comment syntax strategy for this language.
    pub fn syntax(&self) -> &'static dyn CommentSyntax {
        match self {
            Self::CSharp => &CSHARP,
            Self::CStyle => &C_STYLE,
            Self::Hash => &HASH,
            Self::PowerShell => &POWERSHELL,
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.syntax().name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csharp_recognizes_comments_and_regions() {
        let syntax = CSharpSyntax;
        assert_eq!(syntax.line_comment("// © Acme"), Some(" © Acme"));
        assert_eq!(syntax.line_comment("using System;"), None);
        assert_eq!(syntax.block_open("#region Header"), Some("Header"));
        assert!(syntax.is_block_close("#endregion"));
        assert_eq!(syntax.block_comment_delimiters(), Some(("/*", "*/")));
    }

    #[test]
    fn c_style_has_no_blocks() {
        let syntax = CStyleSyntax;
        assert_eq!(syntax.block_open("#region Header"), None);
        assert!(!syntax.is_block_close("#endregion"));
        assert_eq!(syntax.line_comment("//! Copyright"), Some(" Copyright"));
    }

    #[test]
    fn hash_comments() {
        let syntax = HashSyntax;
        assert_eq!(syntax.line_comment("# Copyright Acme 2021"), Some(" Copyright Acme 2021"));
        assert_eq!(syntax.line_comment("// not a comment"), None);
        assert_eq!(syntax.block_comment_delimiters(), None);
    }

    #[test]
    fn powershell_distinguishes_regions_from_comments() {
        let syntax = PowerShellSyntax;
        assert_eq!(syntax.block_open("#region Header"), Some("Header"));
        assert_eq!(syntax.line_comment("#region Header"), None);
        assert_eq!(syntax.line_comment("#endregion"), None);
        assert_eq!(syntax.line_comment("<# block"), None);
        assert_eq!(syntax.line_comment("# text"), Some(" text"));
    }

    #[test]
    fn language_from_path() {
        assert_eq!(Language::from_path("src/Foo.cs"), Some(Language::CSharp));
        assert_eq!(Language::from_path("main.RS"), Some(Language::CStyle));
        assert_eq!(Language::from_path("setup.py"), Some(Language::Hash));
        assert_eq!(Language::from_path("Build.ps1"), Some(Language::PowerShell));
        assert_eq!(Language::from_path("README"), None);
        assert_eq!(Language::from_path("notes.txt"), None);
    }

    #[test]
    fn unknown_file_name_falls_back_to_csharp() {
        assert_eq!(Language::for_file_name("Test0"), Language::CSharp);
        assert_eq!(Language::for_file_name("lib.rs"), Language::CStyle);
    }

    #[test]
    fn language_display_uses_syntax_name() {
        assert_eq!(Language::CSharp.to_string(), "csharp");
        assert_eq!(Language::Hash.to_string(), "hash");
    }
}
