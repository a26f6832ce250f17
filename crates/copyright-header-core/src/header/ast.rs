//! Data structures for source files and their leading header.
//!
//! A [`SourceUnit`] is the file under analysis, split into numbered lines.
//! A [`HeaderStructure`] is what the locator extracted from the top of it.

use super::lexer::is_blank_line;
use super::span::Span;
use std::fmt::{self, Display};

/// A single line of a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// Line number (1-based).
    pub number: usize,
    /// Byte offset of the first character of the line.
    pub offset: usize,
    /// Line content without the terminating newline.
    pub text: String,
}

impl SourceLine {
    /// Creates a new source line.
    pub fn new(number: usize, offset: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            offset,
            text: text.into(),
        }
    }

    /// Returns true if the line is empty or contains only whitespace.
    pub fn is_blank(&self) -> bool {
        is_blank_line(&self.text)
    }

    /// Returns the span covering the whole line.
    pub fn span(&self) -> Span {
        Span::new(self.offset, self.number, 1, self.text.len())
    }
}

/// A source file under analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceUnit {
    /// File name or repository-relative path, used for reporting and
    /// generated-file detection.
    pub file_name: String,
    /// All lines in order.
    pub lines: Vec<SourceLine>,
    /// Total length of the input in bytes.
    pub len: usize,
}

impl SourceUnit {
    /// Builds a source unit from raw file text.
    ///
    /// Handles `\n` and `\r\n` line endings and skips a leading UTF-8 BOM.
    pub fn new(file_name: impl Into<String>, text: &str) -> Self {
        let (body, mut offset) = match text.strip_prefix('\u{feff}') {
            Some(rest) => (rest, '\u{feff}'.len_utf8()),
            None => (text, 0),
        };

        let mut lines = Vec::new();
        for (index, raw) in body.split_inclusive('\n').enumerate() {
            let content = raw.strip_suffix('\n').unwrap_or(raw);
            let content = content.strip_suffix('\r').unwrap_or(content);
            lines.push(SourceLine::new(index + 1, offset, content));
            offset += raw.len();
        }

        Self {
            file_name: file_name.into(),
            lines,
            len: text.len(),
        }
    }

    /// Builds a source unit from already split lines.
    pub fn from_lines<I, S>(file_name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut offset = 0;
        let lines: Vec<SourceLine> = lines
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let line = SourceLine::new(index + 1, offset, text);
                offset += line.text.len() + 1;
                line
            })
            .collect();

        Self {
            file_name: file_name.into(),
            lines,
            len: offset.saturating_sub(1),
        }
    }

    /// Returns true if there is nothing to protect: no lines at all, or
    /// only whitespace.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(SourceLine::is_blank)
    }

    /// Returns the line with the given 1-based number.
    pub fn line(&self, number: usize) -> Option<&SourceLine> {
        number.checked_sub(1).and_then(|i| self.lines.get(i))
    }

    /// Returns a span for the given line, or a point span at the end of the
    /// input if the file is shorter than that.
    pub fn line_span(&self, number: usize) -> Span {
        match self.line(number) {
            Some(line) => line.span(),
            None => Span::point(self.len, number, 1),
        }
    }
}

/// The text of a comment line, with the comment markers removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentLine {
    /// Line number (1-based) the comment was found on.
    pub line: usize,
    /// Comment text, trimmed.
    pub text: String,
}

impl CommentLine {
    /// Creates a new comment line.
    pub fn new(line: usize, text: impl Into<String>) -> Self {
        Self {
            line,
            text: text.into(),
        }
    }
}

/// The header-like construct found at the top of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderStructure {
    /// No comment or delimited block at the top of the file.
    None,
    /// One or more leading comment lines outside of any delimited block.
    PlainComments {
        /// The comment run, in file order.
        lines: Vec<CommentLine>,
    },
    /// A delimited block (e.g. `#region ... #endregion`) opening the file.
    DelimitedBlock {
        /// Text following the opening delimiter on its own line.
        title: String,
        /// Comment lines between the opening and closing delimiter.
        body: Vec<CommentLine>,
        /// Line of the opening delimiter.
        start_line: usize,
        /// Line of the closing delimiter, or the last line if unterminated.
        end_line: usize,
    },
}

impl HeaderStructure {
    /// Creates a plain comment header.
    pub fn plain_comments(lines: Vec<CommentLine>) -> Self {
        Self::PlainComments { lines }
    }

    /// Creates a delimited block header.
    pub fn delimited_block(
        title: impl Into<String>,
        body: Vec<CommentLine>,
        start_line: usize,
        end_line: usize,
    ) -> Self {
        Self::DelimitedBlock {
            title: title.into(),
            body,
            start_line,
            end_line,
        }
    }

    /// Returns true if no header was found.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the first line of the header, if there is one.
    pub fn start_line(&self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::PlainComments { lines } => lines.first().map(|l| l.line),
            Self::DelimitedBlock { start_line, .. } => Some(*start_line),
        }
    }

    /// Returns a short name for the kind of header, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::PlainComments { .. } => "plain-comments",
            Self::DelimitedBlock { .. } => "delimited-block",
        }
    }
}

impl Display for HeaderStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("no header"),
            Self::PlainComments { lines } => {
                write!(f, "{} leading comment line(s)", lines.len())
            }
            Self::DelimitedBlock {
                title,
                start_line,
                end_line,
                ..
            } => write!(f, "block '{}' (lines {}-{})", title, start_line, end_line),
        }
    }
}
