//! Extraction of the header structure at the top of a source file.
//!
//! The locator performs a single forward pass over the leading lines and
//! never backtracks across the closer of a delimited block.

use super::ast::{CommentLine, HeaderStructure, SourceLine, SourceUnit};
use super::lexer::{parse_block_comment_open, strip_block_decoration};
use super::syntax::CommentSyntax;
use log::trace;

/// Tracks whether the scan is inside a multi-line comment.
struct CommentScanner<'s> {
    syntax: &'s dyn CommentSyntax,
    closer: Option<&'static str>,
}

impl<'s> CommentScanner<'s> {
    fn new(syntax: &'s dyn CommentSyntax) -> Self {
        Self {
            syntax,
            closer: None,
        }
    }

    fn in_block_comment(&self) -> bool {
        self.closer.is_some()
    }

    /// Returns the comment text of `line`, or `None` if it is not a comment.
    fn comment_text<'a>(&mut self, line: &'a str) -> Option<&'a str> {
        if let Some(closer) = self.closer {
            let text = match line.find(closer) {
                Some(end) => {
                    self.closer = None;
                    &line[..end]
                }
                None => line,
            };
            return Some(strip_block_decoration(text));
        }

        if let Some(text) = self.syntax.line_comment(line) {
            return Some(text.trim());
        }

        let (opener, closer) = self.syntax.block_comment_delimiters()?;
        let (_, after) = parse_block_comment_open(opener, line).ok()?;
        let text = match after.find(closer) {
            Some(end) => &after[..end],
            None => {
                self.closer = Some(closer);
                after
            }
        };
        Some(strip_block_decoration(text))
    }
}

/// Locates the header structure at the top of `unit`.
///
/// Leading blank lines are skipped. The first remaining line decides the
/// shape: a block opener yields [`HeaderStructure::DelimitedBlock`], a
/// comment yields [`HeaderStructure::PlainComments`], anything else yields
/// [`HeaderStructure::None`].
pub fn locate(unit: &SourceUnit, syntax: &dyn CommentSyntax) -> HeaderStructure {
    let mut lines = unit.lines.iter().skip_while(|line| line.is_blank());

    let Some(first) = lines.next() else {
        return HeaderStructure::None;
    };

    if let Some(title) = syntax.block_open(&first.text) {
        trace!("{}: block opener on line {}", unit.file_name, first.number);
        return collect_block(first, title, lines, syntax);
    }

    let mut scanner = CommentScanner::new(syntax);
    let Some(text) = scanner.comment_text(&first.text) else {
        trace!("{}: no header, first construct on line {}", unit.file_name, first.number);
        return HeaderStructure::None;
    };

    let mut comments = vec![CommentLine::new(first.number, text)];
    for line in lines {
        match scanner.comment_text(&line.text) {
            Some(text) => comments.push(CommentLine::new(line.number, text)),
            None => break,
        }
    }

    trace!(
        "{}: {} leading comment line(s) from line {}",
        unit.file_name,
        comments.len(),
        first.number
    );
    HeaderStructure::plain_comments(comments)
}

/// Collects the body of a delimited block up to its matching closer.
fn collect_block<'a>(
    opener: &SourceLine,
    title: &str,
    rest: impl Iterator<Item = &'a SourceLine>,
    syntax: &dyn CommentSyntax,
) -> HeaderStructure {
    let mut scanner = CommentScanner::new(syntax);
    let mut body = Vec::new();
    let mut depth = 0usize;
    let mut end_line = opener.number;

    for line in rest {
        end_line = line.number;

        if !scanner.in_block_comment() {
            if syntax.block_open(&line.text).is_some() {
                depth += 1;
                continue;
            }
            if syntax.is_block_close(&line.text) {
                if depth == 0 {
                    break;
                }
                depth -= 1;
                continue;
            }
        }

        if let Some(text) = scanner.comment_text(&line.text) {
            body.push(CommentLine::new(line.number, text));
        }
    }

    HeaderStructure::delimited_block(title, body, opener.number, end_line)
}

/// Returns the comment lines of the leading trivia: everything before the
/// first line that is neither blank, a comment, nor a block delimiter.
pub fn leading_trivia(unit: &SourceUnit, syntax: &dyn CommentSyntax) -> Vec<CommentLine> {
    let mut scanner = CommentScanner::new(syntax);
    let mut trivia = Vec::new();

    for line in &unit.lines {
        if !scanner.in_block_comment() {
            if line.is_blank() {
                continue;
            }
            if let Some(title) = syntax.block_open(&line.text) {
                trivia.push(CommentLine::new(line.number, title));
                continue;
            }
            if syntax.is_block_close(&line.text) {
                continue;
            }
        }

        match scanner.comment_text(&line.text) {
            Some(text) => trivia.push(CommentLine::new(line.number, text)),
            None => break,
        }
    }

    trivia
}
