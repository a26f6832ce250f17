//! Line recognizers for header scanning.
//!
//! This module contains nom-based parsers for the few constructs the
//! header locator cares about: comment markers, region directives and the
//! auto-generated marker tag.

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, tag_no_case},
    character::complete::{char, space0, space1},
    combinator::{eof, opt, rest},
    sequence::preceded,
};

/// Parses a line comment introduced by `marker` and returns its content.
///
/// Leading whitespace before the marker is allowed.
pub fn parse_line_comment<'a>(marker: &str, input: &'a str) -> IResult<&'a str, &'a str> {
    (space0, tag(marker), rest)
        .map(|(_, _, content)| content)
        .parse(input)
}

/// Parses the opening of a C-style comment (`//`, `///` or `/*`).
///
/// Returns the text after the marker. Doc comments (`///`) are reported
/// like plain line comments.
pub fn parse_slash_comment(input: &str) -> IResult<&str, &str> {
    (space0, alt((tag("///"), tag("//"))), rest)
        .map(|(_, _, content)| content)
        .parse(input)
}

/// Parses the opening of a multi-line comment introduced by `opener`.
pub fn parse_block_comment_open<'a>(opener: &str, input: &'a str) -> IResult<&'a str, &'a str> {
    parse_line_comment(opener, input)
}

/// Parses a directive line `#<name>` followed by end of line or whitespace
/// and returns the trailing text.
///
/// Whitespace is allowed before the `#` and between `#` and the name, as
/// the C# preprocessor does.
fn parse_directive<'a>(name: &str, input: &'a str) -> IResult<&'a str, &'a str> {
    (
        space0,
        char('#'),
        space0,
        tag(name),
        alt((eof, preceded(space1, rest))),
    )
        .map(|(_, _, _, _, trailing)| trailing)
        .parse(input)
}

/// Parses a `#region` directive and returns its title.
pub fn parse_region_open(input: &str) -> IResult<&str, &str> {
    parse_directive("region", input).map(|(remaining, title)| (remaining, title.trim()))
}

/// Parses a `#endregion` directive.
pub fn parse_region_close(input: &str) -> IResult<&str, &str> {
    parse_directive("endregion", input)
}

/// Parses an auto-generated marker tag.
///
/// Accepts `<auto-generated>`, `<auto-generated/>`, `<autogenerated>` and
/// `<autogenerated />` in any ASCII case, with optional inner whitespace.
pub fn parse_auto_generated_tag(input: &str) -> IResult<&str, &str> {
    (
        space0,
        char('<'),
        space0,
        tag_no_case("auto"),
        opt(char('-')),
        tag_no_case("generated"),
        space0,
        opt(char('/')),
        space0,
        char('>'),
        rest,
    )
        .map(|(.., trailing)| trailing)
        .parse(input)
}

/// Checks if a line is blank (empty or only whitespace).
pub fn is_blank_line(input: &str) -> bool {
    input.trim().is_empty()
}

/// Strips the decoration that conventionally starts each line inside a
/// multi-line comment (` * text`).
pub fn strip_block_decoration(input: &str) -> &str {
    input.trim().trim_start_matches('*').trim()
}
