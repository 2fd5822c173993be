//! Comments run from `;` to the end of the line and may appear wherever
//! whitespace is allowed.

use crate::parsers::{ParseResult, Span};
use nom::bytes::complete::is_not;
use nom::character::complete::{char, multispace0};
use nom::combinator::{opt, recognize, value};
use nom::multi::many0_count;
use nom::sequence::pair;

/// Skips any mix of whitespace and `;` line comments. Never fails.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{whitespace_and_comments, preamble::*};
/// let (remainder, _) = whitespace_and_comments(Span::new("  ; a comment\n\tSymbols: A")).unwrap();
/// assert_eq!(remainder.fragment(), &"Symbols: A");
/// ```
pub fn whitespace_and_comments<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, ()> {
    value(
        (),
        pair(multispace0, many0_count(pair(line_comment, multispace0))),
    )(input.into())
}

fn line_comment(input: Span) -> ParseResult<Span> {
    recognize(pair(char(';'), opt(is_not("\r\n"))))(input)
}
