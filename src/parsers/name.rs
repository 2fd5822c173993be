//! Provides parsers for names.

use crate::parsed_types::Name;
use crate::parsers::{ParseResult, Span};
use nom::bytes::complete::take_while1;
use nom::combinator::map;

/// Parses a name, i.e. one or more ASCII letters, digits or underscores.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{parse_name, preamble::*};
/// assert!(parse_name(Span::new("Table")).is_value("Table".into()));
/// assert!(parse_name(Span::new("block_2")).is_value("block_2".into()));
/// assert!(parse_name(Span::new("0")).is_value("0".into()));
///
/// assert!(parse_name(Span::new("")).is_err());
/// assert!(parse_name(Span::new("!On")).is_err());
/// assert!(parse_name(Span::new(",A")).is_err());
///```
pub fn parse_name<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Name> {
    map(
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_'),
        |span: Span<'a>| Name::new(span.fragment()),
    )(input.into())
}

impl crate::parsers::Parser for Name {
    type Item = Name;

    /// Parses a name.
    ///
    /// ## See also
    /// See [`parse_name`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_name(input)
    }
}
