//! Provides parsers for predicate names.

use crate::parsed_types::PredicateName;
use crate::parsers::{parse_name, ParseResult, Span};
use nom::combinator::map;

/// Parses a predicate name, i.e. `<name>`.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{parse_predicate_name, preamble::*};
/// assert!(parse_predicate_name(Span::new("On")).is_value("On".into()));
/// assert!(parse_predicate_name(Span::new("(")).is_err());
///```
pub fn parse_predicate_name<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, PredicateName> {
    map(parse_name, PredicateName::new)(input.into())
}

impl crate::parsers::Parser for PredicateName {
    type Item = PredicateName;

    /// Parses a predicate name.
    ///
    /// ## See also
    /// See [`parse_predicate_name`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_predicate_name(input)
    }
}
