//! Provides parsers for domain files.

use crate::parsed_types::Domain;
use crate::parsers::{
    leading_whitespace, parse_action_definition, parse_goal_conditions,
    parse_initial_conditions, parse_symbols, section_header, surrounding_whitespace,
    ParseResult, Span,
};
use nom::combinator::map;
use nom::multi::many0;
use nom::sequence::{preceded, tuple};

/// Parses a complete domain file.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{parse_domain, preamble::*};
/// let input = r#"
/// ; two blocks on a table
/// Symbols: A,B,Table
/// Initial conditions: On(A,Table), On(B,Table), Clear(A), Clear(B), Clear(Table)
/// Goal conditions: On(A,B)
/// Actions:
///     Move(b,x,y)
///     Preconditions: On(b,x), Clear(b), Clear(y)
///     Effects: On(b,y), Clear(x), !On(b,x), !Clear(y)
///
///     MoveToTable(b,x)
///     Preconditions: On(b,x), Clear(b)
///     Effects: On(b,Table), Clear(x), !On(b,x)
/// "#;
///
/// let (remainder, domain) = parse_domain(input).unwrap();
///
/// assert!(remainder.is_empty());
/// assert_eq!(domain.symbols().len(), 3);
/// assert_eq!(domain.initial_conditions().len(), 5);
/// assert_eq!(domain.goal_conditions().len(), 1);
/// assert_eq!(domain.actions().len(), 2);
/// ```
pub fn parse_domain<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Domain> {
    map(
        surrounding_whitespace(tuple((
            parse_symbols,
            leading_whitespace(parse_initial_conditions),
            leading_whitespace(parse_goal_conditions),
            preceded(
                leading_whitespace(section_header("actions", "")),
                many0(leading_whitespace(parse_action_definition)),
            ),
        ))),
        |(symbols, initial, goal, actions)| Domain::new(symbols, initial, goal, actions),
    )(input.into())
}

impl crate::parsers::Parser for Domain {
    type Item = Domain;

    /// Parses a domain file.
    ///
    /// ## See also
    /// See [`parse_domain`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_domain(input)
    }
}
