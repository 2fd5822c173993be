//! Provides parsers for atoms.

use crate::parsed_types::Atom;
use crate::parsers::{comma_separated_list0, leading_whitespace};
use crate::parsers::{parse_name, parse_predicate_name, ParseResult, Span};
use nom::character::complete::char;
use nom::combinator::map;
use nom::sequence::{terminated, tuple};

/// Parses an atom, i.e. `<predicate>(a, b, ...)`. Whitespace is allowed
/// around the parentheses and commas.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{atom, preamble::*};
/// # use eagerground::parsed_types::*;
/// assert!(atom(Span::new("On(A, Table)")).is_value(
///     Atom::new(PredicateName::from("On"), vec!["A".into(), "Table".into()])
/// ));
/// assert!(atom(Span::new("HandEmpty()")).is_value(
///     Atom::new(PredicateName::from("HandEmpty"), vec![])
/// ));
/// assert!(atom(Span::new("On A B")).is_err());
/// ```
pub fn atom<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Atom> {
    map(
        tuple((
            parse_predicate_name,
            leading_whitespace(char('(')),
            terminated(
                comma_separated_list0(parse_name),
                leading_whitespace(char(')')),
            ),
        )),
        |(predicate_name, _, values)| Atom::new(predicate_name, values),
    )(input.into())
}
