//! Provides parsers for the initial and goal condition sections.

use crate::parsed_types::Literal;
use crate::parsers::{comma_separated_list0, literal, section_header, ParseResult, Span};
use nom::sequence::preceded;

/// Parses the initial condition section, i.e.
/// `Initial conditions: On(A,Table), Clear(A)`.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{parse_initial_conditions, preamble::*};
/// let conditions = parse_initial_conditions(Span::new(
///     "InitialConditions: On(A,Table),\n    Clear(A)",
/// ))
/// .unwrap_value();
/// assert_eq!(conditions.len(), 2);
/// ```
pub fn parse_initial_conditions<'a, T: Into<Span<'a>>>(
    input: T,
) -> ParseResult<'a, Vec<Literal>> {
    preceded(
        section_header("initial", "conditions"),
        comma_separated_list0(literal),
    )(input.into())
}

/// Parses the goal condition section, i.e. `Goal conditions: On(A,B)`.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{parse_goal_conditions, preamble::*};
/// let conditions = parse_goal_conditions(Span::new("Goal conditions: On(A,B), !Clear(B)"))
///     .unwrap_value();
/// assert_eq!(conditions.len(), 2);
/// assert!(conditions[1].is_negated());
/// ```
pub fn parse_goal_conditions<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Vec<Literal>> {
    preceded(
        section_header("goal", "conditions"),
        comma_separated_list0(literal),
    )(input.into())
}
