//! Provides parsers for a single plan step.

use crate::{
    parsed_types::PlanStep,
    parsers::{
        comma_separated_list0, leading_whitespace, parse_action_name, parse_name, ParseResult,
        Span,
    },
};
use nom::{
    character::complete::char,
    combinator::map,
    sequence::{delimited, tuple},
};

/// Parses a single step of a plan, i.e. `Move(C,A,Table)`.
///
/// ## Example
/// ```
/// # use eagerground::parsed_types::*;
/// # use eagerground::parsers::{parse_plan_step, preamble::*};
/// let input = "Move(C, A, Table)";
/// let plan_step = parse_plan_step(Span::new(input));
/// assert!(plan_step.is_value(PlanStep::new(
///    ActionName::from_str("Move"),
///    vec![Name::new("C"), Name::new("A"), Name::new("Table")]
/// )));
/// ```
pub fn parse_plan_step<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, PlanStep> {
    map(
        tuple((
            parse_action_name,
            delimited(
                leading_whitespace(char('(')),
                comma_separated_list0(parse_name),
                leading_whitespace(char(')')),
            ),
        )),
        |(action_name, parameters)| PlanStep::new(action_name, parameters),
    )(input.into())
}

impl crate::parsers::Parser for PlanStep {
    type Item = PlanStep;

    /// Parses a plan step.
    ///
    /// ## See also
    /// See [`parse_plan_step`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_plan_step(input)
    }
}
