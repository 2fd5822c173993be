//! Provides parsers for parsing a plan.

use crate::{
    parsed_types::Plan,
    parsers::{leading_whitespace, parse_plan_step, surrounding_whitespace, ParseResult, Span},
};
use nom::{combinator::map, multi::many0};

/// Parses a plan, i.e. whitespace separated plan steps.
///
/// ## Example
/// ```
/// # use eagerground::parsed_types::*;
/// # use eagerground::parsers::{parse_plan, preamble::*};
/// let input = r#"MoveToTable(C,A)
/// Move(B,Table,C)
/// ; cost = 2 (unit cost)
/// "#;
/// let plan = parse_plan(Span::new(input));
/// assert!(plan.is_value(Plan::new(vec![
///    PlanStep::new(ActionName::from_str("MoveToTable"), vec![Name::new("C"), Name::new("A")]),
///    PlanStep::new(
///        ActionName::from_str("Move"),
///        vec![Name::new("B"), Name::new("Table"), Name::new("C")],
///    ),
/// ])));
/// ```
pub fn parse_plan<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Plan> {
    map(
        surrounding_whitespace(many0(leading_whitespace(parse_plan_step))),
        Plan::new,
    )(input.into())
}

impl crate::parsers::Parser for Plan {
    type Item = Plan;

    /// Parses a plan.
    ///
    /// ## See also
    /// See [`parse_plan`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_plan(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_plan() {
        let (remainder, plan) = parse_plan("   \n; nothing to do\n").unwrap();
        assert!(remainder.is_empty());
        assert!(plan.steps().is_empty());
    }
}
