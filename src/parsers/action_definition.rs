//! Provides parsers for action definitions.

use crate::parsed_types::ActionDefinition;
use crate::parsers::{
    comma_separated_list0, leading_whitespace, literal, parse_action_name, parse_name,
    section_header, ParseResult, Span,
};
use nom::character::complete::char;
use nom::combinator::map;
use nom::sequence::{delimited, preceded, tuple};

/// Parses an action definition, i.e. a header followed by its precondition
/// and effect lines.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{parse_action_definition, preamble::*};
/// # use eagerground::parsed_types::*;
/// let input = r#"MoveToTable(x, from)
///     Preconditions: On(x,from), Clear(x)
///     Effects: On(x,Table), Clear(from), !On(x,from)"#;
///
/// let action = parse_action_definition(Span::new(input)).unwrap_value();
/// assert_eq!(action.name(), &ActionName::from_str("MoveToTable"));
/// assert_eq!(action.parameters(), &[Name::new("x"), Name::new("from")]);
/// assert_eq!(action.preconditions().len(), 2);
/// assert_eq!(action.effects().len(), 3);
/// assert!(action.effects()[2].is_negated());
/// ```
pub fn parse_action_definition<'a, T: Into<Span<'a>>>(
    input: T,
) -> ParseResult<'a, ActionDefinition> {
    let header = tuple((
        parse_action_name,
        delimited(
            leading_whitespace(char('(')),
            comma_separated_list0(parse_name),
            leading_whitespace(char(')')),
        ),
    ));
    let preconditions = preceded(
        leading_whitespace(section_header("preconditions", "")),
        comma_separated_list0(literal),
    );
    let effects = preceded(
        leading_whitespace(section_header("effects", "")),
        comma_separated_list0(literal),
    );

    map(
        tuple((header, preconditions, effects)),
        |((name, parameters), preconditions, effects)| {
            ActionDefinition::new(name, parameters, preconditions, effects)
        },
    )(input.into())
}

impl crate::parsers::Parser for ActionDefinition {
    type Item = ActionDefinition;

    /// Parses an action definition.
    ///
    /// ## See also
    /// See [`parse_action_definition`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_action_definition(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_effects_fails() {
        let input = "Noop()\nPreconditions: Clear(A)\n";
        assert!(parse_action_definition(input).is_err());
    }

    #[test]
    fn empty_sections_are_allowed() {
        let input = "Noop()\nPreconditions:\nEffects:";
        let (_, action) = parse_action_definition(input).unwrap();
        assert!(action.parameters().is_empty());
        assert!(action.preconditions().is_empty());
        assert!(action.effects().is_empty());
    }
}
