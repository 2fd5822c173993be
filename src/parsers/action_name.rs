//! Provides parsers for action names.

use crate::parsed_types::ActionName;
use crate::parsers::{parse_name, ParseResult, Span};
use nom::combinator::map;

/// Parses an action name, i.e. `<name>`.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{parse_action_name, preamble::*};
/// assert!(parse_action_name(Span::new("MoveToTable")).is_value("MoveToTable".into()));
/// assert!(parse_action_name(Span::new("")).is_err());
///```
pub fn parse_action_name<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, ActionName> {
    map(parse_name, ActionName::new)(input.into())
}

impl crate::parsers::Parser for ActionName {
    type Item = ActionName;

    /// Parses an action name.
    ///
    /// ## Example
    /// ```
    /// # use eagerground::parsers::Parser;
    /// # use eagerground::parsed_types::ActionName;
    /// let (_, action_name) = ActionName::parse("Move").unwrap();
    /// assert_eq!(action_name, "Move".into());
    ///```
    ///
    /// ## See also
    /// See [`parse_action_name`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_action_name(input)
    }
}
