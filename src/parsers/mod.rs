//! `nom` parsers for the line-oriented domain format and for plan files.

mod action_definition;
mod action_name;
mod atom;
mod comments;
mod conditions;
mod domain;
mod literal;
mod name;
mod plan;
mod plan_step;
mod predicate_name;
mod symbols;
mod test_helpers;
mod utilities;

#[cfg(test)]
pub(crate) use test_helpers::Match;
pub use test_helpers::UnwrapValue;

pub trait Parser {
    type Item;

    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item>;

    fn parse_span(input: Span) -> ParseResult<Self::Item> {
        Self::parse(input)
    }

    /// Parse a string slice into the desired type. Discards any remaining
    /// input.
    fn from_str(input: &str) -> Result<Self::Item, nom::Err<ParseError>> {
        let (_, value) = Self::parse(input)?;
        Ok(value)
    }
}

pub type Span<'a> = nom_locate::LocatedSpan<&'a str>;

pub type ParseError<'a> = nom_greedyerror::GreedyError<Span<'a>, nom::error::ErrorKind>;

pub type ParseResult<'a, T, E = ParseError<'a>> = nom::IResult<Span<'a>, T, E>;

/// Renders a parser failure as `line:column: message`, pointing at the
/// furthest position the parser reached.
pub fn describe_error(error: &nom::Err<ParseError>) -> String {
    match error {
        nom::Err::Incomplete(_) => "unexpected end of input".to_string(),
        nom::Err::Error(e) | nom::Err::Failure(e) => match e.errors.first() {
            Some((span, kind)) => describe_position(span, &format!("{:?}", kind)),
            None => "unknown parse error".to_string(),
        },
    }
}

/// Renders the location of `span` together with the start of its text, used
/// for input that a parser left unconsumed.
pub fn describe_position(span: &Span, message: &str) -> String {
    let snippet: String = span
        .fragment()
        .lines()
        .next()
        .unwrap_or_default()
        .chars()
        .take(40)
        .collect();
    format!(
        "{}:{}: {} near {:?}",
        span.location_line(),
        span.get_utf8_column(),
        message,
        snippet
    )
}

/// Re-exports commonly used types.
pub mod preamble {
    pub use crate::parsers::test_helpers::UnwrapValue;
    pub use crate::parsers::Parser;
    pub use crate::parsers::{ParseError, ParseResult, Span};
}

// Parsers
pub use action_definition::parse_action_definition;
pub use action_name::parse_action_name;
pub use comments::whitespace_and_comments;
pub use conditions::{parse_goal_conditions, parse_initial_conditions};
pub use domain::parse_domain;
pub use name::parse_name;
pub use plan::parse_plan;
pub use plan_step::parse_plan_step;
pub use predicate_name::parse_predicate_name;
pub use symbols::parse_symbols;

// Parser combinators
pub use atom::atom;
pub use literal::literal;

#[allow(unused_imports)]
pub(crate) use utilities::{
    comma_separated_list0, leading_whitespace, section_header, surrounding_whitespace,
};
