//! Utility parsers.

use nom::{
    bytes::complete::tag_no_case,
    character::complete::{char, space0},
    combinator::value,
    multi::separated_list0,
    sequence::{delimited, preceded, tuple},
};

use crate::parsers::{whitespace_and_comments, ParseResult, Span};

/// A combinator that takes a parser `inner` and produces a parser that also
/// consumes leading whitespace, returning the output of `inner`. This parser
/// also suppresses line comments.
pub fn leading_whitespace<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    preceded(whitespace_and_comments, inner)
}

/// A combinator that takes a parser `inner` and produces a parser that also
/// consumes leading and trailing whitespace, returning the output of `inner`.
/// Also suppresses line comments.
pub fn surrounding_whitespace<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    delimited(whitespace_and_comments, inner, whitespace_and_comments)
}

/// A combinator that takes a parser `inner` and produces a parser for a comma
/// separated list of `inner`, which may be empty and may span several lines.
pub fn comma_separated_list0<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, Vec<O>>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    separated_list0(leading_whitespace(char(',')), leading_whitespace(inner))
}

/// Parses a section header such as `Initial conditions:`. Keywords match case
/// insensitively and may be separated by spaces, so `InitialConditions:` is
/// accepted as well. Pass `""` as `second` for single word headers.
pub fn section_header<'a>(
    first: &'static str,
    second: &'static str,
) -> impl FnMut(Span<'a>) -> ParseResult<'a, ()> {
    value(
        (),
        tuple((
            tag_no_case(first),
            space0,
            tag_no_case(second),
            space0,
            char(':'),
        )),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{parse_name, Match};
    use crate::parsed_types::Name;

    #[test]
    fn comma_separated_list0_works() {
        let mut parser = comma_separated_list0(parse_name);
        assert!(parser(Span::new("x, y")).is_exactly(vec![Name::new("x"), Name::new("y")]));
        assert!(parser(Span::new("x ,\n y")).is_exactly(vec![Name::new("x"), Name::new("y")]));
        assert!(parser(Span::new("x")).is_exactly(vec![Name::new("x")]));
        assert!(parser(Span::new("")).is_exactly(vec![]));
    }

    #[test]
    fn section_header_ignores_case_and_spacing() {
        let mut parser = section_header("initial", "conditions");
        assert!(parser(Span::new("Initial conditions:")).is_exactly(()));
        assert!(parser(Span::new("InitialConditions:")).is_exactly(()));
        assert!(parser(Span::new("INITIAL CONDITIONS :")).is_exactly(()));
        assert!(parser(Span::new("Goal conditions:")).is_err());
    }

    #[test]
    fn single_word_header() {
        let mut parser = section_header("effects", "");
        assert!(parser(Span::new("Effects:")).is_exactly(()));
        assert!(parser(Span::new("effects :")).is_exactly(()));
    }
}
