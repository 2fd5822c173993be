//! Provides parsers for the symbol section.

use crate::parsed_types::Name;
use crate::parsers::{parse_name, section_header, ParseResult, Span};
use nom::character::complete::{char, multispace0, space0};
use nom::multi::separated_list0;
use nom::sequence::{preceded, tuple};

/// Parses the symbol section, i.e. `Symbols: A, B, Table`. The list starts
/// on the header line; line breaks are only allowed after a comma, so an
/// empty symbol list does not swallow the next section header.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{parse_symbols, preamble::*};
/// # use eagerground::parsed_types::Name;
/// assert!(parse_symbols(Span::new("Symbols: A,B, Table")).is_value(
///     vec![Name::new("A"), Name::new("B"), Name::new("Table")]
/// ));
/// assert!(parse_symbols(Span::new("symbols:")).is_value(vec![]));
/// ```
pub fn parse_symbols<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Vec<Name>> {
    preceded(
        section_header("symbols", ""),
        preceded(
            space0,
            separated_list0(tuple((space0, char(','), multispace0)), parse_name),
        ),
    )(input.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_leaves_next_section() {
        let (remainder, symbols) = parse_symbols("Symbols:\nInitial conditions:").unwrap();
        assert!(symbols.is_empty());
        assert_eq!(remainder.fragment(), &"\nInitial conditions:");
    }

    #[test]
    fn list_may_continue_after_comma() {
        let (_, symbols) = parse_symbols("Symbols: A,\n    B").unwrap();
        assert_eq!(symbols, vec![Name::new("A"), Name::new("B")]);
    }
}
