//! Provides parsers for literals.

use crate::parsed_types::Literal;
use crate::parsers::{atom, leading_whitespace, ParseResult, Span};
use nom::branch::alt;
use nom::character::complete::char;
use nom::combinator::map;
use nom::sequence::preceded;

/// Parses a literal, i.e. `<atom> | !<atom>`.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{literal, preamble::*};
/// # use eagerground::parsed_types::*;
/// let on = Atom::new(PredicateName::from("On"), vec![Name::new("A"), Name::new("B")]);
/// assert!(literal(Span::new("On(A,B)")).is_value(Literal::new(on.clone())));
/// assert!(literal(Span::new("!On(A,B)")).is_value(Literal::new_not(on)));
/// ```
pub fn literal<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Literal> {
    let is_not = map(preceded(char('!'), leading_whitespace(atom)), Literal::new_not);
    let is = map(atom, Literal::new);

    alt((is_not, is))(input.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::{Atom, Name, PredicateName};
    use crate::parsers::Match;

    #[test]
    fn negation_allows_space() {
        assert!(literal("! Clear(x)").is_exactly(Literal::new_not(Atom::new(
            PredicateName::from_str("Clear"),
            vec![Name::new("x")]
        ))));
    }

    #[test]
    fn double_negation_fails() {
        assert!(literal("!!Clear(x)").is_err());
    }
}
