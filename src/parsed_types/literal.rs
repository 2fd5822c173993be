//! Contains literals via the [`Literal`] type.

use crate::parsed_types::Atom;
use std::fmt::Display;

/// An [`Atom`] or its negated value, written `!Pred(a,b)`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Literal {
    Positive(Atom),
    Negative(Atom),
}

impl Literal {
    pub const fn new(atom: Atom) -> Self {
        Self::Positive(atom)
    }

    pub const fn new_not(atom: Atom) -> Self {
        Self::Negative(atom)
    }

    pub const fn is_negated(&self) -> bool {
        matches!(self, Self::Negative(..))
    }

    pub const fn atom(&self) -> &Atom {
        match self {
            Self::Positive(atom) | Self::Negative(atom) => atom,
        }
    }
}

impl From<Atom> for Literal {
    fn from(value: Atom) -> Self {
        Literal::new(value)
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive(atom) => write!(f, "{}", atom),
            Self::Negative(atom) => write!(f, "!{}", atom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::{Name, PredicateName};

    #[test]
    fn display_marks_negation() {
        let atom = Atom::new(
            PredicateName::from_str("On"),
            vec![Name::new("A"), Name::new("Table")],
        );
        assert_eq!(Literal::new(atom.clone()).to_string(), "On(A,Table)");
        assert_eq!(Literal::new_not(atom).to_string(), "!On(A,Table)");
    }
}
