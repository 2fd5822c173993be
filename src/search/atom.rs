use crate::parsed_types::{Name, PredicateName};
use crate::search::Negatable;
use itertools::Itertools;
use std::fmt::Display;

/// A symbol of the problem domain.
pub type Symbol = Name;

/// A fully instantiated atom, e.g. `On(A,Table)`. Argument order is
/// significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom {
    predicate: PredicateName,
    arguments: Vec<Symbol>,
}

/// A grounded condition: an [`Atom`] together with its polarity.
pub type GroundedCondition = Negatable<Atom>;

impl Atom {
    pub fn new(predicate: PredicateName, arguments: Vec<Symbol>) -> Self {
        Self {
            predicate,
            arguments,
        }
    }

    #[inline(always)]
    pub fn predicate(&self) -> PredicateName {
        self.predicate
    }

    #[inline(always)]
    pub fn arguments(&self) -> &[Symbol] {
        &self.arguments
    }

    pub fn is_nullary(&self) -> bool {
        self.arguments.is_empty()
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.predicate, self.arguments.iter().join(","))
    }
}

impl Negatable<Atom> {
    /// Builds a grounded condition from a parsed literal whose arguments are
    /// all symbols.
    pub fn from_literal(literal: &crate::parsed_types::Literal) -> Self {
        let atom = literal.atom();
        Negatable::new(
            literal.is_negated(),
            Atom::new(*atom.predicate_name(), atom.values().to_vec()),
        )
    }

    #[inline(always)]
    pub fn atom(&self) -> &Atom {
        self.underlying()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on(a: &str, b: &str) -> Atom {
        Atom::new(PredicateName::from_str("On"), vec![a.into(), b.into()])
    }

    #[test]
    fn argument_order_matters() {
        assert_ne!(on("A", "B"), on("B", "A"));
    }

    #[test]
    fn polarity_matters() {
        assert_ne!(
            GroundedCondition::Positive(on("A", "B")),
            GroundedCondition::Negative(on("A", "B"))
        );
        assert_eq!(
            GroundedCondition::Negative(on("A", "B")).flipped(),
            GroundedCondition::Positive(on("A", "B"))
        );
    }

    #[test]
    fn display() {
        assert_eq!(on("A", "Table").to_string(), "On(A,Table)");
        assert_eq!(
            GroundedCondition::Negative(on("A", "Table")).to_string(),
            "!On(A,Table)"
        );
    }
}
