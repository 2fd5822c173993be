//! Contains atoms via the [`Atom`] type.

use crate::parsed_types::{Name, PredicateName};
use itertools::Itertools;
use std::fmt::Display;
use std::ops::Deref;

/// An atom as written in a domain file, i.e. `Pred(a,b)`. Whether an argument
/// is a symbol or a schema parameter is only decided once the atom is placed
/// in context, see [`crate::search::Task`].
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct Atom {
    predicate_name: PredicateName,
    values: Vec<Name>,
}

impl Atom {
    pub const fn new(predicate_name: PredicateName, values: Vec<Name>) -> Self {
        Self {
            predicate_name,
            values,
        }
    }

    /// Returns the predicate name.
    pub const fn predicate_name(&self) -> &PredicateName {
        &self.predicate_name
    }

    /// Gets a reference to the values.
    pub fn values(&self) -> &[Name] {
        self.values.as_slice()
    }
}

impl From<(PredicateName, Vec<Name>)> for Atom {
    fn from(value: (PredicateName, Vec<Name>)) -> Self {
        Atom::new(value.0, value.1)
    }
}

impl Deref for Atom {
    type Target = [Name];

    fn deref(&self) -> &Self::Target {
        self.values()
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.predicate_name, self.values.iter().join(","))
    }
}
