use crate::search::{states::StateKey, Atom, GroundedAction, GroundedCondition};
use itertools::Itertools;
use std::collections::HashSet;
use std::fmt::Display;

/// A set of atoms that are currently true. Under the closed-world assumption
/// every atom not in the set is false, so only positive atoms are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    atoms: HashSet<Atom>,
}

impl State {
    pub fn new(atoms: impl IntoIterator<Item = Atom>) -> Self {
        Self {
            atoms: atoms.into_iter().collect(),
        }
    }

    pub fn atoms(&self) -> &HashSet<Atom> {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn contains(&self, atom: &Atom) -> bool {
        self.atoms.contains(atom)
    }

    pub fn insert(&mut self, atom: Atom) -> bool {
        self.atoms.insert(atom)
    }

    pub fn remove(&mut self, atom: &Atom) -> bool {
        self.atoms.remove(atom)
    }

    /// Whether the condition holds: a positive condition needs its atom to
    /// be present, a negative one needs it to be absent.
    #[inline(always)]
    pub fn satisfies(&self, condition: &GroundedCondition) -> bool {
        self.contains(condition.atom()) != condition.is_negated()
    }

    /// Whether every positive precondition is present and every negative
    /// precondition is absent.
    pub fn is_applicable(&self, action: &GroundedAction) -> bool {
        action
            .preconditions()
            .iter()
            .all(|precondition| self.satisfies(precondition))
    }

    /// Applies `effects` to a copy of this state. Negative effects remove
    /// their atom before positive effects insert theirs, so an atom that is
    /// both deleted and added ends up true.
    pub fn apply_effects<'a>(
        &self,
        effects: impl IntoIterator<Item = &'a GroundedCondition> + Clone,
    ) -> State {
        let mut successor = self.clone();
        for effect in effects.clone().into_iter().filter(|e| e.is_negated()) {
            successor.remove(effect.atom());
        }
        for effect in effects.into_iter().filter(|e| !e.is_negated()) {
            successor.insert(effect.atom().clone());
        }
        successor
    }

    /// Computes the canonical key of the state.
    pub fn key(&self) -> StateKey {
        StateKey::new(
            self.atoms
                .iter()
                .map(|atom| atom.to_string())
                .sorted()
                .collect::<String>(),
        )
    }
}

impl FromIterator<Atom> for State {
    fn from_iter<T: IntoIterator<Item = Atom>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.atoms.iter().map(|atom| atom.to_string()).sorted().join(", ")
        )
    }
}
