use crate::parsed_types::Literal;
use crate::search::{GroundedCondition, State};
use itertools::Itertools;
use std::fmt::Display;

/// The goal of a task, a conjunction of grounded conditions.
#[derive(Debug, Clone, Default)]
pub struct Goal {
    conditions: Vec<GroundedCondition>,
}

impl Goal {
    /// Creates a new goal, dropping repeated conditions.
    pub fn new(conditions: impl IntoIterator<Item = GroundedCondition>) -> Self {
        Self {
            conditions: conditions.into_iter().unique().collect(),
        }
    }

    pub fn from_literals(literals: &[Literal]) -> Self {
        Self::new(literals.iter().map(GroundedCondition::from_literal))
    }

    /// Returns true if the goal is satisfied by the given state.
    pub fn is_satisfied(&self, state: &State) -> bool {
        self.conditions
            .iter()
            .all(|condition| state.satisfies(condition))
    }

    /// Number of goal conditions the state does not satisfy.
    pub fn count_unsatisfied(&self, state: &State) -> usize {
        self.conditions
            .iter()
            .filter(|condition| !state.satisfies(condition))
            .count()
    }

    pub fn conditions(&self) -> &[GroundedCondition] {
        &self.conditions
    }
}

impl Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.conditions.iter().join(", "))
    }
}
