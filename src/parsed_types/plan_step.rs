//! Contains the [`PlanStep`] type.

use crate::parsed_types::{ActionName, Name};
use itertools::Itertools;
use std::fmt::Display;

/// One entry of a plan file, e.g. `Move(C,A,Table)`: an action name applied
/// to symbols. Whether the action exists and the arity fits is only checked
/// when the plan is grounded against a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanStep {
    name: ActionName,
    arguments: Vec<Name>,
}

impl PlanStep {
    pub fn new(name: ActionName, arguments: Vec<Name>) -> Self {
        Self { name, arguments }
    }

    pub fn name(&self) -> &ActionName {
        &self.name
    }

    pub fn parameters(&self) -> &[Name] {
        &self.arguments
    }
}

impl Display for PlanStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.arguments.iter().join(","))
    }
}
