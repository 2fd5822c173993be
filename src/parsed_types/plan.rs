//! Contains the [`Plan`] type, the syntax tree of a plan file.

use crate::parsed_types::PlanStep;
use std::ops::Deref;

/// The steps of a plan file in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<PlanStep>,
}

impl Plan {
    pub fn new(steps: Vec<PlanStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[PlanStep] {
        &self.steps
    }
}

impl Deref for Plan {
    type Target = [PlanStep];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

impl IntoIterator for Plan {
    type Item = PlanStep;
    type IntoIter = std::vec::IntoIter<PlanStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}
