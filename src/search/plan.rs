//! A plan is a sequence of grounded actions that can be executed to achieve
//! a goal. This module provides the [`Plan`] struct, which represents a plan.

use crate::parsers::{describe_error, describe_position, parse_plan};
use crate::search::{grounder::Grounder, Environment, GroundedAction, PlannerError};
use itertools::Itertools;
use std::collections::HashSet;
use std::fmt::Display;
use std::ops::Deref;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<GroundedAction>,
}

impl Plan {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<GroundedAction>) -> Self {
        Self { steps }
    }

    pub fn from_path(path: &Path, environment: &impl Environment) -> Result<Self, PlannerError> {
        let contents = std::fs::read_to_string(path).map_err(|source| PlannerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&contents, environment)
    }

    /// Reads a plan in the format written by the planner, one grounded action
    /// such as `Move(C,A,Table)` per entry. Every step is grounded against
    /// the schemas of `environment`.
    pub fn from_text(text: &str, environment: &impl Environment) -> Result<Self, PlannerError> {
        let (remainder, parsed_plan) =
            parse_plan(text).map_err(|e| PlannerError::Parse(describe_error(&e)))?;
        if !remainder.fragment().is_empty() {
            return Err(PlannerError::Parse(describe_position(
                &remainder,
                "unexpected input in plan",
            )));
        }

        let symbols: HashSet<_> = environment.symbols().iter().collect();
        let grounder = Grounder::new();
        let mut steps = vec![];
        for step in parsed_plan.steps() {
            let schema = environment
                .action_schemas()
                .iter()
                .find(|schema| schema.name() == step.name())
                .ok_or_else(|| PlannerError::UnknownAction(step.name().to_string()))?;

            if let Some(parameter) = step
                .parameters()
                .iter()
                .find(|parameter| !symbols.contains(parameter))
            {
                return Err(PlannerError::InvalidPlan(format!(
                    "step {} uses undeclared symbol {}",
                    step, parameter
                )));
            }

            if !step.parameters().iter().all_unique() {
                return Err(PlannerError::InvalidPlan(format!(
                    "step {} repeats a symbol, actions are grounded over distinct symbols",
                    step
                )));
            }

            steps.push(grounder.instantiate(schema, step.parameters())?);
        }

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[GroundedAction] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FromIterator<GroundedAction> for Plan {
    fn from_iter<T: IntoIterator<Item = GroundedAction>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Plan {
    type Item = GroundedAction;
    type IntoIter = std::vec::IntoIter<GroundedAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl Deref for Plan {
    type Target = [GroundedAction];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

/// One action per line, without a trailing newline.
impl Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.steps.iter().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Task;
    use crate::test_utils::*;

    #[test]
    fn from_text_works() {
        let task = Task::from_text(BLOCKSWORLD_TEXT).unwrap();
        let plan_text = r#"MoveToTable(C,A)
        Move(B,Table,C)
        Move(A,Table,B)
        ; cost = 3 (unit cost)
        "#;

        let plan = Plan::from_text(plan_text, &task).unwrap();
        assert_eq!(plan.len(), 3);
        assert_eq!(plan[0].to_string(), "MoveToTable(C,A)");
        assert_eq!(
            plan[0].effects().iter().join(" "),
            "On(C,Table) !On(C,A) Clear(A)"
        );
        assert_eq!(
            plan.to_string(),
            "MoveToTable(C,A)\nMove(B,Table,C)\nMove(A,Table,B)"
        );
        assert_eq!(Plan::from_text(&plan.to_string(), &task).unwrap(), plan);
    }

    #[test]
    fn unknown_action() {
        let task = Task::from_text(BLOCKSWORLD_TEXT).unwrap();
        assert!(matches!(
            Plan::from_text("Teleport(A,B)", &task),
            Err(PlannerError::UnknownAction(name)) if name == "Teleport"
        ));
    }

    #[test]
    fn wrong_arity() {
        let task = Task::from_text(BLOCKSWORLD_TEXT).unwrap();
        assert!(matches!(
            Plan::from_text("MoveToTable(C)", &task),
            Err(PlannerError::ArityMismatch {
                expected: 2,
                found: 1,
                ..
            })
        ));
    }

    #[test]
    fn undeclared_symbol() {
        let task = Task::from_text(BLOCKSWORLD_TEXT).unwrap();
        assert!(matches!(
            Plan::from_text("MoveToTable(C,Floor)", &task),
            Err(PlannerError::InvalidPlan(_))
        ));
    }

    #[test]
    fn repeated_symbol_is_rejected() {
        let task = Task::from_text(BLOCKSWORLD_TEXT).unwrap();
        let plan_text = "Move(B,Table,Table)\nMove(C,A,Table)\nMove(B,Table,C)\nMove(A,Table,B)";
        match Plan::from_text(plan_text, &task) {
            Err(PlannerError::InvalidPlan(message)) => {
                assert!(message.starts_with("step Move(B,Table,Table)"), "{}", message)
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn every_step_is_in_the_catalogue() {
        let task = Task::from_text(BLOCKSWORLD_TEXT).unwrap();
        let catalogue = Grounder::new().ground(&task).unwrap();
        let plan = Plan::from_text("MoveToTable(C,A)\nMove(B,Table,C)", &task).unwrap();
        for step in plan.iter() {
            assert!(catalogue.find(step.name(), step.arguments()).is_some());
        }
    }

    #[test]
    fn garbage_is_rejected() {
        let task = Task::from_text(BLOCKSWORLD_TEXT).unwrap();
        assert!(matches!(
            Plan::from_text("MoveToTable(C,A) ???", &task),
            Err(PlannerError::Parse(_))
        ));
    }
}
