use crate::search::{
    successor_generators::SuccessorGenerator, ActionCatalogue, GroundedAction, State,
};
use std::rc::Rc;

/// Generates successors under the full STRIPS semantics: negative
/// preconditions must be absent and delete effects are applied.
#[derive(Debug, Clone)]
pub struct FullSuccessorGenerator {
    catalogue: Rc<ActionCatalogue>,
}

impl FullSuccessorGenerator {
    pub fn new(catalogue: Rc<ActionCatalogue>) -> Self {
        Self { catalogue }
    }
}

impl SuccessorGenerator for FullSuccessorGenerator {
    fn catalogue(&self) -> &ActionCatalogue {
        &self.catalogue
    }

    #[inline(always)]
    fn is_applicable(&self, state: &State, action: &GroundedAction) -> bool {
        state.is_applicable(action)
    }

    fn generate_successor(&self, state: &State, action: &GroundedAction) -> State {
        state.apply_effects(action.effects())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{grounder::Grounder, Environment, Task};
    use crate::test_utils::*;
    use itertools::Itertools;

    #[test]
    fn blocksworld_initial_successors() {
        let task = Task::from_text(BLOCKSWORLD_TEXT).unwrap();
        let catalogue = Rc::new(Grounder::new().ground(&task).unwrap());
        let generator = FullSuccessorGenerator::new(catalogue.clone());

        let applicable = generator
            .applicable_actions(task.initial_state())
            .into_iter()
            .map(|index| catalogue[index].to_string())
            .collect_vec();
        // Clear(Table) lets blocks move onto the table through Move as well
        assert_eq!(
            applicable,
            vec![
                "Move(C,A,B)",
                "Move(C,A,Table)",
                "Move(B,Table,C)",
                "MoveToTable(C,A)",
                "MoveToTable(B,Table)",
            ]
        );

        let index = catalogue
            .iter()
            .position(|action| action.to_string() == "MoveToTable(C,A)")
            .unwrap();
        let successor = generator.generate_successor(task.initial_state(), &catalogue[index]);
        assert_eq!(
            successor.key().as_str(),
            "Clear(A)Clear(B)Clear(C)Clear(Table)On(A,Table)On(B,Table)On(C,Table)"
        );
    }

    #[test]
    fn negative_preconditions_block_actions() {
        let task = Task::from_text(DOORS_TEXT).unwrap();
        let catalogue = Rc::new(Grounder::new().ground(&task).unwrap());
        let generator = FullSuccessorGenerator::new(catalogue.clone());

        let applicable = generator
            .applicable_actions(task.initial_state())
            .into_iter()
            .map(|index| catalogue[index].to_string())
            .collect_vec();
        assert_eq!(applicable, vec!["OpenDoor(D2)", "CloseDoor(D1)"]);
    }
}
