use crate::search::{
    successor_generators::SuccessorGenerator, ActionCatalogue, GroundedAction, State,
};
use std::rc::Rc;

/// Generates successors of the delete relaxation: negative preconditions are
/// ignored and only add effects are applied, so states only ever grow.
#[derive(Debug, Clone)]
pub struct RelaxedSuccessorGenerator {
    catalogue: Rc<ActionCatalogue>,
}

impl RelaxedSuccessorGenerator {
    pub fn new(catalogue: Rc<ActionCatalogue>) -> Self {
        Self { catalogue }
    }
}

impl SuccessorGenerator for RelaxedSuccessorGenerator {
    fn catalogue(&self) -> &ActionCatalogue {
        &self.catalogue
    }

    fn is_applicable(&self, state: &State, action: &GroundedAction) -> bool {
        action
            .preconditions()
            .iter()
            .filter(|precondition| !precondition.is_negated())
            .all(|precondition| state.contains(precondition.atom()))
    }

    fn generate_successor(&self, state: &State, action: &GroundedAction) -> State {
        state.apply_effects(action.add_effects())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{grounder::Grounder, Environment, Task};
    use crate::test_utils::*;

    #[test]
    fn deletes_are_ignored() {
        let task = Task::from_text(BLOCKSWORLD_TEXT).unwrap();
        let catalogue = Rc::new(Grounder::new().ground(&task).unwrap());
        let generator = RelaxedSuccessorGenerator::new(catalogue.clone());

        let index = catalogue
            .iter()
            .position(|action| action.to_string() == "MoveToTable(C,A)")
            .unwrap();
        let initial = task.initial_state();
        let successor = generator.generate_successor(initial, &catalogue[index]);
        assert_eq!(successor.len(), initial.len() + 2);
        assert!(initial.atoms().is_subset(successor.atoms()));
    }

    #[test]
    fn negative_preconditions_are_ignored() {
        let task = Task::from_text(DOORS_TEXT).unwrap();
        let catalogue = Rc::new(Grounder::new().ground(&task).unwrap());
        let generator = RelaxedSuccessorGenerator::new(catalogue.clone());

        // OpenDoor(D1) requires !IsOpen(D1), which the relaxation drops
        let applicable = generator.applicable_actions(task.initial_state());
        assert_eq!(applicable.len(), 3);
        assert!(applicable
            .iter()
            .any(|&index| catalogue[index].to_string() == "OpenDoor(D1)"));
    }
}
