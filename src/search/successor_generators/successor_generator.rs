use crate::search::{ActionCatalogue, GroundedAction, State};
use std::fmt::Debug;

/// A successor generator decides which grounded actions apply in a state and
/// what state results from applying them. Actions are identified by their
/// index in the shared [`ActionCatalogue`].
pub trait SuccessorGenerator: Debug {
    fn catalogue(&self) -> &ActionCatalogue;

    fn is_applicable(&self, state: &State, action: &GroundedAction) -> bool;

    /// Generates the successor of `state` under `action`. The action is
    /// assumed to be applicable.
    fn generate_successor(&self, state: &State, action: &GroundedAction) -> State;

    /// Indices of all applicable actions, in catalogue order.
    fn applicable_actions(&self, state: &State) -> Vec<usize> {
        self.catalogue()
            .iter()
            .enumerate()
            .filter(|(_, action)| self.is_applicable(state, action))
            .map(|(index, _)| index)
            .collect()
    }
}
