use crate::search::{
    heuristics::{Heuristic, HeuristicValue},
    Goal, State,
};

#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl Heuristic for ZeroHeuristic {
    fn evaluate(&mut self, _state: &State, _goal: &Goal) -> HeuristicValue {
        (0.).into()
    }
}
