use crate::search::{
    heuristics::{Heuristic, HeuristicValue},
    Goal, State,
};

#[derive(Clone, Debug, Default)]
pub struct GoalCounting {}

impl GoalCounting {
    pub fn new() -> Self {
        GoalCounting {}
    }
}

impl Heuristic for GoalCounting {
    fn evaluate(&mut self, state: &State, goal: &Goal) -> HeuristicValue {
        (goal.count_unsatisfied(state) as f64).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;
    use crate::search::{Environment, Task};
    use crate::test_utils::*;

    #[test]
    fn goal_counting() {
        let task = Task::from_text(BLOCKSWORLD_TEXT).unwrap();
        let mut heuristic = GoalCounting::new();
        assert_eq!(
            heuristic.evaluate(task.initial_state(), task.goal()),
            OrderedFloat(2.)
        );
    }

    #[test]
    fn negative_goals_count_when_present() {
        let task = Task::from_text(DOORS_TEXT).unwrap();
        let mut heuristic = GoalCounting::new();
        // IsOpen(D2) is missing and IsOpen(D1) should be absent
        assert_eq!(
            heuristic.evaluate(task.initial_state(), task.goal()),
            OrderedFloat(2.)
        );
    }
}
