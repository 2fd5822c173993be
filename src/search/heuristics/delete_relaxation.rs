use crate::search::{
    heuristics::{GoalCounting, Heuristic, HeuristicValue},
    search_engines::{AStar, SearchResult},
    successor_generators::RelaxedSuccessorGenerator,
    ActionCatalogue, Goal, State,
};
use std::rc::Rc;

/// Estimates the remaining cost by solving the delete relaxation of the task
/// from the evaluated state: delete effects and negative conditions are
/// dropped, and the relaxed task is solved by a nested A* guided by goal
/// counting. The value is the length of the relaxed plan, or infinity when
/// even the relaxed goal is unreachable.
///
/// The nested search is not optimal, so the estimate is not admissible in
/// general.
#[derive(Debug)]
pub struct DeleteRelaxation {
    search: AStar<RelaxedSuccessorGenerator, GoalCounting>,
}

impl DeleteRelaxation {
    pub fn new(catalogue: Rc<ActionCatalogue>) -> Self {
        Self {
            search: AStar::new(RelaxedSuccessorGenerator::new(catalogue), GoalCounting::new())
                .with_logging(false),
        }
    }
}

impl Heuristic for DeleteRelaxation {
    fn evaluate(&mut self, state: &State, goal: &Goal) -> HeuristicValue {
        let relaxed_goal = Goal::new(
            goal.conditions()
                .iter()
                .filter(|condition| !condition.is_negated())
                .cloned(),
        );
        if relaxed_goal.is_satisfied(state) {
            return (0.).into();
        }

        match self.search.search(state, &relaxed_goal).0 {
            SearchResult::Success(plan) => (plan.len() as f64).into(),
            _ => f64::INFINITY.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;
    use crate::search::{grounder::Grounder, Environment, Task};
    use crate::test_utils::*;

    fn heuristic_for(task: &Task) -> DeleteRelaxation {
        DeleteRelaxation::new(Rc::new(Grounder::new().ground(task).unwrap()))
    }

    #[test]
    fn blocksworld_initial_state() {
        let task = Task::from_text(BLOCKSWORLD_TEXT).unwrap();
        let mut heuristic = heuristic_for(&task);
        let h = heuristic.evaluate(task.initial_state(), task.goal());
        assert!(h > OrderedFloat(0.));
        assert!(h <= OrderedFloat(3.));
    }

    #[test]
    fn zero_at_the_goal() {
        let task = Task::from_text(BLOCKSWORLD_TEXT).unwrap();
        let mut heuristic = heuristic_for(&task);
        let goal_state: State = task
            .goal()
            .conditions()
            .iter()
            .map(|condition| condition.atom().clone())
            .collect();
        assert_eq!(heuristic.evaluate(&goal_state, task.goal()), OrderedFloat(0.));
    }

    #[test]
    fn unreachable_goal_is_infinite() {
        let task = Task::from_text(UNSOLVABLE_TEXT).unwrap();
        let mut heuristic = heuristic_for(&task);
        let h = heuristic.evaluate(task.initial_state(), task.goal());
        assert!(h.0.is_infinite());
    }

    #[test]
    fn negative_goals_are_relaxed() {
        let task = Task::from_text(DOORS_TEXT).unwrap();
        let mut heuristic = heuristic_for(&task);
        // Only OpenDoor(D2) is needed once !IsOpen(D1) is dropped
        assert_eq!(
            heuristic.evaluate(task.initial_state(), task.goal()),
            OrderedFloat(1.)
        );
    }

    #[test]
    fn repeated_evaluations_agree() {
        let task = Task::from_text(GRIPPER_TEXT).unwrap();
        let mut heuristic = heuristic_for(&task);
        let first = heuristic.evaluate(task.initial_state(), task.goal());
        let second = heuristic.evaluate(task.initial_state(), task.goal());
        assert_eq!(first, second);
        assert!(first >= OrderedFloat(0.));
    }
}
