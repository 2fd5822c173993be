//! This module implements A* over the grounded state space.

use crate::search::{
    heuristics::{Heuristic, HeuristicValue},
    search_engines::{
        OpenList, SearchLimits, SearchNodeStatus, SearchResult, SearchSpace, SearchStatistics,
        TerminationCondition,
    },
    states::State,
    successor_generators::SuccessorGenerator,
    Goal, Plan,
};
use ordered_float::OrderedFloat;
use tracing::trace;

/// A* search with unit action costs. The engine is generic over how
/// successors are generated and how states are evaluated; the
/// delete-relaxation heuristic runs its own instance over the relaxed
/// successor generator.
///
/// The search stops as soon as a generated successor satisfies the goal, so
/// the plan is optimal for heuristics that are zero everywhere but only a
/// good plan otherwise.
#[derive(Debug)]
pub struct AStar<G: SuccessorGenerator, H: Heuristic> {
    generator: G,
    heuristic: H,
    limits: SearchLimits,
    log_progress: bool,
}

impl<G: SuccessorGenerator, H: Heuristic> AStar<G, H> {
    pub fn new(generator: G, heuristic: H) -> Self {
        Self {
            generator,
            heuristic,
            limits: SearchLimits::unbounded(),
            log_progress: true,
        }
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Turns periodic progress reports on or off.
    pub fn with_logging(mut self, log_progress: bool) -> Self {
        self.log_progress = log_progress;
        self
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn search(&mut self, initial_state: &State, goal: &Goal) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new(self.log_progress);
        let mut termination_condition = TerminationCondition::new(self.limits, self.log_progress);
        let result = self.run(
            initial_state,
            goal,
            &mut statistics,
            &mut termination_condition,
        );
        statistics.finalise_search();
        termination_condition.finalise();
        (result, statistics)
    }

    fn run(
        &mut self,
        initial_state: &State,
        goal: &Goal,
        statistics: &mut SearchStatistics,
        termination_condition: &mut TerminationCondition,
    ) -> SearchResult {
        if goal.is_satisfied(initial_state) {
            return SearchResult::Success(Plan::empty());
        }

        let mut search_space = SearchSpace::new(initial_state.clone());
        let mut open_list = OpenList::new();

        let root_h = self.heuristic.evaluate(initial_state, goal);
        statistics.increment_evaluated_nodes();
        if let Some(result) = termination_condition.check_resources() {
            return result;
        }
        let root_key = search_space.root_key().clone();
        let root_node = search_space.get_root_node_mut();
        if is_deadend(root_h) {
            root_node.mark_as_deadend(OrderedFloat(0.), root_h, None);
            statistics.increment_deadend_nodes();
            return SearchResult::ProvablyUnsolvable;
        }
        root_node.open(OrderedFloat(0.), root_h, None);
        open_list.push(root_key, root_h);

        while let Some((key, f)) = open_list.pop() {
            if let Some(result) = termination_condition.should_terminate(statistics.expanded_nodes())
            {
                return result;
            }

            let Some(node) = search_space.get_node_mut(&key) else {
                continue;
            };
            // Stale entries of already expanded states are skipped lazily
            if node.get_status() != SearchNodeStatus::Open {
                continue;
            }
            node.close();
            let g = node.get_g();
            statistics.increment_expanded_nodes();
            termination_condition.log_if_needed();
            trace!(state = %key, g = g.0, f = f.0, "expanding");

            let Some(state) = search_space.get_state(&key).cloned() else {
                continue;
            };

            let mut generated_actions = 0;
            for (index, action) in self.generator.catalogue().iter().enumerate() {
                if !self.generator.is_applicable(&state, action) {
                    continue;
                }
                generated_actions += 1;

                let successor = self.generator.generate_successor(&state, action);
                let successor_key = successor.key();
                let successor_g = g + 1.;

                let known_h = match search_space.get_node(&successor_key) {
                    None => None,
                    Some(node) => match node.get_status() {
                        SearchNodeStatus::Closed | SearchNodeStatus::Deadend => continue,
                        _ if node.get_g() <= successor_g => continue,
                        SearchNodeStatus::New => None,
                        SearchNodeStatus::Open => Some(node.get_h()),
                    },
                };

                let is_goal = goal.is_satisfied(&successor);
                let h = match known_h {
                    Some(h) => {
                        statistics.increment_improved_nodes();
                        h
                    }
                    None => {
                        statistics.increment_generated_nodes(1);
                        if is_goal {
                            OrderedFloat(0.)
                        } else {
                            let h = self.heuristic.evaluate(&successor, goal);
                            statistics.increment_evaluated_nodes();
                            if let Some(result) = termination_condition.check_resources() {
                                statistics.increment_generated_actions(generated_actions);
                                return result;
                            }
                            h
                        }
                    }
                };

                let parent = Some((index, key.clone()));
                let successor_node = search_space.insert_or_get_node(successor_key.clone(), successor);
                if is_deadend(h) {
                    successor_node.mark_as_deadend(successor_g, h, parent);
                    statistics.increment_deadend_nodes();
                    continue;
                }
                successor_node.open(successor_g, h, parent);

                if is_goal {
                    statistics.increment_generated_actions(generated_actions);
                    let plan = search_space
                        .extract_plan(&successor_key)
                        .into_iter()
                        .map(|index| self.generator.catalogue()[index].clone())
                        .collect();
                    return SearchResult::Success(Plan::new(plan));
                }
                open_list.push(successor_key, successor_g + h);
            }
            statistics.increment_generated_actions(generated_actions);
        }

        SearchResult::ProvablyUnsolvable
    }
}

fn is_deadend(h: HeuristicValue) -> bool {
    h.0.is_infinite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{
        grounder::Grounder,
        heuristics::{DeleteRelaxation, GoalCounting, HeuristicName, ZeroHeuristic},
        successor_generators::FullSuccessorGenerator,
        validate, ActionCatalogue, Environment, Task,
    };
    use crate::test_utils::*;
    use std::rc::Rc;
    use std::time::Duration;

    /// Zero everywhere, but slow to compute.
    #[derive(Debug)]
    struct SlowHeuristic {
        delay: Duration,
    }

    impl Heuristic for SlowHeuristic {
        fn evaluate(&mut self, _state: &State, _goal: &Goal) -> HeuristicValue {
            std::thread::sleep(self.delay);
            OrderedFloat(0.)
        }
    }

    fn ground(text: &str) -> (Task, Rc<ActionCatalogue>) {
        let task = Task::from_text(text).unwrap();
        let catalogue = Rc::new(Grounder::new().ground(&task).unwrap());
        (task, catalogue)
    }

    fn solve<H: Heuristic>(task: &Task, catalogue: &Rc<ActionCatalogue>, heuristic: H) -> Plan {
        let mut engine = AStar::new(FullSuccessorGenerator::new(catalogue.clone()), heuristic)
            .with_logging(false);
        match engine.search(task.initial_state(), task.goal()) {
            (SearchResult::Success(plan), _) => plan,
            (result, _) => panic!("no plan found: {:?}", result),
        }
    }

    #[test]
    fn blocksworld_uniform_cost_is_optimal() {
        let (task, catalogue) = ground(BLOCKSWORLD_TEXT);
        let plan = solve(&task, &catalogue, ZeroHeuristic::new());
        assert_eq!(plan.len(), 3);
        // Move(C,A,Table) precedes MoveToTable(C,A) in the catalogue
        assert_eq!(
            plan.to_string(),
            "Move(C,A,Table)\nMove(B,Table,C)\nMove(A,Table,B)"
        );
        assert!(validate(&plan, &task).is_ok());
    }

    #[test]
    fn blocksworld_all_heuristics_reach_the_goal() {
        let (task, catalogue) = ground(BLOCKSWORLD_TEXT);
        for name in [
            HeuristicName::Zero,
            HeuristicName::GoalCount,
            HeuristicName::DeleteRelaxation,
        ] {
            let plan = solve(&task, &catalogue, name.create(&catalogue));
            let mut state = task.initial_state().clone();
            for action in plan.steps() {
                assert!(state.is_applicable(action));
                state = state.apply_effects(action.effects());
            }
            assert!(task.goal().is_satisfied(&state), "{} failed", name);
            assert!(validate(&plan, &task).is_ok());
        }
    }

    #[test]
    fn gripper_uniform_cost_is_optimal() {
        let (task, catalogue) = ground(GRIPPER_TEXT);
        let plan = solve(&task, &catalogue, ZeroHeuristic::new());
        assert_eq!(plan.len(), 5);
        assert!(validate(&plan, &task).is_ok());
    }

    #[test]
    fn gripper_delete_relaxation() {
        let (task, catalogue) = ground(GRIPPER_TEXT);
        let plan = solve(&task, &catalogue, DeleteRelaxation::new(catalogue.clone()));
        assert!(plan.len() >= 5);
        assert!(validate(&plan, &task).is_ok());
    }

    #[test]
    fn search_is_deterministic() {
        let (task, catalogue) = ground(GRIPPER_TEXT);
        let first = solve(&task, &catalogue, GoalCounting::new());
        let second = solve(&task, &catalogue, GoalCounting::new());
        assert_eq!(first, second);
    }

    #[test]
    fn negative_preconditions_and_goals() {
        let (task, catalogue) = ground(DOORS_TEXT);
        let plan = solve(&task, &catalogue, ZeroHeuristic::new());
        assert_eq!(plan.len(), 2);
        assert!(validate(&plan, &task).is_ok());

        let plan = solve(&task, &catalogue, DeleteRelaxation::new(catalogue.clone()));
        assert!(validate(&plan, &task).is_ok());
    }

    #[test]
    fn initial_goal_gives_empty_plan() {
        let (mut task, catalogue) = ground(BLOCKSWORLD_TEXT);
        task.goal = Goal::new(vec![]);
        let plan = solve(&task, &catalogue, GoalCounting::new());
        assert!(plan.is_empty());
    }

    #[test]
    fn exhausted_search_is_unsolvable() {
        let (task, catalogue) = ground(UNSOLVABLE_TEXT);
        let mut engine = AStar::new(
            FullSuccessorGenerator::new(catalogue.clone()),
            ZeroHeuristic::new(),
        )
        .with_logging(false);
        let (result, statistics) = engine.search(task.initial_state(), task.goal());
        assert_eq!(result, SearchResult::ProvablyUnsolvable);
        // Light(A) and the dark state
        assert_eq!(statistics.expanded_nodes(), 2);
    }

    #[test]
    fn relaxed_deadend_at_the_root() {
        let (task, catalogue) = ground(UNSOLVABLE_TEXT);
        let mut engine = AStar::new(
            FullSuccessorGenerator::new(catalogue.clone()),
            DeleteRelaxation::new(catalogue.clone()),
        )
        .with_logging(false);
        let (result, statistics) = engine.search(task.initial_state(), task.goal());
        assert_eq!(result, SearchResult::ProvablyUnsolvable);
        assert_eq!(statistics.expanded_nodes(), 0);
        assert_eq!(statistics.deadend_nodes(), 1);
    }

    #[test]
    fn expansion_limit_stops_the_search() {
        let (task, catalogue) = ground(BLOCKSWORLD_TEXT);
        let limits = SearchLimits {
            expansion_limit: Some(1),
            ..Default::default()
        };
        let mut engine = AStar::new(
            FullSuccessorGenerator::new(catalogue.clone()),
            ZeroHeuristic::new(),
        )
        .with_limits(limits)
        .with_logging(false);
        let (result, statistics) = engine.search(task.initial_state(), task.goal());
        assert_eq!(result, SearchResult::ExpansionLimitExceeded);
        assert_eq!(statistics.expanded_nodes(), 1);
    }

    #[test]
    fn time_limit_is_checked_between_evaluations() {
        let (task, catalogue) = ground(BLOCKSWORLD_TEXT);
        let limits = SearchLimits {
            time_limit: Some(Duration::from_millis(50)),
            ..Default::default()
        };
        let mut engine = AStar::new(
            FullSuccessorGenerator::new(catalogue.clone()),
            SlowHeuristic {
                delay: Duration::from_millis(30),
            },
        )
        .with_limits(limits)
        .with_logging(false);
        let (result, statistics) = engine.search(task.initial_state(), task.goal());
        assert_eq!(result, SearchResult::TimeLimitExceeded);
        // The root has five successors, the search stops before evaluating them all
        assert!(statistics.evaluated_nodes() <= 2);
    }
}
