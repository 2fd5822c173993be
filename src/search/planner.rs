use crate::search::{
    grounder::Grounder,
    search_engines::{AStar, SearchResult, SearchStatistics},
    successor_generators::FullSuccessorGenerator,
    ActionCatalogue, Environment, Plan, PlannerConfig, PlannerError,
};
use std::rc::Rc;
use tracing::info;

/// Grounds a task once and searches it with the configured heuristic.
///
/// ## Example
/// ```
/// # use eagerground::search::{Planner, PlannerConfig, Task, heuristics::HeuristicName};
/// let task = Task::from_text(
///     "Symbols: A, B
///      Initial conditions: At(A)
///      Goal conditions: At(B)
///      Actions:
///          Go(from, to)
///          Preconditions: At(from)
///          Effects: At(to), !At(from)",
/// )
/// .unwrap();
/// let config = PlannerConfig {
///     heuristic: HeuristicName::GoalCount,
///     ..Default::default()
/// };
/// let planner = Planner::new(&task, config).unwrap();
/// assert_eq!(planner.catalogue().len(), 2);
/// assert_eq!(planner.solve(&task).unwrap().to_string(), "Go(A,B)");
/// ```
#[derive(Debug)]
pub struct Planner {
    config: PlannerConfig,
    catalogue: Rc<ActionCatalogue>,
}

impl Planner {
    pub fn new(environment: &impl Environment, config: PlannerConfig) -> Result<Self, PlannerError> {
        let catalogue = Grounder::with_limit(config.grounding_limit).ground(environment)?;
        Ok(Self {
            config,
            catalogue: Rc::new(catalogue),
        })
    }

    pub fn catalogue(&self) -> &ActionCatalogue {
        &self.catalogue
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Runs A* from the initial state of `environment`, which must be the
    /// environment the planner was grounded for.
    pub fn search(&self, environment: &impl Environment) -> (SearchResult, SearchStatistics) {
        info!(heuristic = %self.config.heuristic, "starting planner");
        let generator = FullSuccessorGenerator::new(self.catalogue.clone());
        let heuristic = self.config.heuristic.create(&self.catalogue);
        let mut engine = AStar::new(generator, heuristic).with_limits(self.config.search_limits());
        engine.search(environment.initial_state(), environment.goal())
    }

    pub fn solve(&self, environment: &impl Environment) -> Result<Plan, PlannerError> {
        match self.search(environment).0 {
            SearchResult::Success(plan) => {
                info!(plan_length = plan.len(), "plan found");
                Ok(plan)
            }
            result => Err(PlannerError::PlanNotFound(result)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{heuristics::HeuristicName, validate, Task};
    use crate::test_utils::*;

    fn config(heuristic: HeuristicName) -> PlannerConfig {
        PlannerConfig {
            heuristic,
            ..Default::default()
        }
    }

    #[test]
    fn blocksworld_end_to_end() {
        let task = Task::from_text(BLOCKSWORLD_TEXT).unwrap();
        let planner = Planner::new(&task, PlannerConfig::default()).unwrap();
        assert_eq!(planner.catalogue().len(), 36);

        let plan = planner.solve(&task).unwrap();
        assert!(validate(&plan, &task).is_ok());
        assert_eq!(plan.to_string(), planner.solve(&task).unwrap().to_string());
    }

    #[test]
    fn unsolvable_is_an_error() {
        let task = Task::from_text(UNSOLVABLE_TEXT).unwrap();
        for heuristic in [HeuristicName::Zero, HeuristicName::DeleteRelaxation] {
            let planner = Planner::new(&task, config(heuristic)).unwrap();
            assert!(matches!(
                planner.solve(&task),
                Err(PlannerError::PlanNotFound(SearchResult::ProvablyUnsolvable))
            ));
        }
    }

    #[test]
    fn grounding_limit_from_config() {
        let task = Task::from_text(GRIPPER_TEXT).unwrap();
        let config = PlannerConfig {
            grounding_limit: Some(100),
            ..Default::default()
        };
        assert!(matches!(
            Planner::new(&task, config),
            Err(PlannerError::GroundingLimitExceeded {
                limit: 100,
                required: 270
            })
        ));
    }

    #[test]
    fn expansion_limit_from_config() {
        let task = Task::from_text(GRIPPER_TEXT).unwrap();
        let config = PlannerConfig {
            heuristic: HeuristicName::Zero,
            expansion_limit: Some(2),
            ..Default::default()
        };
        let planner = Planner::new(&task, config).unwrap();
        assert!(matches!(
            planner.solve(&task),
            Err(PlannerError::PlanNotFound(SearchResult::ExpansionLimitExceeded))
        ));
    }
}
