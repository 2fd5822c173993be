use crate::search::heuristics::{DeleteRelaxation, GoalCounting, ZeroHeuristic};
use crate::search::{ActionCatalogue, Goal, State};
use ordered_float::OrderedFloat;
use serde::Deserialize;
use std::fmt::{Debug, Display};
use std::rc::Rc;

/// Heuristic estimate of the remaining cost. `f64::INFINITY` means the goal
/// is unreachable from the evaluated state.
pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic: Debug {
    /// Evaluate the given state with respect to the given goal.
    fn evaluate(&mut self, state: &State, goal: &Goal) -> HeuristicValue;
}

#[derive(clap::ValueEnum, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(help = "The zero heuristic, turning A* into uniform cost search.")]
    Zero,
    #[clap(alias = "goal-counting", help = "The number of unsatisfied goal conditions.")]
    #[serde(alias = "goal-counting")]
    GoalCount,
    #[default]
    #[clap(help = "The length of a plan for the delete relaxation of the task.")]
    DeleteRelaxation,
}

impl HeuristicName {
    pub fn create(&self, catalogue: &Rc<ActionCatalogue>) -> StateHeuristic {
        match self {
            HeuristicName::Zero => StateHeuristic::Zero(ZeroHeuristic::new()),
            HeuristicName::GoalCount => StateHeuristic::GoalCounting(GoalCounting::new()),
            HeuristicName::DeleteRelaxation => {
                StateHeuristic::DeleteRelaxation(DeleteRelaxation::new(catalogue.clone()))
            }
        }
    }
}

impl Display for HeuristicName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HeuristicName::Zero => "zero",
            HeuristicName::GoalCount => "goal-count",
            HeuristicName::DeleteRelaxation => "delete-relaxation",
        };
        f.write_str(name)
    }
}

/// The heuristics the planner can be configured with.
#[derive(Debug)]
pub enum StateHeuristic {
    Zero(ZeroHeuristic),
    GoalCounting(GoalCounting),
    DeleteRelaxation(DeleteRelaxation),
}

impl Heuristic for StateHeuristic {
    fn evaluate(&mut self, state: &State, goal: &Goal) -> HeuristicValue {
        match self {
            StateHeuristic::Zero(heuristic) => heuristic.evaluate(state, goal),
            StateHeuristic::GoalCounting(heuristic) => heuristic.evaluate(state, goal),
            StateHeuristic::DeleteRelaxation(heuristic) => heuristic.evaluate(state, goal),
        }
    }
}
