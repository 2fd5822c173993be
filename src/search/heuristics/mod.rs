mod delete_relaxation;
mod goal_counting;
mod heuristic;
mod zero_heuristic;

pub use delete_relaxation::DeleteRelaxation;
pub use goal_counting::GoalCounting;
pub use heuristic::{Heuristic, HeuristicName, HeuristicValue, StateHeuristic};
pub use zero_heuristic::ZeroHeuristic;
