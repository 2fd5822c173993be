mod astar;
mod open_list;
mod search_engine;
mod search_node;
mod search_space;
mod search_statistics;
mod termination_condition;

pub use astar::AStar;
pub use open_list::OpenList;
pub use search_engine::SearchResult;
pub use search_node::{SearchNode, SearchNodeStatus};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use termination_condition::{SearchLimits, TerminationCondition};
