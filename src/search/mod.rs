mod action;
mod action_schema;
mod atom;
mod atom_schema;
mod environment;
mod error;
mod goal;
pub mod grounder;
pub mod heuristics;
mod negatable;
mod plan;
mod planner;
mod planner_config;
pub mod search_engines;
pub mod states;
pub mod successor_generators;
mod task;
mod validate;
mod verbosity;

pub use action::{ActionCatalogue, GroundedAction};
pub use action_schema::ActionSchema;
pub use atom::{Atom, GroundedCondition, Symbol};
pub use atom_schema::{AtomSchema, Condition, SchemaArgument};
pub use environment::Environment;
pub use error::PlannerError;
pub use goal::Goal;
pub use grounder::Grounder;
pub use negatable::Negatable;
pub use plan::Plan;
pub use planner::Planner;
pub use planner_config::PlannerConfig;
pub use states::{State, StateKey};
pub use task::Task;
pub use validate::validate;
pub use verbosity::Verbosity;
