use crate::search::{ActionSchema, Goal, State, Symbol};

/// Everything the planner needs to know about a problem. [`crate::search::Task`]
/// is the implementation loaded from domain files, tests and embedding
/// applications may provide their own.
pub trait Environment {
    /// The action schemas, in declaration order. Grounding follows this order.
    fn action_schemas(&self) -> &[ActionSchema];

    /// The symbol universe, in declaration order.
    fn symbols(&self) -> &[Symbol];

    fn initial_state(&self) -> &State;

    fn goal(&self) -> &Goal;
}
