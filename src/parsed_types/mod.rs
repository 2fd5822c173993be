//! Syntax tree of the line-oriented domain format and of plan files. These
//! types are produced by [`crate::parsers`] and consumed by
//! [`crate::search::Task`].

mod action_definition;
mod action_name;
mod atom;
mod domain;
mod literal;
mod name;
mod plan;
mod plan_step;
mod predicate_name;

pub use action_definition::ActionDefinition;
pub use action_name::ActionName;
pub use atom::Atom;
pub use domain::Domain;
pub use literal::Literal;
pub use name::Name;
pub use plan::Plan;
pub use plan_step::PlanStep;
pub use predicate_name::PredicateName;
