//! Contains the [`Domain`] type.

use crate::parsed_types::{ActionDefinition, Literal, Name};

/// The `Domain` type is the top-level type of a domain file. A domain file
/// holds everything needed to plan: the symbol universe, the initial and goal
/// conditions, and the action schemas.
///
/// ## Example
/// ```
/// # use eagerground::parsed_types::*;
/// # use eagerground::parsers::Parser;
/// let input = r#"
/// Symbols: A,B,Table
/// Initial conditions: On(A,Table), On(B,Table), Clear(A), Clear(B)
/// Goal conditions: On(A,B)
/// Actions:
///     Stack(x,y)
///     Preconditions: Clear(x), Clear(y)
///     Effects: On(x,y), !Clear(y)
/// "#;
///
/// let domain = Domain::from_str(input).unwrap();
///
/// assert_eq!(domain.symbols().len(), 3);
/// assert_eq!(domain.initial_conditions().len(), 4);
/// assert_eq!(domain.goal_conditions().len(), 1);
/// assert_eq!(domain.actions().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    /// The symbol universe.
    symbols: Vec<Name>,
    /// Initial literals, negative ones remove facts.
    initial_conditions: Vec<Literal>,
    /// Goal literals.
    goal_conditions: Vec<Literal>,
    /// Action definitions, in file order.
    actions: Vec<ActionDefinition>,
}

impl Domain {
    pub const fn new(
        symbols: Vec<Name>,
        initial_conditions: Vec<Literal>,
        goal_conditions: Vec<Literal>,
        actions: Vec<ActionDefinition>,
    ) -> Self {
        Self {
            symbols,
            initial_conditions,
            goal_conditions,
            actions,
        }
    }

    pub fn symbols(&self) -> &[Name] {
        self.symbols.as_slice()
    }

    pub fn initial_conditions(&self) -> &[Literal] {
        self.initial_conditions.as_slice()
    }

    pub fn goal_conditions(&self) -> &[Literal] {
        self.goal_conditions.as_slice()
    }

    pub fn actions(&self) -> &[ActionDefinition] {
        self.actions.as_slice()
    }
}
