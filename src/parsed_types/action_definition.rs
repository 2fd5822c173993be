//! Provides action definitions.

use crate::parsed_types::{ActionName, Literal, Name};

/// An action definition, i.e. the header `Name(params)` followed by its
/// `Preconditions:` and `Effects:` lines.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionDefinition {
    name: ActionName,
    parameters: Vec<Name>,
    preconditions: Vec<Literal>,
    effects: Vec<Literal>,
}

impl ActionDefinition {
    pub const fn new(
        name: ActionName,
        parameters: Vec<Name>,
        preconditions: Vec<Literal>,
        effects: Vec<Literal>,
    ) -> Self {
        Self {
            name,
            parameters,
            preconditions,
            effects,
        }
    }

    pub const fn name(&self) -> &ActionName {
        &self.name
    }

    pub fn parameters(&self) -> &[Name] {
        self.parameters.as_slice()
    }

    pub fn preconditions(&self) -> &[Literal] {
        self.preconditions.as_slice()
    }

    pub fn effects(&self) -> &[Literal] {
        self.effects.as_slice()
    }
}
