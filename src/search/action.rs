use crate::parsed_types::ActionName;
use crate::search::{GroundedCondition, Symbol};
use itertools::Itertools;
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

/// An action schema instantiated with concrete symbols, e.g.
/// `Move(C,A,Table)`, together with its grounded preconditions and effects.
/// Two grounded actions are the same action when their names and arguments
/// agree.
#[derive(Debug, Clone)]
pub struct GroundedAction {
    name: ActionName,
    arguments: Vec<Symbol>,
    preconditions: Vec<GroundedCondition>,
    effects: Vec<GroundedCondition>,
}

impl GroundedAction {
    /// Creates a grounded action. Duplicate preconditions and effects are
    /// dropped, keeping the first occurrence.
    pub fn new(
        name: ActionName,
        arguments: Vec<Symbol>,
        preconditions: impl IntoIterator<Item = GroundedCondition>,
        effects: impl IntoIterator<Item = GroundedCondition>,
    ) -> Self {
        Self {
            name,
            arguments,
            preconditions: preconditions.into_iter().unique().collect(),
            effects: effects.into_iter().unique().collect(),
        }
    }

    pub fn name(&self) -> &ActionName {
        &self.name
    }

    pub fn arguments(&self) -> &[Symbol] {
        &self.arguments
    }

    pub fn preconditions(&self) -> &[GroundedCondition] {
        &self.preconditions
    }

    pub fn effects(&self) -> &[GroundedCondition] {
        &self.effects
    }

    /// Iterates over the atoms added by this action.
    pub fn add_effects(&self) -> impl Iterator<Item = &GroundedCondition> + Clone {
        self.effects.iter().filter(|effect| !effect.is_negated())
    }

    /// Iterates over the atoms deleted by this action.
    pub fn delete_effects(&self) -> impl Iterator<Item = &GroundedCondition> + Clone {
        self.effects.iter().filter(|effect| effect.is_negated())
    }
}

impl PartialEq for GroundedAction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.arguments == other.arguments
    }
}

impl Eq for GroundedAction {}

impl Hash for GroundedAction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.arguments.hash(state);
    }
}

impl Display for GroundedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.arguments.iter().join(","))
    }
}

/// Every grounded action of a task, in grounding order. Search nodes refer to
/// actions by their position in the catalogue, so the catalogue is never
/// modified once built. It is shared between the main search and the
/// relaxed searches of the delete-relaxation heuristic.
#[derive(Debug, Clone, Default)]
pub struct ActionCatalogue {
    actions: Vec<GroundedAction>,
}

impl ActionCatalogue {
    pub fn new(actions: Vec<GroundedAction>) -> Self {
        Self { actions }
    }

    pub fn get(&self, index: usize) -> Option<&GroundedAction> {
        self.actions.get(index)
    }

    /// Finds an action by name and arguments.
    pub fn find(&self, name: &ActionName, arguments: &[Symbol]) -> Option<usize> {
        self.actions
            .iter()
            .position(|action| action.name() == name && action.arguments() == arguments)
    }
}

impl Deref for ActionCatalogue {
    type Target = [GroundedAction];

    fn deref(&self) -> &Self::Target {
        &self.actions
    }
}

impl Display for ActionCatalogue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, action) in self.actions.iter().enumerate() {
            writeln!(
                f,
                "{}: {} pre [{}] eff [{}]",
                index,
                action,
                action.preconditions().iter().join(", "),
                action.effects().iter().join(", ")
            )?;
        }
        Ok(())
    }
}
