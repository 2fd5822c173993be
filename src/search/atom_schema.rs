use crate::parsed_types::{Atom as ParsedAtom, Name, PredicateName};
use crate::search::{Atom, Negatable, PlannerError, Symbol};
use itertools::Itertools;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;

/// If the argument is a constant, then the value is the symbol itself,
/// otherwise the index is the index of the parameter in the action schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaArgument {
    Constant(Symbol),
    Free(usize),
}

impl SchemaArgument {
    /// Classifies a written argument. Declared parameters become
    /// [`SchemaArgument::Free`]; anything else is a constant and has to name
    /// a declared symbol.
    pub fn new(
        action: &Name,
        argument: &Name,
        parameter_table: &HashMap<Name, usize>,
        symbols: &HashSet<Symbol>,
    ) -> Result<Self, PlannerError> {
        if let Some(&index) = parameter_table.get(argument) {
            return Ok(Self::Free(index));
        }
        if symbols.contains(argument) {
            Ok(Self::Constant(*argument))
        } else {
            Err(PlannerError::MalformedSchema {
                action: action.to_string(),
                argument: argument.to_string(),
            })
        }
    }

    pub fn is_constant(&self) -> bool {
        match self {
            Self::Constant(_) => true,
            Self::Free(_) => false,
        }
    }

    /// Substitutes the argument under `assignment`, which maps parameter
    /// indices to symbols.
    #[inline(always)]
    pub fn ground(&self, assignment: &[Symbol]) -> Symbol {
        match self {
            Self::Constant(symbol) => *symbol,
            Self::Free(index) => assignment[*index],
        }
    }
}

/// An atom inside an action schema, its arguments may refer to the schema's
/// parameters.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AtomSchema {
    predicate: PredicateName,
    arguments: Vec<SchemaArgument>,
}

/// An ungrounded condition: an [`AtomSchema`] together with its polarity.
pub type Condition = Negatable<AtomSchema>;

impl AtomSchema {
    pub fn new(predicate: PredicateName, arguments: Vec<SchemaArgument>) -> Self {
        Self {
            predicate,
            arguments,
        }
    }

    pub fn from_parsed(
        action: &Name,
        atom: &ParsedAtom,
        parameter_table: &HashMap<Name, usize>,
        symbols: &HashSet<Symbol>,
    ) -> Result<Self, PlannerError> {
        let arguments = atom
            .values()
            .iter()
            .map(|arg| SchemaArgument::new(action, arg, parameter_table, symbols))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            predicate: *atom.predicate_name(),
            arguments,
        })
    }

    #[inline(always)]
    pub fn predicate(&self) -> PredicateName {
        self.predicate
    }

    #[inline(always)]
    pub fn arguments(&self) -> &[SchemaArgument] {
        &self.arguments
    }

    pub fn ground(&self, assignment: &[Symbol]) -> Atom {
        Atom::new(
            self.predicate,
            self.arguments
                .iter()
                .map(|argument| argument.ground(assignment))
                .collect(),
        )
    }
}

impl Negatable<AtomSchema> {
    /// Grounds the condition, keeping its polarity.
    pub fn ground(&self, assignment: &[Symbol]) -> Negatable<Atom> {
        self.map(|schema| schema.ground(assignment))
    }

    #[inline(always)]
    pub fn predicate(&self) -> PredicateName {
        self.underlying().predicate()
    }

    #[inline(always)]
    pub fn arguments(&self) -> &[SchemaArgument] {
        self.underlying().arguments()
    }
}

impl Display for AtomSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arguments = self.arguments.iter().map(|argument| match argument {
            SchemaArgument::Constant(symbol) => symbol.to_string(),
            SchemaArgument::Free(index) => format!("?{}", index),
        });
        write!(f, "{}({})", self.predicate, arguments.format(","))
    }
}
