use crate::parsed_types::{ActionDefinition, ActionName, Name};
use crate::search::{AtomSchema, Condition, Negatable, PlannerError, Symbol};
use itertools::Itertools;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;

/// A parameterized action, e.g. `Move(x,from,to)`. Immutable once the task
/// has been loaded.
#[derive(Debug, Clone)]
pub struct ActionSchema {
    name: ActionName,
    index: usize,
    parameters: Vec<Name>,
    preconditions: Vec<Condition>,
    effects: Vec<Condition>,
}

impl ActionSchema {
    pub fn new(
        index: usize,
        action_definition: &ActionDefinition,
        symbols: &HashSet<Symbol>,
    ) -> Result<Self, PlannerError> {
        let name = *action_definition.name();

        let mut parameter_table: HashMap<Name, usize> = HashMap::new();
        for (index, &parameter) in action_definition.parameters().iter().enumerate() {
            if parameter_table.insert(parameter, index).is_some() {
                return Err(PlannerError::DuplicateParameter {
                    action: name.to_string(),
                    parameter: parameter.to_string(),
                });
            }
        }

        let convert = |literals: &[crate::parsed_types::Literal]| {
            literals
                .iter()
                .map(|literal| {
                    AtomSchema::from_parsed(&name, literal.atom(), &parameter_table, symbols)
                        .map(|schema| Negatable::new(literal.is_negated(), schema))
                })
                .collect::<Result<Vec<_>, _>>()
        };
        let preconditions = convert(action_definition.preconditions())?;
        let effects = convert(action_definition.effects())?;

        Ok(Self {
            name,
            index,
            parameters: action_definition.parameters().to_vec(),
            preconditions,
            effects,
        })
    }

    pub fn name(&self) -> &ActionName {
        &self.name
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_ground(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn parameters(&self) -> &[Name] {
        &self.parameters
    }

    pub fn preconditions(&self) -> &[Condition] {
        &self.preconditions
    }

    pub fn effects(&self) -> &[Condition] {
        &self.effects
    }
}

impl PartialEq for ActionSchema {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Display for ActionSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}({})", self.name, self.parameters.iter().join(","))?;
        writeln!(
            f,
            "  Preconditions: {}",
            self.preconditions.iter().join(", ")
        )?;
        write!(f, "  Effects: {}", self.effects.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::Domain;
    use crate::parsers::Parser;
    use crate::search::SchemaArgument;
    use crate::test_utils::*;

    fn schemas(text: &str) -> Result<Vec<ActionSchema>, PlannerError> {
        let domain = Domain::from_str(text).unwrap();
        let symbols: HashSet<Symbol> = domain.symbols().iter().copied().collect();
        domain
            .actions()
            .iter()
            .enumerate()
            .map(|(index, action)| ActionSchema::new(index, action, &symbols))
            .collect()
    }

    #[test]
    fn blocksworld_move_to_table() {
        let schemas = schemas(BLOCKSWORLD_TEXT).unwrap();
        let move_to_table = &schemas[1];
        assert_eq!(move_to_table.name(), &ActionName::from_str("MoveToTable"));
        assert_eq!(move_to_table.arity(), 2);
        assert_eq!(move_to_table.preconditions().len(), 2);
        assert_eq!(move_to_table.effects().len(), 3);
        assert_eq!(
            move_to_table.effects()[0].arguments(),
            &[
                SchemaArgument::Free(0),
                SchemaArgument::Constant(Name::new("Table"))
            ]
        );
        assert!(move_to_table.effects()[1].is_negated());
    }

    #[test]
    fn undeclared_constant_is_rejected() {
        let text = r#"
Symbols: A
Initial conditions: Clear(A)
Goal conditions: Held(A)
Actions:
    Pick(x)
    Preconditions: Clear(x), Clear(Floor)
    Effects: Held(x)
"#;
        match schemas(text) {
            Err(PlannerError::MalformedSchema { action, argument }) => {
                assert_eq!(action, "Pick");
                assert_eq!(argument, "Floor");
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn duplicate_parameter_is_rejected() {
        let text = r#"
Symbols: A
Initial conditions: Clear(A)
Goal conditions: Clear(A)
Actions:
    Swap(x,x)
    Preconditions: Clear(x)
    Effects: Clear(x)
"#;
        assert!(matches!(
            schemas(text),
            Err(PlannerError::DuplicateParameter { .. })
        ));
    }
}
