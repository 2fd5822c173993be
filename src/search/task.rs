use crate::parsed_types::{Domain, Literal};
use crate::parsers::{describe_error, describe_position, parse_domain};
use crate::search::{ActionSchema, Atom, Environment, Goal, PlannerError, State, Symbol};
use itertools::Itertools;
use std::collections::HashSet;
use std::fmt::Display;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A planning task loaded from a domain file.
#[derive(Debug, Clone)]
pub struct Task {
    symbols: Vec<Symbol>,
    action_schemas: Vec<ActionSchema>,
    pub initial_state: State,
    pub goal: Goal,
}

impl Task {
    pub fn from_path(domain_path: &Path) -> Result<Self, PlannerError> {
        let domain_text = fs::read_to_string(domain_path).map_err(|source| PlannerError::Io {
            path: domain_path.to_path_buf(),
            source,
        })?;
        Self::from_text(&domain_text)
    }

    pub fn from_text(domain_text: &str) -> Result<Self, PlannerError> {
        let (remainder, domain) =
            parse_domain(domain_text).map_err(|e| PlannerError::Parse(describe_error(&e)))?;
        if !remainder.fragment().is_empty() {
            return Err(PlannerError::Parse(describe_position(
                &remainder,
                "unexpected input",
            )));
        }
        Self::from_domain(&domain)
    }

    pub fn from_domain(domain: &Domain) -> Result<Self, PlannerError> {
        let symbols: Vec<Symbol> = domain.symbols().iter().copied().unique().collect();
        let symbol_set: HashSet<Symbol> = symbols.iter().copied().collect();

        let action_schemas = domain
            .actions()
            .iter()
            .enumerate()
            .map(|(index, action)| ActionSchema::new(index, action, &symbol_set))
            .collect::<Result<Vec<_>, _>>()?;

        let initial_state = Self::build_initial_state(domain.initial_conditions());
        let goal = Goal::from_literals(domain.goal_conditions());

        debug!(
            symbols = symbols.len(),
            action_schemas = action_schemas.len(),
            initial_atoms = initial_state.len(),
            goal_conditions = goal.conditions().len(),
            "loaded task"
        );

        Ok(Self {
            symbols,
            action_schemas,
            initial_state,
            goal,
        })
    }

    /// Positive literals add their atom, negative literals remove it, in file
    /// order.
    fn build_initial_state(literals: &[Literal]) -> State {
        let mut state = State::default();
        for literal in literals {
            let atom = Atom::new(*literal.atom().predicate_name(), literal.atom().to_vec());
            if literal.is_negated() {
                state.remove(&atom);
            } else {
                state.insert(atom);
            }
        }
        state
    }
}

impl Environment for Task {
    fn action_schemas(&self) -> &[ActionSchema] {
        &self.action_schemas
    }

    fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    fn initial_state(&self) -> &State {
        &self.initial_state
    }

    fn goal(&self) -> &Goal {
        &self.goal
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Symbols: {}", self.symbols.iter().join(","))?;
        writeln!(f, "Initial conditions: {}", self.initial_state)?;
        writeln!(f, "Goal conditions: {}", self.goal)?;
        writeln!(f, "Actions:")?;
        for schema in &self.action_schemas {
            writeln!(f, "{}", schema)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::PredicateName;
    use crate::test_utils::*;
    use std::io::Write;

    #[test]
    fn blocksworld() {
        let task = Task::from_text(BLOCKSWORLD_TEXT).unwrap();

        assert_eq!(task.symbols().len(), 4);
        assert_eq!(task.action_schemas().len(), 2);
        assert_eq!(task.initial_state.len(), 6);
        assert_eq!(task.goal.conditions().len(), 2);
        assert!(!task.goal.is_satisfied(&task.initial_state));
    }

    #[test]
    fn negative_initial_literal_removes_atom() {
        let text = r#"
Symbols: A
Initial conditions: Clear(A), Held(A), !Held(A)
Goal conditions: Clear(A)
Actions:
"#;
        let task = Task::from_text(text).unwrap();
        let held = Atom::new(PredicateName::from_str("Held"), vec!["A".into()]);
        assert_eq!(task.initial_state.len(), 1);
        assert!(!task.initial_state.contains(&held));
        assert!(task.goal.is_satisfied(&task.initial_state));
    }

    #[test]
    fn trailing_garbage_is_reported() {
        let text = format!("{}\nthis is not an action", BLOCKSWORLD_TEXT);
        match Task::from_text(&text) {
            Err(PlannerError::Parse(message)) => assert!(message.contains("unexpected input")),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = Task::from_path(Path::new("/definitely/not/here.txt"));
        assert!(matches!(result, Err(PlannerError::Io { .. })));
    }

    #[test]
    fn from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(GRIPPER_TEXT.as_bytes()).unwrap();
        let task = Task::from_path(file.path()).unwrap();
        assert_eq!(task.symbols().len(), 6);
        assert_eq!(task.action_schemas().len(), 3);
        assert_eq!(task.initial_state.len(), 11);
    }
}
