//! Grounding turns every action schema into all of its instantiations over
//! the symbol universe.
//!
//! For a schema of arity `k` over `S` symbols this produces `S!/(S-k)!`
//! actions: every size `k` combination of the symbols, in every order. No
//! pruning by precondition satisfiability happens here, so grounding is the
//! dominant cost of the planner on domains with many symbols or high arity
//! schemas. Use [`Grounder::with_limit`] to refuse tasks that would blow up.

use crate::search::{
    ActionCatalogue, ActionSchema, Environment, GroundedAction, PlannerError, Symbol,
};
use itertools::Itertools;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default)]
pub struct Grounder {
    limit: Option<usize>,
}

impl Grounder {
    pub fn new() -> Self {
        Self { limit: None }
    }

    /// A grounder that fails with [`PlannerError::GroundingLimitExceeded`]
    /// instead of producing more than `limit` actions in total.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self { limit }
    }

    pub fn ground(&self, environment: &impl Environment) -> Result<ActionCatalogue, PlannerError> {
        self.ground_schemas(environment.action_schemas(), environment.symbols())
    }

    /// Grounds every schema in order. The catalogue lists the actions of the
    /// first schema first; within a schema, assignments follow
    /// [`assignments`].
    pub fn ground_schemas(
        &self,
        schemas: &[ActionSchema],
        symbols: &[Symbol],
    ) -> Result<ActionCatalogue, PlannerError> {
        let counts: Vec<Option<usize>> = schemas
            .iter()
            .map(|schema| count_assignments(symbols.len(), schema.arity()))
            .collect();
        let required = counts
            .iter()
            .try_fold(0usize, |total, count| total.checked_add((*count)?));
        if let Some(limit) = self.limit {
            match required {
                Some(required) if required <= limit => {}
                _ => {
                    return Err(PlannerError::GroundingLimitExceeded {
                        limit,
                        required: required.unwrap_or(usize::MAX),
                    })
                }
            }
        }

        info!(
            action_schemas = schemas.len(),
            symbols = symbols.len(),
            "grounding actions"
        );
        let mut actions = Vec::with_capacity(required.unwrap_or_default());
        for (schema, count) in schemas.iter().zip(counts) {
            debug!(schema = %schema.name(), arity = schema.arity(), actions = count, "grounding schema");
            actions.extend(ground_schema(schema, symbols));
        }
        info!(grounded_actions = actions.len(), "grounding finished");

        Ok(ActionCatalogue::new(actions))
    }

    /// Grounds `schema` for one explicit argument list.
    pub fn instantiate(
        &self,
        schema: &ActionSchema,
        arguments: &[Symbol],
    ) -> Result<GroundedAction, PlannerError> {
        if arguments.len() != schema.arity() {
            return Err(PlannerError::ArityMismatch {
                action: schema.name().to_string(),
                expected: schema.arity(),
                found: arguments.len(),
            });
        }
        Ok(instantiate(schema, arguments.to_vec()))
    }
}

/// All instantiations of a single schema.
pub fn ground_schema(schema: &ActionSchema, symbols: &[Symbol]) -> Vec<GroundedAction> {
    assignments(symbols, schema.arity())
        .into_iter()
        .map(|assignment| instantiate(schema, assignment))
        .collect()
}

fn instantiate(schema: &ActionSchema, assignment: Vec<Symbol>) -> GroundedAction {
    let preconditions = schema
        .preconditions()
        .iter()
        .map(|condition| condition.ground(&assignment))
        .collect_vec();
    let effects = schema
        .effects()
        .iter()
        .map(|condition| condition.ground(&assignment))
        .collect_vec();
    GroundedAction::new(*schema.name(), assignment, preconditions, effects)
}

/// Number of assignments of `arity` distinct symbols out of `num_symbols`,
/// i.e. `num_symbols! / (num_symbols - arity)!`. `None` on overflow.
pub fn count_assignments(num_symbols: usize, arity: usize) -> Option<usize> {
    if arity > num_symbols {
        return Some(0);
    }
    (num_symbols - arity + 1..=num_symbols).try_fold(1usize, |count, n| count.checked_mul(n))
}

/// Every ordered choice of `arity` distinct symbols. Combinations are
/// enumerated in lexicographic order of symbol position, and each combination
/// is expanded into its permutations in recursive swap order, e.g. `abc, acb,
/// bac, bca, cba, cab`. Plan extraction relies on this order being stable.
pub fn assignments(symbols: &[Symbol], arity: usize) -> Vec<Vec<Symbol>> {
    symbols
        .iter()
        .copied()
        .combinations(arity)
        .flat_map(permutations)
        .collect()
}

fn permutations<T: Clone>(mut items: Vec<T>) -> Vec<Vec<T>> {
    let mut result = Vec::new();
    permute(&mut items, 0, &mut result);
    result
}

fn permute<T: Clone>(items: &mut Vec<T>, start: usize, result: &mut Vec<Vec<T>>) {
    if start + 1 >= items.len() {
        result.push(items.clone());
        return;
    }
    for i in start..items.len() {
        items.swap(start, i);
        permute(items, start + 1, result);
        items.swap(start, i);
    }
}
