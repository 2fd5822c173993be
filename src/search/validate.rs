use crate::search::{Environment, Plan, PlannerError};

/// Replays `plan` from the initial state of `environment` under the full
/// STRIPS semantics and checks that every step is applicable and that the
/// final state satisfies the goal.
pub fn validate(plan: &Plan, environment: &impl Environment) -> Result<(), PlannerError> {
    let mut cur_state = environment.initial_state().clone();
    for (step, action) in plan.steps().iter().enumerate() {
        if !cur_state.is_applicable(action) {
            return Err(PlannerError::InvalidPlan(format!(
                "step {} ({}) is not applicable in state {}",
                step + 1,
                action,
                cur_state
            )));
        }

        cur_state = cur_state.apply_effects(action.effects());
    }

    if !environment.goal().is_satisfied(&cur_state) {
        return Err(PlannerError::InvalidPlan(format!(
            "plan does not reach the goal, final state is {}",
            cur_state
        )));
    }

    Ok(())
}
