mod state;
mod state_key;

pub use state::State;
pub use state_key::StateKey;
