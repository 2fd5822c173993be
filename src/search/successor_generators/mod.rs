mod full_successor_generator;
mod relaxed_successor_generator;
mod successor_generator;

pub use full_successor_generator::FullSuccessorGenerator;
pub use relaxed_successor_generator::RelaxedSuccessorGenerator;
pub use successor_generator::SuccessorGenerator;
