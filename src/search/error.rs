use crate::search::search_engines::SearchResult;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error at {0}")]
    Parse(String),
    #[error("action {action} uses {argument}, which is neither a parameter nor a symbol")]
    MalformedSchema { action: String, argument: String },
    #[error("action {action} declares parameter {parameter} more than once")]
    DuplicateParameter { action: String, parameter: String },
    #[error("grounding needs {required} actions, more than the limit of {limit}")]
    GroundingLimitExceeded { limit: usize, required: usize },
    #[error("action {action} takes {expected} arguments, {found} given")]
    ArityMismatch {
        action: String,
        expected: usize,
        found: usize,
    },
    #[error("unknown action {0}")]
    UnknownAction(String),
    #[error("no plan found: {0:?}")]
    PlanNotFound(SearchResult),
    #[error("invalid plan: {0}")]
    InvalidPlan(String),
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
