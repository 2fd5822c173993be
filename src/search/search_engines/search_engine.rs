use crate::search::Plan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The search was successful
    Success(Plan),
    /// The open list ran empty without reaching the goal
    ProvablyUnsolvable,
    /// The search engine ran out of time
    TimeLimitExceeded,
    /// The search engine ran out of memory
    MemoryLimitExceeded,
    /// The search engine expanded as many nodes as it was allowed to
    ExpansionLimitExceeded,
}

impl SearchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }
}
