use crate::search::{heuristics::HeuristicName, search_engines::SearchLimits, PlannerError};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Settings of a planner run, usually read from a TOML file:
///
/// ```toml
/// heuristic = "goal-count"
/// time-limit = 60
/// expansion-limit = 100000
/// grounding-limit = 1000000
/// ```
///
/// Every key is optional. Without a heuristic the delete relaxation is used,
/// without limits the search is unbounded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct PlannerConfig {
    pub heuristic: HeuristicName,
    /// Search time limit in seconds
    pub time_limit: Option<u64>,
    pub memory_limit_mb: Option<usize>,
    pub expansion_limit: Option<usize>,
    /// Maximum number of grounded actions
    pub grounding_limit: Option<usize>,
}

impl PlannerConfig {
    pub fn from_path(path: &Path) -> Result<Self, PlannerError> {
        let contents = std::fs::read_to_string(path).map_err(|source| PlannerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(text: &str) -> Result<Self, PlannerError> {
        Ok(toml::from_str(text)?)
    }

    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits {
            time_limit: self.time_limit.map(Duration::from_secs),
            memory_limit_mb: self.memory_limit_mb,
            expansion_limit: self.expansion_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_config_is_default() {
        let config = PlannerConfig::from_toml("").unwrap();
        assert_eq!(config, PlannerConfig::default());
        assert_eq!(config.heuristic, HeuristicName::DeleteRelaxation);
        assert!(config.search_limits().is_unbounded());
    }

    #[test]
    fn full_config() {
        let config = PlannerConfig::from_toml(
            r#"
            heuristic = "goal-count"
            time-limit = 60
            memory-limit-mb = 2048
            expansion-limit = 1000
            grounding-limit = 50000
            "#,
        )
        .unwrap();
        assert_eq!(config.heuristic, HeuristicName::GoalCount);
        assert_eq!(config.grounding_limit, Some(50000));
        assert_eq!(
            config.search_limits(),
            SearchLimits {
                time_limit: Some(Duration::from_secs(60)),
                memory_limit_mb: Some(2048),
                expansion_limit: Some(1000),
            }
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            PlannerConfig::from_toml("heuristics = \"zero\""),
            Err(PlannerError::Config(_))
        ));
        assert!(matches!(
            PlannerConfig::from_toml("heuristic = \"hmax\""),
            Err(PlannerError::Config(_))
        ));
    }

    #[test]
    fn from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "heuristic = \"zero\"").unwrap();
        let config = PlannerConfig::from_path(file.path()).unwrap();
        assert_eq!(config.heuristic, HeuristicName::Zero);

        assert!(matches!(
            PlannerConfig::from_path(Path::new("/nonexistent/planner.toml")),
            Err(PlannerError::Io { .. })
        ));
    }
}
