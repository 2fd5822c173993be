use crate::search::search_engines::SearchResult;
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

/// Resource limits of a search. The default is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    pub time_limit: Option<Duration>,
    pub memory_limit_mb: Option<usize>,
    pub expansion_limit: Option<usize>,
}

impl SearchLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.time_limit.is_none() && self.memory_limit_mb.is_none() && self.expansion_limit.is_none()
    }
}

#[derive(Debug)]
pub struct TerminationCondition {
    limits: SearchLimits,
    log_progress: bool,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_log_time: Instant,
}

impl TerminationCondition {
    pub fn new(limits: SearchLimits, log_progress: bool) -> Self {
        if log_progress {
            info!(
                time_limit = limits.time_limit.map(|d| d.as_secs_f64()),
                memory_limit_mb = limits.memory_limit_mb,
                expansion_limit = limits.expansion_limit,
            );
        }
        Self {
            limits,
            log_progress,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
        }
    }

    /// Logs every ten seconds. With a memory limit the memory usage is
    /// sampled on every call.
    pub fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            self.log();
        } else if self.limits.memory_limit_mb.is_some() {
            self.sample_memory();
        }
    }

    pub fn log(&mut self) {
        let memory_usage = self.sample_memory();
        if self.log_progress {
            info!(
                memory_usage_mb = memory_usage,
                time_elapsed = self.start_time.elapsed().as_secs_f64(),
            );
        }
    }

    fn sample_memory(&mut self) -> Option<usize> {
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
        memory_usage
    }

    pub fn finalise(&mut self) {
        if self.log_progress {
            info!(
                peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
                total_time_used = self.start_time.elapsed().as_secs_f64(),
            );
        }
    }

    pub fn should_terminate(&self, expanded_nodes: usize) -> Option<SearchResult> {
        if let Some(expansion_limit) = self.limits.expansion_limit {
            if expanded_nodes >= expansion_limit {
                return Some(SearchResult::ExpansionLimitExceeded);
            }
        }
        self.exceeded_resources()
    }

    /// Checks the time and memory limits only, sampling memory first. Used
    /// after each heuristic evaluation, which may itself run a whole search.
    pub fn check_resources(&mut self) -> Option<SearchResult> {
        if self.limits.memory_limit_mb.is_some() {
            self.sample_memory();
        }
        self.exceeded_resources()
    }

    fn exceeded_resources(&self) -> Option<SearchResult> {
        if let Some(time_limit) = self.limits.time_limit {
            if self.start_time.elapsed() > time_limit {
                return Some(SearchResult::TimeLimitExceeded);
            }
        }
        if let Some(memory_limit_mb) = self.limits.memory_limit_mb {
            if let Some(peak_usage) = self.peak_memory_usage_mb {
                if peak_usage > memory_limit_mb {
                    return Some(SearchResult::MemoryLimitExceeded);
                }
            }
        }
        None
    }
}
