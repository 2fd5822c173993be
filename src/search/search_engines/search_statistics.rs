use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: usize,
    /// Number of heuristic evaluations
    evaluated_nodes: usize,
    /// Number of unique nodes generated
    generated_nodes: usize,
    /// Number of open nodes reached again through a cheaper path
    improved_nodes: usize,
    /// Number of applicable actions generated
    generated_actions: usize,
    /// Number of nodes the heuristic recognised as deadends
    deadend_nodes: usize,
    /// Whether to report progress, nested searches stay quiet
    log_progress: bool,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl SearchStatistics {
    pub fn new(log_progress: bool) -> Self {
        if log_progress {
            info!("starting search");
        }
        Self {
            expanded_nodes: 0,
            evaluated_nodes: 0,
            generated_nodes: 0,
            improved_nodes: 0,
            generated_actions: 0,
            deadend_nodes: 0,
            log_progress,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
    }

    pub fn increment_improved_nodes(&mut self) {
        self.improved_nodes += 1;
    }

    pub fn increment_generated_actions(&mut self, num_actions: usize) {
        self.generated_actions += num_actions;
    }

    pub fn increment_deadend_nodes(&mut self) {
        self.deadend_nodes += 1;
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn evaluated_nodes(&self) -> usize {
        self.evaluated_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn improved_nodes(&self) -> usize {
        self.improved_nodes
    }

    pub fn deadend_nodes(&self) -> usize {
        self.deadend_nodes
    }

    fn log_if_needed(&mut self) {
        if self.log_progress && self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = Instant::now();
        info!(
            expanded_nodes = self.expanded_nodes,
            evaluated_nodes = self.evaluated_nodes,
            generated_nodes = self.generated_nodes,
            improved_nodes = self.improved_nodes,
            generated_actions = self.generated_actions,
            deadend_nodes = self.deadend_nodes,
        );
    }

    pub fn finalise_search(&mut self) {
        if !self.log_progress {
            return;
        }
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}
