use crate::search::{heuristics::HeuristicValue, states::StateKey};
use ordered_float::OrderedFloat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is in the open list
    Open,
    /// Node has been expanded
    Closed,
    /// Node is a deadend, the heuristic proved the goal unreachable from it
    Deadend,
}

#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Status of the node
    status: SearchNodeStatus,
    /// G-value of the node, i.e. the cost of the cheapest known path to it
    g: HeuristicValue,
    /// H-value of the node, i.e. the heuristic estimate of the cost to reach
    /// the goal
    h: HeuristicValue,
    /// Catalogue index of the action that led to this node and the key of
    /// the state it was applied in. `None` for the root.
    parent: Option<(usize, StateKey)>,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            status: SearchNodeStatus::New,
            g: OrderedFloat(f64::INFINITY),
            h: OrderedFloat(f64::INFINITY),
            parent: None,
        }
    }
}

impl SearchNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the node with a new path. All fields are written together.
    pub fn open(
        &mut self,
        g: HeuristicValue,
        h: HeuristicValue,
        parent: Option<(usize, StateKey)>,
    ) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.h = h;
        self.parent = parent;
    }

    pub fn mark_as_deadend(
        &mut self,
        g: HeuristicValue,
        h: HeuristicValue,
        parent: Option<(usize, StateKey)>,
    ) {
        self.status = SearchNodeStatus::Deadend;
        self.g = g;
        self.h = h;
        self.parent = parent;
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_f(&self) -> HeuristicValue {
        self.g + self.h
    }

    pub fn get_parent(&self) -> Option<&(usize, StateKey)> {
        self.parent.as_ref()
    }
}
