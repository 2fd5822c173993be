use crate::search::{
    search_engines::SearchNode,
    states::{State, StateKey},
};
use std::collections::{hash_map::Entry, HashMap};

/// The node table of one search episode. Nodes and their states are
/// registered under the canonical state key the first time a state is
/// reached.
#[derive(Debug)]
pub struct SearchSpace {
    root_key: StateKey,
    nodes: HashMap<StateKey, SearchNode>,
    states: HashMap<StateKey, State>,
}

impl SearchSpace {
    pub fn new(initial_state: State) -> Self {
        let root_key = initial_state.key();
        let mut nodes = HashMap::new();
        let mut states = HashMap::new();
        nodes.insert(root_key.clone(), SearchNode::new());
        states.insert(root_key.clone(), initial_state);

        Self {
            root_key,
            nodes,
            states,
        }
    }

    pub fn root_key(&self) -> &StateKey {
        &self.root_key
    }

    pub fn get_root_node_mut(&mut self) -> &mut SearchNode {
        self.nodes.entry(self.root_key.clone()).or_default()
    }

    /// Returns the node of `key`, registering it together with `state` if
    /// the key has not been seen before.
    pub fn insert_or_get_node(&mut self, key: StateKey, state: State) -> &mut SearchNode {
        match self.nodes.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.states.insert(entry.key().clone(), state);
                entry.insert(SearchNode::new())
            }
        }
    }

    pub fn get_node(&self, key: &StateKey) -> Option<&SearchNode> {
        self.nodes.get(key)
    }

    pub fn get_node_mut(&mut self, key: &StateKey) -> Option<&mut SearchNode> {
        self.nodes.get_mut(key)
    }

    pub fn get_state(&self, key: &StateKey) -> Option<&State> {
        self.states.get(key)
    }

    /// Walks the parent chain from `goal_key` back to the root and returns
    /// the catalogue indices of the actions along it, root first.
    ///
    /// # Panics
    /// Panics if some node on the way has no recorded parent. That only
    /// happens if `goal_key` was never reached by this search.
    pub fn extract_plan(&self, goal_key: &StateKey) -> Vec<usize> {
        let mut plan = vec![];
        let mut current_key = goal_key;
        while current_key != &self.root_key {
            let node = self
                .nodes
                .get(current_key)
                .unwrap_or_else(|| panic!("no search node registered for state {}", current_key));
            let (action, parent_key) = node.get_parent().unwrap_or_else(|| {
                panic!(
                    "state {} has no parent, cannot extract a plan from it",
                    current_key
                )
            });
            plan.push(*action);
            current_key = parent_key;
        }
        plan.reverse();
        plan
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
