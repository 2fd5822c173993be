use std::fmt::Display;
use std::rc::Rc;

/// Canonical identity of a [`crate::search::State`]: the textual form of every
/// true atom, sorted and concatenated. Equal states always produce equal keys
/// regardless of the order in which their atoms were inserted. Cloning is
/// cheap, the text is shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey(Rc<str>);

impl StateKey {
    pub fn new(key: String) -> Self {
        Self(Rc::from(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
