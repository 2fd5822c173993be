//! Contains names via the [`Name`] type.

use internment::Intern;
use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::ops::Deref;

/// An interned identifier. Symbols, predicate names, action names and schema
/// parameters are all names. Interning makes a [`Name`] `Copy` and cheap to
/// hash; ordering is by the underlying text so that sorted output does not
/// depend on interning order.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Name(Intern<String>);

impl Name {
    #[inline(always)]
    pub fn new(name: &str) -> Self {
        Self(Intern::new(name.to_string()))
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::new("")
    }
}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl From<&str> for Name {
    #[inline(always)]
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Name {
    #[inline(always)]
    fn from(value: String) -> Self {
        Self(Intern::new(value))
    }
}

impl AsRef<str> for Name {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Deref for Name {
    type Target = str;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Debug for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}
