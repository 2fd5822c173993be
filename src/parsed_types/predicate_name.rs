//! Contains predicate names via the [`PredicateName`] type.

use crate::parsed_types::Name;
use std::fmt::Display;
use std::ops::Deref;

/// A predicate name.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Default)]
pub struct PredicateName(Name);

impl PredicateName {
    #[inline(always)]
    pub const fn new(name: Name) -> Self {
        Self(name)
    }

    #[inline(always)]
    pub fn from_str(name: &str) -> Self {
        Self(Name::new(name))
    }
}

impl<T> From<T> for PredicateName
where
    T: Into<Name>,
{
    #[inline(always)]
    fn from(value: T) -> Self {
        PredicateName::new(value.into())
    }
}

impl AsRef<Name> for PredicateName {
    #[inline(always)]
    fn as_ref(&self) -> &Name {
        &self.0
    }
}

impl AsRef<str> for PredicateName {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for PredicateName {
    type Target = Name;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for PredicateName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
