use std::fmt::Display;

/// Wrapper around a type to indicate that it can be negated. This carries the
/// polarity of conditions: [`crate::search::GroundedCondition`] is a
/// `Negatable<Atom>` and [`crate::search::Condition`] is a
/// `Negatable<AtomSchema>`. Equality and hashing include the polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Negatable<T> {
    Positive(T),
    Negative(T),
}

impl<T> Negatable<T> {
    pub fn new(negated: bool, value: T) -> Self {
        if negated {
            Self::Negative(value)
        } else {
            Self::Positive(value)
        }
    }

    #[inline(always)]
    pub fn is_negated(&self) -> bool {
        match self {
            Self::Positive(_) => false,
            Self::Negative(_) => true,
        }
    }

    #[inline(always)]
    pub fn underlying(&self) -> &T {
        match self {
            Self::Positive(value) => value,
            Self::Negative(value) => value,
        }
    }

    #[inline(always)]
    pub fn into_underlying(self) -> T {
        match self {
            Self::Positive(value) => value,
            Self::Negative(value) => value,
        }
    }

    /// The same value with the opposite polarity.
    pub fn flipped(self) -> Self {
        match self {
            Self::Positive(value) => Self::Negative(value),
            Self::Negative(value) => Self::Positive(value),
        }
    }

    pub fn map<U, F: FnOnce(&T) -> U>(&self, f: F) -> Negatable<U> {
        Negatable::new(self.is_negated(), f(self.underlying()))
    }
}

impl<T> From<T> for Negatable<T> {
    fn from(value: T) -> Self {
        Self::Positive(value)
    }
}

impl<T: Display> Display for Negatable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive(value) => write!(f, "{}", value),
            Self::Negative(value) => write!(f, "!{}", value),
        }
    }
}
