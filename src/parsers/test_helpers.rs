use crate::parsers::ParseResult;

/// Helpers for inspecting parser output in tests and doc-tests.
pub trait UnwrapValue<T> {
    /// Whether the parser succeeded with `value`, ignoring any remaining
    /// input.
    fn is_value(&self, value: T) -> bool;

    /// The parsed value, panicking if the parser failed.
    fn unwrap_value(self) -> T;
}

impl<'a, T> UnwrapValue<T> for ParseResult<'a, T>
where
    T: PartialEq,
{
    fn is_value(&self, value: T) -> bool {
        match self {
            Ok((_, parsed)) => *parsed == value,
            Err(_) => false,
        }
    }

    fn unwrap_value(self) -> T {
        match self {
            Ok((_, parsed)) => parsed,
            Err(e) => panic!("parser failed: {}", crate::parsers::describe_error(&e)),
        }
    }
}

/// Like [`UnwrapValue::is_value`], but also requires the whole input to be
/// consumed.
#[cfg(test)]
pub(crate) trait Match<T> {
    fn is_exactly(&self, value: T) -> bool;
}

#[cfg(test)]
impl<'a, T> Match<T> for ParseResult<'a, T>
where
    T: PartialEq,
{
    fn is_exactly(&self, value: T) -> bool {
        match self {
            Ok((remainder, parsed)) => remainder.fragment().is_empty() && *parsed == value,
            Err(_) => false,
        }
    }
}
