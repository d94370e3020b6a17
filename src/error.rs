use alloc::string::{String, ToString};
use thiserror::Error;

/// Returned when text does not name any enumerator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{type_name} has no enumerator named {input:?}")]
pub struct ParseEnumError {
    type_name: &'static str,
    input: String,
}

impl ParseEnumError {
    pub fn new<T: ?Sized>(input: &str) -> Self {
        Self {
            type_name: core::any::type_name::<T>(),
            input: input.to_string(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Returned when reading the value of an empty [`CompactOptional`](crate::CompactOptional).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Error, attempt to access valueless optional!")]
pub struct BadOptionalAccess;

#[cfg(test)]
mod test {
    use super::{BadOptionalAccess, ParseEnumError};
    use alloc::string::ToString;

    struct Planet;

    #[test]
    fn parse_error_message() {
        let err = ParseEnumError::new::<Planet>("Pluto");
        assert_eq!(err.input(), "Pluto");
        assert!(err.type_name().ends_with("Planet"));
        let msg = err.to_string();
        assert!(msg.ends_with("Planet has no enumerator named \"Pluto\""), "{}", msg);
    }

    #[test]
    fn bad_access_message() {
        assert_eq!(
            BadOptionalAccess.to_string(),
            "Error, attempt to access valueless optional!"
        );
    }
}
