//! Product handle (URL slug) type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ProductHandle`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HandleError {
    /// The input string is empty.
    #[error("handle cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("handle must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character that cannot appear in a URL segment.
    #[error("handle contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// A product handle, the slug used in `/catalog/{handle}` URLs.
///
/// ## Constraints
///
/// - Length: 1-255 characters (Shopify's handle limit)
/// - No whitespace, `/`, `?`, or `#`
///
/// ## Examples
///
/// ```
/// use anfa_core::ProductHandle;
///
/// assert!(ProductHandle::parse("nomad-trouser").is_ok());
/// assert!(ProductHandle::parse("").is_err());
/// assert!(ProductHandle::parse("two words").is_err());
/// assert!(ProductHandle::parse("a/b").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ProductHandle(String);

impl ProductHandle {
    /// Maximum length of a handle.
    pub const MAX_LENGTH: usize = 255;

    /// Parse a `ProductHandle` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than 255 characters,
    /// or contains whitespace or URL delimiters.
    pub fn parse(s: &str) -> Result<Self, HandleError> {
        if s.is_empty() {
            return Err(HandleError::Empty);
        }

        if s.chars().count() > Self::MAX_LENGTH {
            return Err(HandleError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(c) = s
            .chars()
            .find(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#'))
        {
            return Err(HandleError::InvalidCharacter(c));
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the handle as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductHandle` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductHandle {
    type Err = HandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ProductHandle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ProductHandle {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_handles() {
        assert!(ProductHandle::parse("contour-bustier-dress").is_ok());
        assert!(ProductHandle::parse("monolith-jacket").is_ok());
        assert!(ProductHandle::parse("demo-look").is_ok());
        assert!(ProductHandle::parse("x").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(ProductHandle::parse(""), Err(HandleError::Empty));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "a".repeat(256);
        assert!(matches!(
            ProductHandle::parse(&long),
            Err(HandleError::TooLong { max: 255 })
        ));
        assert!(ProductHandle::parse(&"a".repeat(255)).is_ok());
    }

    #[test]
    fn test_parse_rejects_delimiters() {
        assert_eq!(
            ProductHandle::parse("nomad trouser"),
            Err(HandleError::InvalidCharacter(' '))
        );
        assert_eq!(
            ProductHandle::parse("nomad/trouser"),
            Err(HandleError::InvalidCharacter('/'))
        );
        assert_eq!(
            ProductHandle::parse("nomad?size=m"),
            Err(HandleError::InvalidCharacter('?'))
        );
    }

    #[test]
    fn test_display_and_compare() {
        let handle = ProductHandle::parse("nomad-trouser").unwrap();
        assert_eq!(handle.to_string(), "nomad-trouser");
        assert!(handle == *"nomad-trouser");
        assert_eq!(handle.into_inner(), "nomad-trouser");
    }
}
