//! Validated student names.
//!
//! A [`StudentName`] can only be built from input that is non-empty after
//! trimming surrounding whitespace. Names are case-sensitive: `"alice"` and
//! `"Alice"` are different students.

use serde::{Serialize, Serializer};

/// Errors produced when validating a student name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// The name was empty or consisted only of whitespace.
    #[error("name is empty")]
    Empty,
}

/// A trimmed, non-empty student name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StudentName(String);

impl StudentName {
    /// Validate and normalize raw input into a [`StudentName`].
    ///
    /// Leading and trailing whitespace is removed. Interior whitespace and
    /// letter case are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::Empty`] if nothing remains after trimming.
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for StudentName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for StudentName {
    type Error = NameError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl Serialize for StudentName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let name = StudentName::parse("  Alice \n").ok();
        assert_eq!(name.as_ref().map(StudentName::as_str), Some("Alice"));
    }

    #[test]
    fn keeps_interior_whitespace_and_case() {
        let name = StudentName::parse(" Mary  Ann ").ok();
        assert_eq!(name.as_ref().map(StudentName::as_str), Some("Mary  Ann"));
        assert_ne!(StudentName::parse("alice"), StudentName::parse("Alice"));
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert_eq!(StudentName::parse(""), Err(NameError::Empty));
        assert_eq!(StudentName::parse("   \t"), Err(NameError::Empty));
    }

    #[test]
    fn serializes_as_plain_string() {
        let name = StudentName::try_from("Bob").ok();
        let json = serde_json::to_string(&name).ok();
        assert_eq!(json.as_deref(), Some("\"Bob\""));
    }
}
