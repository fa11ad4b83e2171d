//! Project name validation.
//!
//! A project name must match `[A-Za-z][A-Za-z0-9_]*`, must not end with `_`
//! and must not contain `__`. Rules are checked in a fixed order and the first
//! failure wins, so a given bad name always produces the same error:
//!
//! 1. empty → [`ScaffoldError::MissingProjectname`]
//! 2. first character not a letter → [`ScaffoldError::NameMustStartWithLetter`]
//! 3. any character outside `[A-Za-z0-9_]` → [`ScaffoldError::AlphaNumericName`]
//! 4. trailing `_` → [`ScaffoldError::EndWithUnderscore`]
//! 5. `__` anywhere → [`ScaffoldError::DoubleUnderscore`]

use std::fmt;

use crate::error::{Result, ScaffoldError};

/// A project name that passed [`validate`]. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validate a candidate project name.
pub fn validate(candidate: &str) -> Result<ProjectName> {
    let Some(first) = candidate.chars().next() else {
        return Err(ScaffoldError::MissingProjectname);
    };

    if !first.is_ascii_alphabetic() {
        return Err(ScaffoldError::NameMustStartWithLetter(candidate.to_string()));
    }
    if !candidate
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ScaffoldError::AlphaNumericName(candidate.to_string()));
    }
    if candidate.ends_with('_') {
        return Err(ScaffoldError::EndWithUnderscore(candidate.to_string()));
    }
    if candidate.contains("__") {
        return Err(ScaffoldError::DoubleUnderscore(candidate.to_string()));
    }

    Ok(ProjectName(candidate.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kind(name: &str) -> &'static str {
        validate(name).unwrap_err().kind()
    }

    #[test]
    fn test_valid_names() {
        for name in ["foo", "footest", "fooempty", "analytics1", "a", "A_b_c", "x9"] {
            assert_eq!(validate(name).unwrap().as_str(), name);
        }
    }

    #[test]
    fn test_empty_is_missing() {
        assert_eq!(kind(""), "MissingProjectname");
    }

    #[test]
    fn test_starts_with_digit() {
        assert_eq!(kind("3aa"), "NameMustStartWithLetterError");
    }

    #[test]
    fn test_start_letter_checked_before_alphanumeric() {
        assert_eq!(kind("/a"), "NameMustStartWithLetterError");
        assert_eq!(kind("3a-"), "NameMustStartWithLetterError");
        assert_eq!(kind("_a"), "NameMustStartWithLetterError");
    }

    #[test]
    fn test_disallowed_characters() {
        assert_eq!(kind("a/"), "AlphaNumericNameError");
        assert_eq!(kind("my project"), "AlphaNumericNameError");
        assert_eq!(kind("café"), "AlphaNumericNameError");
    }

    #[test]
    fn test_alphanumeric_checked_before_underscore_rules() {
        assert_eq!(kind("a-b_"), "AlphaNumericNameError");
        assert_eq!(kind("a__b-"), "AlphaNumericNameError");
    }

    #[test]
    fn test_trailing_underscore() {
        assert_eq!(kind("a_"), "EndWithUnderscoreError");
        // trailing wins over double underscore
        assert_eq!(kind("a__"), "EndWithUnderscoreError");
    }

    #[test]
    fn test_double_underscore() {
        assert_eq!(kind("a__a"), "DoubleUnderscoreError");
    }

    proptest! {
        #[test]
        fn prop_non_letter_start_rejected(first in "[^A-Za-z]", rest in ".{0,12}") {
            let name = format!("{first}{rest}");
            prop_assert_eq!(kind(&name), "NameMustStartWithLetterError");
        }

        #[test]
        fn prop_disallowed_char_rejected(
            head in "[A-Za-z][A-Za-z0-9_]{0,6}",
            bad in "[^A-Za-z0-9_]",
            tail in "[A-Za-z0-9_]{0,6}",
        ) {
            let name = format!("{head}{bad}{tail}");
            prop_assert_eq!(kind(&name), "AlphaNumericNameError");
        }

        #[test]
        fn prop_trailing_underscore_rejected(head in "[A-Za-z][A-Za-z0-9_]{0,8}") {
            let name = format!("{head}_");
            prop_assert_eq!(kind(&name), "EndWithUnderscoreError");
        }

        #[test]
        fn prop_double_underscore_rejected(
            head in "[A-Za-z][A-Za-z0-9]{0,6}",
            tail in "[A-Za-z0-9]{1,6}",
        ) {
            let name = format!("{head}__{tail}");
            prop_assert_eq!(kind(&name), "DoubleUnderscoreError");
        }

        #[test]
        fn prop_grammar_names_accepted(
            head in "[A-Za-z]",
            parts in proptest::collection::vec("[A-Za-z0-9]{1,4}", 0..4),
        ) {
            let name = format!("{head}{}", parts.join("_"));
            prop_assert!(validate(&name).is_ok());
        }
    }
}
