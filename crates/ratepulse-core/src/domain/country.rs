use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Country/currency-area identifier, stable across runs.
///
/// Identifiers are the display names used by the downstream consumer
/// (e.g. "미국", "유로존"), so no ASCII normalization is applied; the only
/// requirement is a non-empty trimmed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryId(String);

impl CountryId {
    pub fn new(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyCountry);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CountryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for CountryId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<&str> for CountryId {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CountryId> for String {
    fn from(value: CountryId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace_identifiers() {
        assert_eq!(CountryId::new(""), Err(ValidationError::EmptyCountry));
        assert_eq!(CountryId::new("   "), Err(ValidationError::EmptyCountry));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let country = CountryId::new(" 미국 ").expect("valid identifier");
        assert_eq!(country.as_str(), "미국");
    }

    #[test]
    fn non_ascii_identifiers_pass_through_unchanged() {
        let country = CountryId::new("유로존").expect("valid identifier");
        assert_eq!(country.to_string(), "유로존");
    }
}
