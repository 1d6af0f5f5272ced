#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// Stable key of an alternative: its 1-based data-row number in the source sheet.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct AlternativeId(u32);

impl AlternativeId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Id for the zero-based data row `index`.
    pub fn from_row_index(index: usize) -> Self {
        Self(u32::try_from(index).map_or(u32::MAX, |value| value.saturating_add(1)))
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for AlternativeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct CriterionId(String);

impl CriterionId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyCriterion);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CriterionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternative_ids_start_at_one() {
        assert_eq!(AlternativeId::from_row_index(0), AlternativeId::new(1));
        assert_eq!(AlternativeId::from_row_index(9).get(), 10);
    }

    #[test]
    fn criterion_id_is_trimmed() {
        let id = CriterionId::new("  Price ").unwrap();
        assert_eq!(id.as_str(), "Price");
        assert_eq!(CriterionId::new("   "), Err(ModelError::EmptyCriterion));
    }
}
