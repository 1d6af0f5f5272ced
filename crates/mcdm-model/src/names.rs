use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::AlternativeId;

/// Human-readable labels keyed like [`crate::CriterionTable`] rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameTable {
    names: BTreeMap<AlternativeId, String>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: AlternativeId, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }

    pub fn get(&self, id: AlternativeId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Label for `id`, falling back to the id itself.
    pub fn display_name(&self, id: AlternativeId) -> String {
        self.get(id).map_or_else(|| format!("#{id}"), str::to_string)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Keeps only the given ids.
    pub fn retain(&self, keep: &[AlternativeId]) -> Self {
        Self {
            names: self
                .names
                .iter()
                .filter(|(id, _)| keep.contains(id))
                .map(|(id, name)| (*id, name.clone()))
                .collect(),
        }
    }
}

impl FromIterator<(AlternativeId, String)> for NameTable {
    fn from_iter<T: IntoIterator<Item = (AlternativeId, String)>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
