use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{AlternativeId, CriterionId, ModelError, Result};

/// One alternative and its criterion values, in the owning table's column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeRow {
    pub id: AlternativeId,
    pub values: Vec<f64>,
}

impl AlternativeRow {
    pub fn new(id: AlternativeId, values: Vec<f64>) -> Self {
        Self { id, values }
    }
}

/// Alternatives × criteria table of finite scores.
///
/// Rows are addressed by [`AlternativeId`] and columns by [`CriterionId`];
/// positions are an implementation detail. Every transformation returns a
/// new table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CriterionTable {
    criteria: Vec<CriterionId>,
    rows: Vec<AlternativeRow>,
}

impl CriterionTable {
    /// Builds a table, rejecting duplicate keys, ragged rows and non-finite values.
    pub fn new(criteria: Vec<CriterionId>, rows: Vec<AlternativeRow>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for criterion in &criteria {
            if !seen.insert(criterion) {
                return Err(ModelError::DuplicateCriterion(criterion.clone()));
            }
        }
        let mut ids = BTreeSet::new();
        for row in &rows {
            if !ids.insert(row.id) {
                return Err(ModelError::DuplicateAlternative(row.id));
            }
            if row.values.len() != criteria.len() {
                return Err(ModelError::RowWidth {
                    id: row.id,
                    expected: criteria.len(),
                    actual: row.values.len(),
                });
            }
            if let Some((idx, value)) = row
                .values
                .iter()
                .enumerate()
                .find(|(_, value)| !value.is_finite())
            {
                return Err(ModelError::NonFiniteValue {
                    id: row.id,
                    criterion: criteria[idx].clone(),
                    value: *value,
                });
            }
        }
        Ok(Self { criteria, rows })
    }

    pub fn empty(criteria: Vec<CriterionId>) -> Self {
        Self {
            criteria,
            rows: Vec::new(),
        }
    }

    pub fn criteria(&self) -> &[CriterionId] {
        &self.criteria
    }

    pub fn rows(&self) -> &[AlternativeRow] {
        &self.rows
    }

    pub fn alternative_ids(&self) -> Vec<AlternativeId> {
        self.rows.iter().map(|row| row.id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    pub fn contains(&self, id: AlternativeId) -> bool {
        self.rows.iter().any(|row| row.id == id)
    }

    pub fn criterion_index(&self, criterion: &CriterionId) -> Option<usize> {
        self.criteria.iter().position(|c| c == criterion)
    }

    /// Cell lookup by (row id, column id).
    pub fn value(&self, id: AlternativeId, criterion: &CriterionId) -> Option<f64> {
        let column = self.criterion_index(criterion)?;
        self.rows
            .iter()
            .find(|row| row.id == id)
            .and_then(|row| row.values.get(column).copied())
    }

    /// Returns a table with exactly the given columns, in the given order.
    pub fn select_columns(&self, order: &[CriterionId]) -> Result<Self> {
        let mut indices = Vec::with_capacity(order.len());
        for criterion in order {
            let idx = self
                .criterion_index(criterion)
                .ok_or_else(|| ModelError::UnknownCriterion(criterion.clone()))?;
            indices.push(idx);
        }
        let rows = self
            .rows
            .iter()
            .map(|row| {
                AlternativeRow::new(row.id, indices.iter().map(|&idx| row.values[idx]).collect())
            })
            .collect();
        Self::new(order.to_vec(), rows)
    }

    /// Returns a table keeping only the rows whose ids are in `keep`.
    pub fn retain_rows(&self, keep: &[AlternativeId]) -> Self {
        Self {
            criteria: self.criteria.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| keep.contains(&row.id))
                .cloned()
                .collect(),
        }
    }

    /// Returns a table without the rows whose ids are in `drop`.
    pub fn without_rows(&self, drop: &[AlternativeId]) -> Self {
        Self {
            criteria: self.criteria.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| !drop.contains(&row.id))
                .cloned()
                .collect(),
        }
    }
}
