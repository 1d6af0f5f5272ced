use mcdm_model::{AlternativeRow, CriterionTable};

/// Largest value in column `index` over `rows`; `None` when there are no rows.
pub(crate) fn column_max<'a, I>(rows: I, index: usize) -> Option<f64>
where
    I: IntoIterator<Item = &'a AlternativeRow>,
{
    rows.into_iter()
        .filter_map(|row| row.values.get(index).copied())
        .reduce(f64::max)
}

/// Per-row flags marking the rows that hold the column maximum. Ties all count.
pub(crate) fn is_max(table: &CriterionTable, index: usize) -> Vec<bool> {
    let Some(max) = column_max(table.rows(), index) else {
        return Vec::new();
    };
    table
        .rows()
        .iter()
        .map(|row| row.values.get(index).is_some_and(|value| *value == max))
        .collect()
}
