//! Rectangular columnar data
//!
//! A [`Table`] is the untyped shape shared by tabular sources and sinks:
//! ordered, uniquely named columns of [`Value`]s with equal row counts. It is
//! the input of [`Dataset::set_data`](crate::dataset::Dataset::set_data) and
//! the output of [`Dataset::to_table`](crate::dataset::Dataset::to_table).

use std::collections::HashSet;

use crate::{
    error::{DatasetError, Result},
    value::Value,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<(String, Vec<Value>)>,
    num_rows: usize,
}

impl Table {
    /// Builds a table from named columns.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::InvalidParameter`] if two columns share a name
    /// or the columns differ in length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tabscope_dataset::{table::Table, value::Value};
    /// let table = Table::new(vec![
    ///     ("x".to_owned(), vec![Value::from(1.0), Value::from(2.0)]),
    ///     ("y".to_owned(), vec![Value::from("a"), Value::from("b")]),
    /// ])
    /// .unwrap();
    /// assert_eq!(table.num_rows(), 2);
    /// assert_eq!(table.num_columns(), 2);
    /// ```
    pub fn new(columns: Vec<(String, Vec<Value>)>) -> Result<Self> {
        let mut seen = HashSet::new();
        for (name, _) in &columns {
            if !seen.insert(name.as_str()) {
                return Err(DatasetError::invalid_parameter(format!(
                    "duplicate column name '{name}'"
                )));
            }
        }

        let num_rows = columns.first().map_or(0, |(_, values)| values.len());
        if let Some((name, values)) = columns.iter().find(|(_, v)| v.len() != num_rows) {
            return Err(DatasetError::invalid_parameter(format!(
                "column '{name}' has {} rows, expected {num_rows}",
                values.len()
            )));
        }

        Ok(Self { columns, num_rows })
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values.as_slice())
    }

    /// Iterates over the rows, each a vector of cell references in column order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Value>> {
        (0..self.num_rows).map(|i| {
            self.columns.iter().map(|(_, values)| &values[i]).collect()
        })
    }

    #[must_use]
    pub fn into_columns(self) -> Vec<(String, Vec<Value>)> {
        self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, values: &[f64]) -> (String, Vec<Value>) {
        (
            name.to_owned(),
            values.iter().copied().map(Value::from).collect(),
        )
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let result = Table::new(vec![column("a", &[1.0]), column("a", &[2.0])]);
        assert!(matches!(result, Err(DatasetError::InvalidParameter { .. })));
    }

    #[test]
    fn test_rejects_ragged_columns() {
        let result = Table::new(vec![column("a", &[1.0, 2.0]), column("b", &[2.0])]);
        assert!(matches!(result, Err(DatasetError::InvalidParameter { .. })));
    }

    #[test]
    fn test_rows_follow_column_order() {
        let table = Table::new(vec![column("a", &[1.0, 2.0]), column("b", &[3.0, 4.0])])
            .unwrap();
        let rows = table.rows().collect::<Vec<_>>();
        assert_eq!(rows[1], vec![&Value::from(2.0), &Value::from(4.0)]);
        assert_eq!(table.names().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(table.column("b").map(<[Value]>::len), Some(2));
        assert!(table.column("c").is_none());
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new(vec![]).unwrap();
        assert_eq!(table.num_rows(), 0);
        assert_eq!(table.rows().count(), 0);
    }
}
