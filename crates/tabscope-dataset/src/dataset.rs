//! Named collections of attributes
//!
//! A [`Dataset`] maps unique column names to [`Attribute`]s of equal length,
//! in insertion order, and may designate one column as the class. The
//! cross-column analyses live in [`crate::analysis`] as further `impl Dataset`
//! blocks.
//!
//! # Lifecycle
//!
//! `Dataset::default()` is *uninitialized*: it holds no columns and rejects
//! [`Dataset::add_attribute`]. [`Dataset::set_data`] initializes it from a
//! [`Table`]; if that fails the dataset is left uninitialized.
//!
//! # Examples
//!
//! ```
//! use tabscope_dataset::{dataset::Dataset, table::Table, value::Value};
//!
//! let table = Table::new(vec![
//!     ("score".to_owned(), vec![Value::from(0.2), Value::from(0.9)]),
//!     ("label".to_owned(), vec![Value::from(false), Value::from(true)]),
//! ])
//! .unwrap();
//! let dataset = Dataset::from_table(table, Some("label")).unwrap();
//! assert_eq!(dataset.len(), 2);
//! assert_eq!(dataset.class_name(), Some("label"));
//! ```

use crate::{
    attribute::Attribute,
    error::{DatasetError, Result},
    table::Table,
    value::Value,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    attributes: Option<Vec<(String, Attribute)>>,
    class_name: Option<String>,
    len: usize,
}

impl Dataset {
    /// Builds an initialized dataset from `table`.
    ///
    /// # Errors
    ///
    /// Fails like [`Dataset::set_data`].
    pub fn from_table(table: Table, class_name: Option<&str>) -> Result<Self> {
        let mut dataset = Self::default();
        dataset.set_data(table, class_name)?;
        Ok(dataset)
    }

    /// Replaces all columns with the classified columns of `table`.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::TypeMismatch`] if a column mixes scalar types
    /// and [`DatasetError::NotFound`] if `class_name` names no column. The
    /// dataset is uninitialized afterwards.
    pub fn set_data(&mut self, table: Table, class_name: Option<&str>) -> Result<()> {
        *self = Self::default();

        let len = table.num_rows();
        let attributes = table
            .into_columns()
            .into_iter()
            .map(|(name, values)| Ok((name, Attribute::classify(values)?)))
            .collect::<Result<Vec<_>>>()?;
        if let Some(class_name) = class_name
            && !attributes.iter().any(|(name, _)| name == class_name)
        {
            return Err(DatasetError::column_not_found(class_name));
        }

        log::debug!("dataset initialized with {} attribute(s)", attributes.len());
        self.len = if attributes.is_empty() { 0 } else { len };
        self.attributes = Some(attributes);
        self.class_name = class_name.map(str::to_owned);
        Ok(())
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.attributes.is_some()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn num_attributes(&self) -> usize {
        self.attributes.as_ref().map_or(0, Vec::len)
    }

    /// Column names in dataset order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes().map(|(name, _)| name)
    }

    /// Columns in dataset order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Attribute)> {
        self.attributes
            .iter()
            .flatten()
            .map(|(name, attribute)| (name.as_str(), attribute))
    }

    /// # Errors
    ///
    /// Returns [`DatasetError::NotFound`] if there is no column `name`.
    pub fn attribute(&self, name: &str) -> Result<&Attribute> {
        self.attributes()
            .find_map(|(n, attribute)| (n == name).then_some(attribute))
            .ok_or_else(|| DatasetError::column_not_found(name))
    }

    pub(crate) fn attribute_mut(&mut self, name: &str) -> Result<&mut Attribute> {
        self.attributes
            .iter_mut()
            .flatten()
            .find_map(|(n, attribute)| (*n == name).then_some(attribute))
            .ok_or_else(|| DatasetError::column_not_found(name))
    }

    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// The class column, if one is set.
    #[must_use]
    pub fn class_attribute(&self) -> Option<&Attribute> {
        self.class_name
            .as_deref()
            .and_then(|name| self.attribute(name).ok())
    }

    /// Designates `name` as the class column.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::NotFound`] if there is no column `name`.
    pub fn set_class(&mut self, name: &str) -> Result<()> {
        self.attribute(name)?;
        self.class_name = Some(name.to_owned());
        Ok(())
    }

    pub fn clear_class(&mut self) {
        self.class_name = None;
    }

    /// Replaces the value of column `name` at row `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::NotFound`] for an unknown column, otherwise
    /// fails like [`Attribute::update`].
    pub fn update_instance(&mut self, index: usize, name: &str, value: Value) -> Result<()> {
        self.attribute_mut(name)?.update(index, value)
    }

    /// Classifies `values` and appends them as column `name`.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::UndefinedOperation`] if the dataset is
    /// uninitialized, [`DatasetError::InvalidParameter`] if `name` is taken or
    /// the length differs from the dataset's, and [`DatasetError::TypeMismatch`]
    /// for mixed values.
    pub fn add_attribute(&mut self, name: &str, values: Vec<Value>) -> Result<()> {
        let attribute = Attribute::classify(values)?;
        self.push_attribute(name, attribute)
    }

    /// Appends an already typed column, with the checks of
    /// [`Dataset::add_attribute`].
    ///
    /// # Errors
    ///
    /// Fails like [`Dataset::add_attribute`].
    pub fn push_attribute(&mut self, name: &str, attribute: Attribute) -> Result<()> {
        let Some(attributes) = &mut self.attributes else {
            return Err(DatasetError::undefined(
                "cannot add an attribute to an uninitialized dataset",
            ));
        };
        if attributes.iter().any(|(n, _)| n == name) {
            return Err(DatasetError::invalid_parameter(format!(
                "attribute '{name}' already exists"
            )));
        }
        if attribute.len() != self.len {
            return Err(DatasetError::invalid_parameter(format!(
                "attribute '{name}' has {} values, expected {}",
                attribute.len(),
                self.len
            )));
        }

        attributes.push((name.to_owned(), attribute));
        Ok(())
    }

    /// Removes column `name` and returns it.
    ///
    /// Removing the class column clears the class; removing the last column
    /// resets the length to zero.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::NotFound`] if there is no column `name`.
    pub fn remove_attribute(&mut self, name: &str) -> Result<Attribute> {
        let attributes = self
            .attributes
            .as_mut()
            .ok_or_else(|| DatasetError::column_not_found(name))?;
        let position = attributes
            .iter()
            .position(|(n, _)| n == name)
            .ok_or_else(|| DatasetError::column_not_found(name))?;
        let (_, attribute) = attributes.remove(position);

        if attributes.is_empty() {
            self.len = 0;
        }
        if self.class_name.as_deref() == Some(name) {
            self.class_name = None;
        }
        Ok(attribute)
    }

    /// Replaces column `name` in place with a column of the same length.
    pub(crate) fn replace_attribute(&mut self, name: &str, attribute: Attribute) -> Result<()> {
        let slot = self.attribute_mut(name)?;
        debug_assert_eq!(slot.len(), attribute.len());
        log::debug!(
            "replacing {} attribute '{name}' with a {} attribute",
            slot.kind(),
            attribute.kind()
        );
        *slot = attribute;
        Ok(())
    }

    /// Converts column `name` to a categorical column in place.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::NotFound`] for an unknown column, otherwise
    /// fails like [`Attribute::to_categorical`].
    pub fn to_categorical(&mut self, name: &str, domain: Option<Vec<String>>) -> Result<()> {
        let categorical = self.attribute(name)?.to_categorical(domain)?;
        self.replace_attribute(name, categorical.into())
    }

    /// Exports the columns as a table.
    #[must_use]
    pub fn to_table(&self) -> Table {
        let columns = self
            .attributes()
            .map(|(name, attribute)| (name.to_owned(), attribute.values()))
            .collect();
        // names are unique and lengths equal, so this cannot fail
        Table::new(columns).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeKind;

    fn sample_table() -> Table {
        Table::new(vec![
            (
                "x".to_owned(),
                [1.0, 2.0, 3.0, 4.0].map(Value::from).to_vec(),
            ),
            (
                "flag".to_owned(),
                [true, false, true, false].map(Value::from).to_vec(),
            ),
            (
                "color".to_owned(),
                ["red", "blue", "red", "red"].map(Value::from).to_vec(),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_set_data_classifies_columns() {
        let dataset = Dataset::from_table(sample_table(), Some("flag")).unwrap();
        let kinds = dataset
            .attributes()
            .map(|(_, a)| a.kind())
            .collect::<Vec<_>>();
        assert_eq!(
            kinds,
            [
                AttributeKind::Numerical,
                AttributeKind::Boolean,
                AttributeKind::Text
            ]
        );
        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.names().collect::<Vec<_>>(), ["x", "flag", "color"]);
    }

    #[test]
    fn test_set_data_failure_leaves_dataset_uninitialized() {
        let mut dataset = Dataset::from_table(sample_table(), None).unwrap();
        let err = dataset
            .set_data(sample_table(), Some("missing"))
            .unwrap_err();
        assert!(matches!(err, DatasetError::NotFound { .. }));
        assert!(!dataset.is_initialized());
        assert_eq!(dataset.num_attributes(), 0);

        let mixed = Table::new(vec![(
            "m".to_owned(),
            vec![Value::from(1.0), Value::from("a")],
        )])
        .unwrap();
        assert!(dataset.set_data(mixed, None).is_err());
        assert!(!dataset.is_initialized());
    }

    #[test]
    fn test_set_class() {
        let mut dataset = Dataset::from_table(sample_table(), None).unwrap();
        assert!(dataset.set_class("nope").is_err());
        assert_eq!(dataset.class_name(), None);
        dataset.set_class("color").unwrap();
        assert!(dataset.class_attribute().is_some_and(Attribute::is_text));
    }

    #[test]
    fn test_add_attribute_checks() {
        let mut uninitialized = Dataset::default();
        assert!(
            uninitialized
                .add_attribute("a", vec![Value::from(1.0)])
                .unwrap_err()
                .is_not_applicable()
        );

        let mut dataset = Dataset::from_table(sample_table(), None).unwrap();
        assert!(matches!(
            dataset
                .add_attribute("x", [0.0; 4].map(Value::from).to_vec()),
            Err(DatasetError::InvalidParameter { .. })
        ));
        assert!(matches!(
            dataset
                .add_attribute("y", [0.0; 3].map(Value::from).to_vec()),
            Err(DatasetError::InvalidParameter { .. })
        ));
        dataset
            .add_attribute("y", [0.0; 4].map(Value::from).to_vec())
            .unwrap();
        assert_eq!(dataset.num_attributes(), 4);
    }

    #[test]
    fn test_remove_attribute_resets_class_and_length() {
        let mut dataset = Dataset::from_table(sample_table(), Some("flag")).unwrap();
        dataset.remove_attribute("flag").unwrap();
        assert_eq!(dataset.class_name(), None);
        assert!(dataset.remove_attribute("flag").is_err());

        dataset.remove_attribute("x").unwrap();
        dataset.remove_attribute("color").unwrap();
        assert_eq!(dataset.len(), 0);
        assert!(dataset.is_initialized());

    }

    #[test]
    fn test_emptied_dataset_keeps_length_check() {
        let mut dataset = Dataset::from_table(sample_table(), None).unwrap();
        for name in ["x", "flag", "color"] {
            dataset.remove_attribute(name).unwrap();
        }
        assert!(matches!(
            dataset
                .add_attribute("y", [1.0, 2.0].map(Value::from).to_vec()),
            Err(DatasetError::InvalidParameter { .. })
        ));
        assert_eq!(dataset.len(), 0);
        assert_eq!(dataset.num_attributes(), 0);

        dataset.add_attribute("y", vec![]).unwrap();
        assert_eq!(dataset.num_attributes(), 1);
    }

    #[test]
    fn test_update_instance() {
        let mut dataset = Dataset::from_table(sample_table(), None).unwrap();
        dataset.update_instance(0, "x", Value::from(10.0)).unwrap();
        assert_eq!(
            dataset.attribute("x").unwrap().get(0),
            Ok(Value::from(10.0))
        );
        assert!(matches!(
            dataset.update_instance(0, "w", Value::from(1.0)),
            Err(DatasetError::NotFound { .. })
        ));
        assert!(matches!(
            dataset.update_instance(9, "x", Value::from(1.0)),
            Err(DatasetError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_to_categorical_in_place() {
        let mut dataset = Dataset::from_table(sample_table(), None).unwrap();
        dataset.to_categorical("color", None).unwrap();
        dataset.to_categorical("flag", None).unwrap();
        assert!(dataset.attribute("color").unwrap().is_categorical());
        assert!(dataset.attribute("flag").unwrap().is_categorical());
        assert!(
            dataset
                .to_categorical("x", None)
                .unwrap_err()
                .is_not_applicable()
        );
        assert!(matches!(
            dataset.update_instance(0, "color", Value::from("green")),
            Err(DatasetError::DomainViolation { .. })
        ));
    }

    #[test]
    fn test_to_table_round_trips() {
        let table = sample_table();
        let dataset = Dataset::from_table(table.clone(), None).unwrap();
        assert_eq!(dataset.to_table(), table);
    }
}
