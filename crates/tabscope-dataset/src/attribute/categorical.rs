use std::collections::HashSet;

use tabscope_stats::information;

use super::check_index;
use crate::{
    error::{DatasetError, Result},
    value::Value,
};

/// The fixed set of labels a categorical column may hold.
///
/// Labels keep their first insertion order and duplicates are ignored, so
/// the domain of a discretized column lists its intervals from low to high.
#[derive(Debug, Clone, Default)]
pub struct Domain {
    labels: Vec<String>,
    members: HashSet<String>,
}

impl PartialEq for Domain {
    fn eq(&self, other: &Self) -> bool {
        self.labels == other.labels
    }
}

impl Domain {
    #[must_use]
    pub fn new<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut domain = Self::default();
        for label in labels {
            if domain.members.insert(label.clone()) {
                domain.labels.push(label);
            }
        }
        domain
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.members.contains(label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }

    fn check(&self, label: &str) -> Result<()> {
        if self.contains(label) {
            Ok(())
        } else {
            Err(DatasetError::DomainViolation {
                value: label.to_owned(),
            })
        }
    }
}

/// A text column restricted to a [`Domain`].
#[derive(Debug, Clone, PartialEq)]
pub struct Categorical {
    values: Vec<String>,
    domain: Domain,
}

impl Categorical {
    /// Builds a categorical column.
    ///
    /// Without an explicit `domain` the observed values become the domain and
    /// a warning is logged, since values not seen here will be rejected by
    /// later updates.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::DomainViolation`] if a value is not in `domain`.
    pub fn new(values: Vec<String>, domain: Option<Vec<String>>) -> Result<Self> {
        let domain = match domain {
            Some(domain) => {
                let domain = Domain::new(domain);
                for value in &values {
                    domain.check(value)?;
                }
                domain
            }
            None => {
                let domain = Domain::new(values.iter().cloned());
                log::warn!(
                    "inferred categorical domain of {} value(s); unseen values will be rejected",
                    domain.len()
                );
                domain
            }
        };
        Ok(Self { values, domain })
    }

    /// Pairs values with a domain already known to contain all of them.
    pub(crate) fn with_domain(values: Vec<String>, domain: Domain) -> Self {
        debug_assert!(values.iter().all(|v| domain.contains(v)));
        Self { values, domain }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    #[must_use]
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Replaces the domain if every current value belongs to it.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::DomainViolation`] naming the first value outside
    /// the new domain; the old domain is kept.
    pub fn set_domain(&mut self, domain: Vec<String>) -> Result<()> {
        let domain = Domain::new(domain);
        for value in &self.values {
            domain.check(value)?;
        }
        self.domain = domain;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`DatasetError::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&str> {
        check_index(index, self.len())?;
        Ok(&self.values[index])
    }

    /// # Errors
    ///
    /// Returns [`DatasetError::IndexOutOfRange`], [`DatasetError::TypeMismatch`]
    /// or [`DatasetError::DomainViolation`].
    pub fn update(&mut self, index: usize, value: Value) -> Result<()> {
        check_index(index, self.len())?;
        let value = value.into_text()?;
        self.domain.check(&value)?;
        self.values[index] = value;
        Ok(())
    }

    /// Replaces every value, keeping the domain.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::TypeMismatch`] or [`DatasetError::DomainViolation`].
    pub fn set_data(&mut self, values: Vec<Value>) -> Result<()> {
        let values = values
            .into_iter()
            .map(|v| {
                let v = v.into_text()?;
                self.domain.check(&v)?;
                Ok(v)
            })
            .collect::<Result<_>>()?;
        self.values = values;
        Ok(())
    }

    #[must_use]
    pub fn mode(&self) -> Option<&str> {
        information::mode(self.values.iter().map(String::as_str))
    }

    #[must_use]
    pub fn entropy(&self) -> f64 {
        information::entropy(&self.values)
    }
}
