//! Passenger rows and the validated dataset
//!
//! A [`Passenger`] is one row of the roster with canonical attribute names.
//! Nullable attributes are explicit `Option`s; the loader that produced the
//! rows is responsible for normalizing column names and parsing cells.
//!
//! A [`Dataset`] is an immutable, validated sequence of rows. Analyses borrow
//! it and never modify it, so running the same analysis twice on the same
//! dataset yields the same result regardless of what ran in between.
//!
//! # Serialization
//!
//! Rows implement `serde` traits using the canonical attribute names:
//!
//! ```json
//! {
//!   "pclass": 3,
//!   "sex": "male",
//!   "age": 22.0,
//!   "survived": false,
//!   "sibsp": 1,
//!   "parch": 0,
//!   "fare": 7.25,
//!   "name": "Braund, Mr. Owen Harris"
//! }
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::AnalysisError;

/// One passenger record.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Passenger {
    /// Ticket class (1 = first, 2 = second, 3 = third)
    pub pclass: u8,
    pub sex: String,
    /// Age in years; `None` when unknown
    #[serde(default)]
    pub age: Option<f64>,
    /// Whether the passenger survived; `None` when unknown
    #[serde(default)]
    pub survived: Option<bool>,
    /// Number of siblings and spouses aboard
    #[serde(default)]
    pub sibsp: u32,
    /// Number of parents and children aboard
    #[serde(default)]
    pub parch: u32,
    /// Ticket fare; `None` when unknown
    #[serde(default)]
    pub fare: Option<f64>,
    /// Full name in "Last, Title. First" form
    #[serde(default)]
    pub name: Option<String>,
}

impl Passenger {
    /// Creates a passenger with the given class and sex and every other
    /// attribute unknown or zero.
    #[must_use]
    pub fn new(pclass: u8, sex: impl Into<String>) -> Self {
        Self {
            pclass,
            sex: sex.into(),
            age: None,
            survived: None,
            sibsp: 0,
            parch: 0,
            fare: None,
            name: None,
        }
    }

    #[must_use]
    pub fn with_age(mut self, age: f64) -> Self {
        self.age = Some(age);
        self
    }

    #[must_use]
    pub fn with_survived(mut self, survived: bool) -> Self {
        self.survived = Some(survived);
        self
    }

    #[must_use]
    pub fn with_family(mut self, sibsp: u32, parch: u32) -> Self {
        self.sibsp = sibsp;
        self.parch = parch;
        self
    }

    #[must_use]
    pub fn with_fare(mut self, fare: f64) -> Self {
        self.fare = Some(fare);
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the size of the passenger's family aboard, counting the
    /// passenger themselves.
    ///
    /// Always at least 1.
    ///
    /// # Examples
    ///
    /// ```
    /// # use roster_analysis::Passenger;
    /// let passenger = Passenger::new(3, "male").with_family(1, 2);
    /// assert_eq!(passenger.family_size(), 4);
    /// ```
    #[must_use]
    pub fn family_size(&self) -> u32 {
        self.sibsp.saturating_add(self.parch).saturating_add(1)
    }

    fn validate(&self) -> Result<(), String> {
        if self.sex.trim().is_empty() {
            return Err("sex is empty".to_owned());
        }
        if let Some(age) = self.age
            && !(age.is_finite() && age >= 0.0)
        {
            return Err(format!("age must be a non-negative number, got {age}"));
        }
        if let Some(fare) = self.fare
            && !(fare.is_finite() && fare >= 0.0)
        {
            return Err(format!("fare must be a non-negative number, got {fare}"));
        }
        Ok(())
    }
}

/// An immutable, validated sequence of passenger rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<Passenger>,
}

impl Dataset {
    /// Validates `rows` and wraps them in a dataset.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidInput`] naming the first offending row if
    /// a row has an empty `sex`, or an `age` or `fare` that is negative or not
    /// a finite number.
    pub fn new(rows: Vec<Passenger>) -> crate::Result<Self> {
        for (idx, row) in rows.iter().enumerate() {
            row.validate()
                .map_err(|reason| AnalysisError::invalid_input(format!("row {idx}: {reason}")))?;
        }
        log::debug!("validated dataset of {} rows", rows.len());
        Ok(Self { rows })
    }

    #[must_use]
    pub fn rows(&self) -> &[Passenger] {
        &self.rows
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Passenger> + '_ {
        self.rows.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the distinct classes present in the data, sorted ascending.
    #[must_use]
    pub fn observed_classes(&self) -> Vec<u8> {
        self.rows
            .iter()
            .map(|row| row.pclass)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Returns the distinct sexes present in the data, sorted ascending.
    #[must_use]
    pub fn observed_sexes(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.sex.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }
}

impl TryFrom<Vec<Passenger>> for Dataset {
    type Error = AnalysisError;

    fn try_from(rows: Vec<Passenger>) -> crate::Result<Self> {
        Self::new(rows)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Passenger;
    type IntoIter = std::slice::Iter<'a, Passenger>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
