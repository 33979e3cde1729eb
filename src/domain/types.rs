//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., a non-empty application
//! number) so that once a value reaches the domain layer it can be treated as
//! trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
}

/// Length of the compact `YYYYMMDD` date representation.
const COMPACT_DATE_LEN: usize = 8;

/// Parses a `YYYYMMDD` string into a calendar date.
///
/// Anything other than exactly eight ASCII digits forming a real calendar
/// date yields `None`; callers treat that as "no value".
pub fn parse_compact_date(value: &str) -> Option<NaiveDate> {
    if !is_compact_date_shape(value) {
        return None;
    }
    let year = value[0..4].parse().ok()?;
    let month = value[4..6].parse().ok()?;
    let day = value[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Returns `true` when the value looks like a compact date (eight digits).
///
/// This is a shape check only; `20201345` passes here but does not parse.
pub fn is_compact_date_shape(value: &str) -> bool {
    value.len() == COMPACT_DATE_LEN && value.bytes().all(|b| b.is_ascii_digit())
}

/// Unique textual identifier of a trademark filing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ApplicationNumber(String);

impl ApplicationNumber {
    /// Trims the value and ensures it is not empty.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the application number as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for ApplicationNumber {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ApplicationNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ApplicationNumber {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ApplicationNumber {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ApplicationNumber> for String {
    fn from(value: ApplicationNumber) -> Self {
        value.0
    }
}
