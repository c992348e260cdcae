//! Ordered collection of validation errors gathered in one pass.

use crate::entity::Entity;
use crate::error::ValidationError;

/// Errors collected from several independent checks.
///
/// Replaces "throw on first failure" when a caller wants every problem at
/// once. Values read through [`collect`](Issues::collect) come back as
/// `Option`, so nothing invalid can be used by accident.
///
/// ```rust,ignore
/// let mut issues = Issues::new();
/// let first_name = issues.collect(user.first_name.valid_value());
/// let username = issues.collect(user.username.valid_value());
/// issues.into_result::<User>()?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Issues {
    issues: Vec<ValidationError>,
}

impl Issues {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the value of `result`, or record its error and return `None`.
    pub fn collect<T>(&mut self, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.issues.push(error);
                None
            }
        }
    }

    /// Record an error.
    pub fn push(&mut self, error: ValidationError) {
        self.issues.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.issues.iter()
    }

    pub fn as_slice(&self) -> &[ValidationError] {
        &self.issues
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.issues
    }

    /// `Ok(())` if nothing was recorded, otherwise `EntityIsNotValid` for
    /// `E` with its prepared report.
    pub fn into_result<E: Entity>(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(E::invalid(self.issues))
        }
    }
}

impl Extend<ValidationError> for Issues {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        self.issues.extend(iter);
    }
}

impl FromIterator<ValidationError> for Issues {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            issues: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Issues {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}

impl<'a> IntoIterator for &'a Issues {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

impl From<Vec<ValidationError>> for Issues {
    fn from(issues: Vec<ValidationError>) -> Self {
        Self { issues }
    }
}
