//! Named predicates over a value type.

use crate::error::ValidationError;
use crate::tracing_macros::{trace_debug, trace_trace};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Type alias for condition predicates to reduce complexity.
type PredicateFn<V> = Arc<dyn Fn(&V) -> bool + Send + Sync>;

/// A named, pure predicate over `V`.
///
/// The predicate may run any number of times per validation pass, so it
/// must not have side effects. Conditions are cheap to clone and can be
/// shared between specifications.
///
/// ```rust,ignore
/// let adult = Condition::new("At least 18 years old", |age: &u32| *age >= 18);
/// assert!(adult.check(&21));
/// ```
pub struct Condition<V> {
    description: Cow<'static, str>,
    predicate: PredicateFn<V>,
}

impl<V> Condition<V> {
    /// Create a condition from a description and a predicate.
    pub fn new<F>(description: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        Self {
            description: description.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Description used in reports and in `failed_conditions`.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Evaluate the predicate. Never fails.
    pub fn check(&self, value: &V) -> bool {
        (self.predicate)(value)
    }
}

impl<V> Clone for Condition<V> {
    fn clone(&self) -> Self {
        Self {
            description: self.description.clone(),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<V> fmt::Debug for Condition<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Descriptions of every condition `value` fails, in declaration order.
///
/// All conditions are evaluated; there is no short-circuit on the first
/// failure.
pub fn failed_conditions<V>(conditions: &[Condition<V>], value: &V) -> Vec<String> {
    conditions
        .iter()
        .filter(|condition| !condition.check(value))
        .map(|condition| condition.description().to_string())
        .collect()
}

/// Check `value` against `conditions` on behalf of `origin`.
///
/// Returns `ValueIsNotValid` listing every failed condition. The offending
/// value is captured as JSON; a value serde cannot represent as JSON (e.g. a
/// map with non-string keys) is recorded as `null` and logged at debug level.
pub fn check_conditions<V: Serialize>(
    origin: &str,
    conditions: &[Condition<V>],
    value: &V,
) -> Result<(), ValidationError> {
    let failed = failed_conditions(conditions, value);

    if failed.is_empty() {
        return Ok(());
    }

    trace_trace!(origin, failed = ?failed, "value is not valid");

    let value = match serde_json::to_value(value) {
        Ok(value) => value,
        Err(_error) => {
            trace_debug!(origin, error = %_error, "failed value could not be captured as JSON");
            serde_json::Value::Null
        }
    };
    Err(ValidationError::value_is_not_valid(origin, value, failed))
}
