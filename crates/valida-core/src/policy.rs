//! Mandatory vs optional semantics over one validation core.

use crate::error::ValidationError;
use crate::tracing_macros::trace_trace;
use serde::{Deserialize, Serialize};

/// Runtime tag of a [`Policy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// An absent value is a validation failure
    Mandatory,
    /// An absent value is valid
    Optional,
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Mandatory {}
    impl Sealed for super::Optional {}
}

/// Decides whether absence of a draft is an error, and what shape a valid
/// value is returned in.
///
/// Sealed: the only policies are [`Mandatory`] and [`Optional`].
pub trait Policy: sealed::Sealed + Send + Sync + 'static {
    /// Runtime tag
    const KIND: PolicyKind;

    /// What a successful read yields for a value of type `V`.
    type Output<V>;

    /// Outcome of reading an absent draft.
    fn absent<V>(origin: &str) -> Result<Self::Output<V>, ValidationError>;

    /// Wrap a present, valid value.
    fn present<V>(value: V) -> Self::Output<V>;
}

/// Absence is an error; valid reads yield `V`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Mandatory;

impl Policy for Mandatory {
    const KIND: PolicyKind = PolicyKind::Mandatory;

    type Output<V> = V;

    fn absent<V>(origin: &str) -> Result<Self::Output<V>, ValidationError> {
        trace_trace!(origin, "mandatory value is not set");
        Err(ValidationError::mandatory_value_is_not_set(origin))
    }

    fn present<V>(value: V) -> Self::Output<V> {
        value
    }
}

/// Absence is valid; valid reads yield `Option<V>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Optional;

impl Policy for Optional {
    const KIND: PolicyKind = PolicyKind::Optional;

    type Output<V> = Option<V>;

    fn absent<V>(_origin: &str) -> Result<Self::Output<V>, ValidationError> {
        Ok(None)
    }

    fn present<V>(value: V) -> Self::Output<V> {
        Some(value)
    }
}
