//! The validation core shared by every wrapper.

use crate::condition::{self, check_conditions};
use crate::error::ValidationError;
use crate::policy::{Policy, PolicyKind};
use crate::specification::ValueSpecification;
use crate::tracing_macros::trace_debug;
use std::fmt;
use std::marker::PhantomData;

/// A possibly-absent draft checked against the specification `S` under the
/// policy `P`.
///
/// Validity is never cached: every call to [`value_if_valid`],
/// [`is_valid`] or [`validate`] re-runs all conditions against the current
/// draft, so mutating `draft` between reads is always reflected.
///
/// [`value_if_valid`]: ValidatableValue::value_if_valid
/// [`is_valid`]: ValidatableValue::is_valid
/// [`validate`]: ValidatableValue::validate
pub struct ValidatableValue<S: ValueSpecification, P: Policy> {
    /// The value currently set, if any
    pub draft: Option<S::Value>,
    _marker: PhantomData<fn() -> (S, P)>,
}

impl<S: ValueSpecification, P: Policy> ValidatableValue<S, P> {
    /// An empty value.
    pub fn new() -> Self {
        Self::from_draft(None)
    }

    /// A value with an initial draft. The draft is not checked.
    pub fn with_draft(value: S::Value) -> Self {
        Self::from_draft(Some(value))
    }

    /// A value holding `draft` as is, present or not. Nothing is checked.
    pub fn from_draft(draft: Option<S::Value>) -> Self {
        Self {
            draft,
            _marker: PhantomData,
        }
    }

    /// A value whose initial draft is validated right away.
    ///
    /// Construction fails with the validation error instead of producing an
    /// invalid instance.
    pub fn constant(value: S::Value) -> Result<Self, ValidationError> {
        let result = Self::with_draft(value);

        if let Err(error) = result.validate() {
            trace_debug!(origin = %error.origin(), "eager construction rejected an invalid value");
            return Err(error);
        }

        Ok(result)
    }

    /// Policy of this value.
    pub fn policy(&self) -> PolicyKind {
        P::KIND
    }

    /// The draft if it passes validation.
    ///
    /// For [`Mandatory`](crate::Mandatory) an absent draft fails with
    /// `MandatoryValueIsNotSet`; for [`Optional`](crate::Optional) it yields
    /// `Ok(None)`. A present draft fails with `ValueIsNotValid` listing every
    /// failed condition.
    pub fn value_if_valid(&self) -> Result<P::Output<S::Value>, ValidationError> {
        self.value_if_valid_as(&S::display_name())
    }

    /// Same as [`value_if_valid`](Self::value_if_valid), reporting errors
    /// under `origin` instead of the specification's display name.
    pub fn value_if_valid_as(&self, origin: &str) -> Result<P::Output<S::Value>, ValidationError> {
        match &self.draft {
            None => P::absent(origin),
            Some(value) => {
                check_conditions(origin, &S::conditions(), value)?;
                Ok(P::present(value.clone()))
            }
        }
    }

    /// Validate the draft, discarding the value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_as(&S::display_name())
    }

    /// Same as [`validate`](Self::validate), reporting errors under `origin`.
    pub fn validate_as(&self, origin: &str) -> Result<(), ValidationError> {
        match &self.draft {
            None => P::absent::<()>(origin).map(|_| ()),
            Some(value) => check_conditions(origin, &S::conditions(), value),
        }
    }

    /// Whether [`validate`](Self::validate) succeeds for the current draft.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Descriptions of the conditions the current draft fails.
    ///
    /// Empty when the draft is absent or valid.
    pub fn failed_conditions(&self) -> Vec<String> {
        self.draft
            .as_ref()
            .map(|value| condition::failed_conditions(&S::conditions(), value))
            .unwrap_or_default()
    }
}

impl<S: ValueSpecification, P: Policy> Default for ValidatableValue<S, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ValueSpecification, P: Policy> Clone for ValidatableValue<S, P> {
    fn clone(&self) -> Self {
        Self::from_draft(self.draft.clone())
    }
}

impl<S: ValueSpecification, P: Policy> PartialEq for ValidatableValue<S, P> {
    fn eq(&self, other: &Self) -> bool {
        self.draft == other.draft
    }
}

impl<S: ValueSpecification, P: Policy> fmt::Debug for ValidatableValue<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatableValue")
            .field("specification", &S::display_name())
            .field("policy", &P::KIND)
            .field("draft", &self.draft)
            .finish()
    }
}
