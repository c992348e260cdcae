//! Field wrappers and the capability the entity aggregator works with.

use crate::error::ValidationError;
use crate::issues::Issues;
use crate::policy::{Mandatory, Optional, Policy, PolicyKind};
use crate::specification::{Basic, ValueSpecification};
use crate::value::ValidatableValue;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Capability of an entity field that can validate itself.
///
/// [`Wrapper`] implements it, and so does `Option<Wrapper<..>>`. A custom
/// field type can implement it directly; the aggregator then calls that
/// `validate` instead of any automatic check.
pub trait ValueWrapper {
    /// Validate the current state.
    fn validate(&self) -> Result<(), ValidationError>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// End-user name used as the origin of this field's errors.
    fn display_name(&self) -> String;

    /// Whether absence of a value is an error for this field.
    fn is_mandatory(&self) -> bool {
        false
    }
}

/// A draft value checked against specification `S` under policy `P`.
///
/// Usually spelled through one of the aliases: [`Required`],
/// [`NonRequired`], [`RequiredBase`], [`NonRequiredBase`].
///
/// Every instance carries an `internal_identifier`, unique within the
/// process, that tells apart otherwise identical wrappers in error reports.
/// Clones and deserialized wrappers get a fresh one.
pub struct Wrapper<S: ValueSpecification, P: Policy> {
    core: ValidatableValue<S, P>,
    display_name: String,
    internal_identifier: Uuid,
}

/// Wrapper whose value must be set and valid.
pub type Required<S> = Wrapper<S, Mandatory>;

/// Wrapper whose value may be absent, but must be valid when set.
pub type NonRequired<S> = Wrapper<S, Optional>;

/// `Required` for a plain value type with no conditions.
pub type RequiredBase<T> = Required<Basic<T>>;

/// `NonRequired` for a plain value type with no conditions.
pub type NonRequiredBase<T> = NonRequired<Basic<T>>;

impl<S: ValueSpecification, P: Policy> Wrapper<S, P> {
    /// An empty wrapper.
    pub fn new() -> Self {
        Self::from_core(ValidatableValue::new())
    }

    /// A wrapper with an initial value. The value is not checked.
    pub fn with_value(value: S::Value) -> Self {
        Self::from_core(ValidatableValue::with_draft(value))
    }

    /// A wrapper whose initial value is validated eagerly.
    pub fn constant(value: S::Value) -> Result<Self, ValidationError> {
        ValidatableValue::constant(value).map(Self::from_core)
    }

    pub fn from_core(core: ValidatableValue<S, P>) -> Self {
        Self {
            core,
            display_name: S::display_name(),
            internal_identifier: Uuid::new_v4(),
        }
    }

    /// Override the display name used in reports.
    pub fn named(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn internal_identifier(&self) -> Uuid {
        self.internal_identifier
    }

    pub fn policy(&self) -> PolicyKind {
        P::KIND
    }

    pub fn core(&self) -> &ValidatableValue<S, P> {
        &self.core
    }

    pub fn draft(&self) -> Option<&S::Value> {
        self.core.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> &mut Option<S::Value> {
        &mut self.core.draft
    }

    /// Replace the draft.
    pub fn set(&mut self, value: S::Value) {
        self.core.draft = Some(value);
    }

    /// Remove the draft.
    pub fn clear(&mut self) {
        self.core.draft = None;
    }

    /// Best-effort read: the value if it is currently set and valid.
    ///
    /// Never fails; use [`valid_value`](Self::valid_value) to learn why a
    /// value is missing.
    pub fn value(&self) -> Option<S::Value> {
        match &self.core.draft {
            Some(value) if self.is_valid() => Some(value.clone()),
            _ => None,
        }
    }

    /// The value if valid, or the validation error tagged with this
    /// wrapper's `internal_identifier`.
    pub fn valid_value(&self) -> Result<P::Output<S::Value>, ValidationError> {
        self.core
            .value_if_valid_as(&self.display_name)
            .map_err(|error| error.with_internal_identifier(self.internal_identifier))
    }

    /// The value if valid; otherwise the error is recorded in `issues` and
    /// `None` is returned.
    ///
    /// Lets a caller read several wrappers and report every problem at once
    /// instead of stopping at the first.
    pub fn valid_value_into(&self, issues: &mut Issues) -> Option<P::Output<S::Value>> {
        issues.collect(self.valid_value())
    }

    /// Apply `transform` to the value if it is set and valid.
    pub fn map<U>(&self, transform: impl FnOnce(S::Value) -> U) -> Option<U> {
        self.value().map(transform)
    }

    /// Validate the draft. Errors carry this wrapper's `internal_identifier`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.core
            .validate_as(&self.display_name)
            .map_err(|error| error.with_internal_identifier(self.internal_identifier))
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl<S: ValueSpecification, P: Policy> ValueWrapper for Wrapper<S, P> {
    fn validate(&self) -> Result<(), ValidationError> {
        Wrapper::validate(self)
    }

    fn display_name(&self) -> String {
        self.display_name.clone()
    }

    fn is_mandatory(&self) -> bool {
        P::KIND == PolicyKind::Mandatory
    }
}

/// A field declared as an optional wrapper: `None` behaves like an empty
/// wrapper under the same policy.
impl<S: ValueSpecification, P: Policy> ValueWrapper for Option<Wrapper<S, P>> {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Some(wrapper) => wrapper.validate(),
            None => P::absent::<()>(&S::display_name()).map(|_| ()),
        }
    }

    fn display_name(&self) -> String {
        match self {
            Some(wrapper) => wrapper.display_name.clone(),
            None => S::display_name(),
        }
    }

    fn is_mandatory(&self) -> bool {
        P::KIND == PolicyKind::Mandatory
    }
}

impl<S: ValueSpecification, P: Policy> Default for Wrapper<S, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ValueSpecification, P: Policy> Clone for Wrapper<S, P> {
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
            display_name: self.display_name.clone(),
            internal_identifier: Uuid::new_v4(),
        }
    }
}

impl<S: ValueSpecification, P: Policy> PartialEq for Wrapper<S, P> {
    fn eq(&self, other: &Self) -> bool {
        self.core == other.core
    }
}

impl<S: ValueSpecification, P: Policy> fmt::Debug for Wrapper<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrapper")
            .field("display_name", &self.display_name)
            .field("policy", &P::KIND)
            .field("draft", &self.core.draft)
            .field("internal_identifier", &self.internal_identifier)
            .finish()
    }
}

impl<S: ValueSpecification, P: Policy> Serialize for Wrapper<S, P> {
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        self.core.draft.serialize(serializer)
    }
}

impl<'de, S: ValueSpecification, P: Policy> Deserialize<'de> for Wrapper<S, P> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let draft = Option::<S::Value>::deserialize(deserializer)?;
        Ok(Self::from_core(ValidatableValue::from_draft(draft)))
    }
}
