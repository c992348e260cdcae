//! Shorthand constructors for wrappers.

use crate::error::ValidationError;
use crate::specification::{BasicValue, ValueSpecification};
use crate::value::ValidatableValue;
use crate::wrapper::{NonRequired, NonRequiredBase, Required, RequiredBase, Wrapper};

/// Build wrappers straight from a specification type:
/// `Username::required()`, `Experience::non_required_with(3)`.
pub trait SpecificationExt: ValueSpecification + Sized {
    fn required() -> Required<Self> {
        Wrapper::new()
    }

    fn required_with(value: Self::Value) -> Required<Self> {
        Wrapper::with_value(value)
    }

    /// Fails if `value` does not satisfy the specification.
    fn required_const(value: Self::Value) -> Result<Required<Self>, ValidationError> {
        Wrapper::constant(value)
    }

    fn non_required() -> NonRequired<Self> {
        Wrapper::new()
    }

    fn non_required_with(value: Self::Value) -> NonRequired<Self> {
        Wrapper::with_value(value)
    }

    /// Fails if `value` does not satisfy the specification.
    fn non_required_const(value: Self::Value) -> Result<NonRequired<Self>, ValidationError> {
        Wrapper::constant(value)
    }

    /// A non-required wrapper holding `draft` as is.
    fn non_required_from(draft: Option<Self::Value>) -> NonRequired<Self> {
        Wrapper::from_core(ValidatableValue::from_draft(draft))
    }
}

impl<S: ValueSpecification> SpecificationExt for S {}

/// Wrap a plain value without declaring a specification: `42.wrapped()`.
pub trait WrapValue: BasicValue {
    fn wrapped(self) -> RequiredBase<Self> {
        Wrapper::with_value(self)
    }

    /// Same as [`wrapped`](WrapValue::wrapped), validated eagerly.
    fn wrapped_const(self) -> Result<RequiredBase<Self>, ValidationError> {
        Wrapper::constant(self)
    }

    fn wrapped_optional(self) -> NonRequiredBase<Self> {
        Wrapper::with_value(self)
    }
}

impl<T: BasicValue> WrapValue for T {}
