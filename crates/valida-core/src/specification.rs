//! Declarative per-field value specifications.

use crate::condition::Condition;
use crate::display_name::intrinsic_display_name;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::marker::PhantomData;

/// Bounds every wrapped value must satisfy: comparable, printable and
/// serde round-trippable.
pub trait BasicValue:
    Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

impl<T> BasicValue for T where
    T: Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

/// Describes the allowed values of one kind of field.
///
/// Implement it on a zero-sized marker type, one per field semantics:
///
/// ```rust,ignore
/// enum Username {}
///
/// impl ValueSpecification for Username {
///     type Value = String;
///
///     fn conditions() -> Vec<Condition<String>> {
///         vec![conditions::non_empty(), conditions::email()]
///     }
/// }
/// ```
///
/// `conditions()` must return the same list on every call; its order is the
/// order failures are reported in.
pub trait ValueSpecification: 'static {
    /// The underlying value type
    type Value: BasicValue;

    /// Conditions a present value must satisfy. None by default.
    fn conditions() -> Vec<Condition<Self::Value>> {
        Vec::new()
    }

    /// End-user name of values of this kind.
    ///
    /// Defaults to the implementing type's own name without module path.
    fn display_name() -> String {
        intrinsic_display_name::<Self>()
    }
}

/// Specification for a plain value with no conditions.
///
/// Backs the `RequiredBase` and `NonRequiredBase` wrappers, used when a
/// field needs wrapper semantics but no special rules.
pub struct Basic<T>(PhantomData<fn() -> T>);

impl<T: BasicValue> ValueSpecification for Basic<T> {
    type Value = T;

    fn display_name() -> String {
        "Basic Value".to_string()
    }
}
