//! # Valida Core
//!
//! Validation engine for form-like records. Each field declares a
//! specification of its allowed values; values are held in wrappers whose
//! validity is checked on demand, and an entity validates all of its
//! wrappers at once into a single structured error.
//!
//! ## Example
//!
//! ```rust,ignore
//! use valida_core::prelude::*;
//!
//! enum Username {}
//!
//! impl ValueSpecification for Username {
//!     type Value = String;
//!
//!     fn conditions() -> Vec<Condition<String>> {
//!         vec![conditions::non_empty(), conditions::email()]
//!     }
//! }
//!
//! let mut username = Required::<Username>::new();
//! assert!(username.validate().unwrap_err().is_value_not_set());
//!
//! username.set("not-an-email".to_string());
//! let error = username.validate().unwrap_err();
//! assert_eq!(error.failed_conditions(), ["Valid email address"]);
//! ```
//!
//! ## Three independent axes
//!
//! - **policy**: [`Mandatory`] (absence is an error) or [`Optional`]
//!   (absence is valid), a type parameter of [`Wrapper`]
//! - **specification**: a custom [`ValueSpecification`] or [`Basic`] for a
//!   plain value with no conditions
//! - **validity**: recomputed on every read from the live draft
//!
//! ## Error Format
//!
//! Every [`ValidationError`] carries a [`Report`] and serializes to JSON:
//!
//! ```json
//! {
//!   "type": "entity_is_not_valid",
//!   "origin": "User",
//!   "issues": [
//!     { "type": "mandatory_value_is_not_set", "origin": "FirstName", "field": "first_name", "report": { "title": "\"FirstName\" is not set", "message": "..." } }
//!   ],
//!   "report": { "title": "\"User\" is invalid", "message": "\"User\" has 1 issue(s):\n- \"FirstName\" is not set" }
//! }
//! ```

mod tracing_macros;

pub mod condition;
pub mod conditions;
pub mod display_name;
mod entity;
mod error;
mod issues;
mod policy;
mod report;
mod specification;
mod value;
mod wrap;
mod wrapper;

#[cfg(test)]
mod tests;

pub use condition::Condition;
pub use display_name::{intrinsic_display_name, strip_type_path};
pub use entity::{validate_entity, Entity, Member};
pub use error::ValidationError;
pub use issues::Issues;
pub use policy::{Mandatory, Optional, Policy, PolicyKind};
pub use report::Report;
pub use specification::{Basic, BasicValue, ValueSpecification};
pub use value::ValidatableValue;
pub use wrap::{SpecificationExt, WrapValue};
pub use wrapper::{NonRequired, NonRequiredBase, Required, RequiredBase, ValueWrapper, Wrapper};

/// Prelude module for validation
pub mod prelude {
    pub use crate::conditions;
    pub use crate::condition::Condition;
    pub use crate::entity::{Entity, Member};
    pub use crate::error::ValidationError;
    pub use crate::issues::Issues;
    pub use crate::policy::{Mandatory, Optional};
    pub use crate::report::Report;
    pub use crate::specification::{Basic, ValueSpecification};
    pub use crate::wrap::{SpecificationExt, WrapValue};
    pub use crate::wrapper::{
        NonRequired, NonRequiredBase, Required, RequiredBase, ValueWrapper, Wrapper,
    };
}
