//! # Valida
//!
//! Declarative validation for form-like records.
//!
//! Each field of a record is a wrapper around a draft value. The wrapper
//! knows which conditions the value must meet and whether it may be left
//! empty; the record validates every wrapper at once and raises a single
//! error listing each problem, with a report ready for display.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use valida::prelude::*;
//!
//! enum FirstName {}
//!
//! impl ValueSpecification for FirstName {
//!     type Value = String;
//!
//!     fn conditions() -> Vec<Condition<String>> {
//!         vec![conditions::non_empty()]
//!     }
//! }
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
//! #[derive(Entity)]
//! struct User {
//!     first_name: Required<FirstName>,
//!     username: Required<Username>,
//!     vip: NonRequiredBase<bool>,
//! }
//!
//! let user = User {
//!     first_name: FirstName::required(),
//!     username: Username::required_with("john@example.com".into()),
//!     vip: NonRequiredBase::new(),
//! };
//!
//! let error = user.validate().unwrap_err();
//! assert_eq!(error.issues().len(), 1);
//! println!("{}", error.report());
//! ```
//!
//! ## Optional Features
//!
//! - `derive` (default) - `#[derive(Entity)]`
//! - `tracing` (default) - `tracing` events from the engine: failed
//!   conditions, absent mandatory values, entity results
//!
//! ```toml
//! [dependencies]
//! valida = { version = "0.1", default-features = false, features = ["derive"] }
//! ```

// Re-export core functionality
pub use valida_core::*;

// Re-export the derive; it lives in the macro namespace next to the trait
#[cfg(feature = "derive")]
pub use valida_macros::Entity;

/// Prelude module - import everything you need with `use valida::prelude::*`
pub mod prelude {
    pub use valida_core::prelude::*;

    #[cfg(feature = "derive")]
    pub use valida_macros::Entity;

    // Re-export serde for specifications over custom value types
    pub use serde::{Deserialize, Serialize};
}
