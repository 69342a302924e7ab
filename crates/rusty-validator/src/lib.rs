//! Rusty Validator
//!
//! Chainable, per-field validation. Point the validator at a field with
//! [`Validator::set`], chain the rules it must satisfy, and read back one
//! error message per failing field.
//!
//! ```
//! use rusty_validator::Validator;
//!
//! let mut validator = Validator::new();
//!
//! validator.set("first_name", "John").not_empty(None);
//! validator
//!     .set("street_address", "123 Main")
//!     .not_empty(Some("Street Address is required"))
//!     .min_length(10, Some("Street address needs to be at least 10 characters long"));
//! validator.set("zip", 90210).is_zip(None);
//!
//! assert!(validator.has_errors());
//! assert_eq!(validator.errors().len(), 1);
//! assert_eq!(
//!     validator.error("street_address"),
//!     Some("Street address needs to be at least 10 characters long")
//! );
//! ```
//!
//! Predicates live in `rusty-validator-core`; this crate adds dynamic
//! values, message templates and error collection.

pub mod context;
pub mod error;
pub mod errors;
pub mod messages;
pub mod rule;
pub mod validator;
pub mod value;

pub use context::FieldContext;
pub use error::ValidatorError;
pub use errors::ErrorStore;
pub use messages::Messages;
pub use rule::{Rule, RuleId};
pub use validator::{FieldChain, Validator};
pub use value::Value;
