//! Rusty Validator Core
//!
//! Pure predicate functions over field text. Every function here is a total
//! `&str -> bool` (or `usize`-bounded) check with no state; the engine in
//! `rusty-validator` decides how values are stringified before they get here.

pub mod email;
pub mod network;
pub mod numeric;
pub mod phone;
pub mod string;

// Re-export all validators
pub use email::*;
pub use network::*;
pub use numeric::*;
pub use phone::*;
pub use string::*;
