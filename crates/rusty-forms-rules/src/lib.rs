//! rusty-forms rules
//!
//! Pure value predicates shared by the field validators. Nothing in here knows
//! about UI fields, configuration maps or messages catalogs: every function
//! takes the raw value plus its parameters and answers `bool` or
//! `Result<(), String>` with a human readable reason.

pub mod date;
pub mod email;
pub mod numeric;
pub mod password;
pub mod string;
pub mod username;

// Re-export all rules
pub use date::*;
pub use email::*;
pub use numeric::*;
pub use password::*;
pub use string::*;
pub use username::*;
