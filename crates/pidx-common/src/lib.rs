//! Shared types for the Pattern Index workspace.
//!
//! This crate holds the identity and error types used by every other
//! pattern-index crate:
//! - [`PatternId`]: validated pattern identifier with a canonical form
//! - [`Error`] / [`Result`]: unified error type with stable codes

pub mod error;
pub mod id;

pub use error::{Error, Result};
pub use id::PatternId;
