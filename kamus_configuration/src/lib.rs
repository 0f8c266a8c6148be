//! This crate contains all configuration-relevant code, including
//! the full configuration structure as well as methods needed to load
//! and validate it.
//!
//! Your starting point should probably be [`Configuration::load_from_default_path`].
//!
//! # Internals
//! The configuration structure is based on the concept of
//! unvalidated ("unresolved") and validated ("resolved") configuration
//! structures. The configuration file is first deserialized into an
//! unresolved structure, whose `resolve` (or `try_resolve`) method then
//! recursively validates it and produces the final [`Configuration`].
//! Any additional validation, such as rejecting a tracing filter that
//! doesn't parse, belongs in those `resolve` implementations.

mod error;
mod structure;
mod traits;
mod utilities;

pub use error::*;
pub use structure::*;
