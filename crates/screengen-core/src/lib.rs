//! Core types and utilities for the screengen layout compiler.
//!
//! This crate provides the foundational pieces shared by every backend:
//! - The layout DSL model, built leniently from a JSON value tree
//! - Value formatters (lengths, indentation, prop values)
//! - Identifier normalization for component calls and screen names
//! - Error types for the input boundary

pub mod errors;
pub mod format;
pub mod names;
pub mod node;

pub use errors::*;
pub use format::*;
pub use names::*;
pub use node::*;
