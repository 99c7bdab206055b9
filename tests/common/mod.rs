//! Shared test utilities for emprec integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod assertions;
pub mod builders;
pub mod encoders;
pub mod fixtures;

pub use builders::*;
pub use encoders::*;
pub use fixtures::*;
