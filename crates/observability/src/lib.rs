//! Tracing/logging setup shared by binaries, examples and tests.

pub mod tracing;

pub use crate::tracing::init;
