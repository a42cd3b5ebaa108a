//! Helpers shared by unit tests, integration tests and doc examples.

pub mod support;
