//! Test utilities: in-memory repositories and fixtures.

mod fixtures;
mod mocks;

pub use fixtures::*;
pub use mocks::*;
