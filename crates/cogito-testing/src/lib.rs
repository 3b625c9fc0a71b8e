//! Testing infrastructure for cogito integration tests.
//!
//! - `TestWorld`: temp-directory corpus placement plus pre-wired binary
//!   invocations
//! - `fixtures`: sample corpora shared by engine and CLI tests

pub mod fixtures;
pub mod world;

pub use world::TestWorld;
