//! Testing infrastructure for linkhub integration tests.
//!
//! - `TestWorld`: isolated data directory plus a way to run the binary in it
//! - `fixtures`: links files used across tests
//! - `assertions`: checks against the JSON envelope printed with `--format json`

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
