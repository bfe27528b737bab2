//! Testing infrastructure for rattle unit and integration tests.
//!
//! This crate provides utilities for writing robust tests:
//! - `TestWorld`: Fluent interface for declarative CLI test setup
//! - `assertions`: Custom assertions over the CLI's JSON output
//! - `fixtures`: Deal builders and sample collections

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::{DealBuilder, sample_pipeline};
pub use world::{CliResult, TestWorld};
