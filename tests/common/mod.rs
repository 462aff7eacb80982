//! Common test utilities for trackwalk integration tests.
//!
//! This module provides:
//! - Fixtures: a small catalog snapshot with followed artists and playlists
//! - `Harness`: both trees wired to an in-memory catalog, with every
//!   mutation recorded

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;
