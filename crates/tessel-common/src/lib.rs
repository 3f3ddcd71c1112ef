//! Common utilities for the Tessel style engine.
//!
//! This crate provides shared infrastructure used by the CSS crates:
//! - **Warning System** - colored, deduplicated terminal output for rejected
//!   declarations and unsupported features

pub mod warning;
