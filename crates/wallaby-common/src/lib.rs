//! Common utilities for the Wallaby engine.
//!
//! This crate provides shared infrastructure used by the other components:
//! - **Warning System** - deduplicated, colored terminal output for parse
//!   errors and unsupported features

pub mod warning;
