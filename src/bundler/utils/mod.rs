//! Shared helpers for the bundling stages.

pub mod fs;
