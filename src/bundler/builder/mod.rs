//! Pipeline orchestration and the stages that drive external tools.
//!
//! This module provides the main [`Bundler`] orchestrator that runs the
//! freeze-and-package pipeline.
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 checksum calculation for packaged entries
//! - [`invocation`] - PyInstaller command construction and execution
//! - [`orchestrator`] - Main [`Bundler`] struct and stage sequencing
//! - [`tool_detection`] - Python interpreter lookup and PyInstaller install

pub mod checksum;
pub mod invocation;
mod orchestrator;
pub mod tool_detection;

pub use orchestrator::{Bundler, PipelineOutcome};
pub use tool_detection::ToolStatus;
