//! Core library for Pinver.
//!
//! This crate drives the plugin lifecycle that decides the next release:
//! verifying conditions, analyzing commits and generating notes.

mod error;
mod pipeline;
mod registry;
mod release;
mod version;

pub use error::{CoreError, CoreResult};
pub use pipeline::Pipeline;
pub use registry::{PluginFactory, PluginRegistry};
pub use release::ReleaseManager;
pub use version::{FIRST_RELEASE, VersionManager};
