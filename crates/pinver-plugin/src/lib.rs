//! Plugin contract for Pinver.
//!
//! This crate provides the types shared between the host and its plugins:
//! - [`Plugin`]: Base trait for all plugins
//! - [`LifecycleHooks`]: The `verify_conditions` / `analyze_commits` /
//!   `generate_notes` hooks the host drives
//! - [`ReleaseContext`]: The host-owned record describing the release
//! - [`PluginConfig`]: Options configured for a single plugin

mod config;
mod context;
mod error;
mod release_type;
mod traits;

pub use config::PluginConfig;
pub use context::{LastRelease, NextRelease, ReleaseContext};
pub use error::{PluginError, PluginResult};
pub use release_type::{ParseReleaseTypeError, ReleaseType};
pub use traits::Plugin;
pub use traits::lifecycle::LifecycleHooks;
