//! # cordovan-core - Core Domain Types
//!
//! Foundation crate for Cordovan. Provides the value types produced by
//! Cordova CLI queries, error handling, and the logging bootstrap.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ActionResult`] - Raw output + exit status of an imperative command
//! - [`ProjectInfo`] - Parsed `cordova info` output (config.xml block + plugin names)
//! - [`PluginInfo`] - One installed plugin from `cordova plugin list`
//! - [`PlatformInfo`] - One installed platform from `cordova platform list`
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use cordovan_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Cordovan crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use types::{ActionResult, PlatformInfo, PluginInfo, ProjectInfo};
