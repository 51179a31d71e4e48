//! Domain value types produced by Cordova CLI invocations
//!
//! Everything here is transient: each query recomputes its records from the
//! tool's output, nothing is cached or persisted.

use serde::{Deserialize, Serialize};

/// Outcome of an imperative Cordova command ("void action").
///
/// A nonzero exit code is ordinary data, not an error. Callers that care must
/// inspect [`status_code`](Self::status_code) explicitly. The code is `None`
/// when the child was terminated by a signal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ActionResult {
    /// Accumulated stdout of the tool, in arrival order
    pub output: String,
    /// Exit code of the tool process
    pub status_code: Option<i32>,
}

impl ActionResult {
    /// Whether the tool exited with code 0
    pub fn success(&self) -> bool {
        self.status_code == Some(0)
    }
}

/// Parsed output of `cordova info`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectInfo {
    /// The `config.xml` widget block echoed by the tool, up to and including
    /// the closing `</widget>` line. Empty when the tool printed no such block.
    pub config: String,
    /// Plugin names listed under the `Plugins:` marker
    pub plugin_names: Vec<String>,
}

/// A plugin installed in the project, one per `cordova plugin list` line
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PluginInfo {
    /// Plugin identifier, e.g. `cordova-plugin-camera`
    pub id: String,
    /// Installed version, e.g. `2.1.0`
    pub version: String,
    /// Human-readable name as quoted in the listing
    pub name: String,
}

/// A platform installed in the project
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlatformInfo {
    /// Platform identifier, e.g. `android`
    pub id: String,
    /// Installed version, e.g. `6.0.0`
    pub version: String,
}
