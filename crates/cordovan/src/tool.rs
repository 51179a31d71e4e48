//! Cordova CLI location and invocation configuration
//!
//! A [`CordovaTool`] bundles everything the execution primitives need that
//! would otherwise be ambient state: which executable to run, extra
//! environment variables, and an optional per-invocation timeout.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::process::Command;

use cordovan_core::prelude::*;

/// Default executable name looked up on PATH
pub const DEFAULT_PROGRAM: &str = "cordova";

/// Invocation configuration for the Cordova CLI.
///
/// The configuration is cheap to clone and carries no handles to running
/// processes; every invocation spawns a fresh child.
#[derive(Debug, Clone)]
pub struct CordovaTool {
    /// Executable name or path
    program: PathBuf,
    /// Extra environment variables layered over the inherited environment
    envs: Vec<(OsString, OsString)>,
    /// Kill the child and fail the call after this long. `None` means wait
    /// forever, matching the CLI's own behavior.
    timeout: Option<Duration>,
}

impl Default for CordovaTool {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl CordovaTool {
    /// Use the given executable name or path
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            envs: Vec::new(),
            timeout: None,
        }
    }

    /// Locate `cordova` on PATH, failing fast if it is not installed
    pub fn detect() -> Result<Self> {
        Self::find(DEFAULT_PROGRAM)
    }

    /// Locate an arbitrary executable on PATH
    pub fn find(program: &str) -> Result<Self> {
        let resolved = which::which(program).map_err(|e| {
            debug!("lookup of '{}' failed: {}", program, e);
            Error::ToolNotFound
        })?;
        info!("Found Cordova CLI at {}", resolved.display());
        Ok(Self::new(resolved))
    }

    /// Fail invocations that run longer than `limit`
    pub fn with_timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }

    /// Add an environment variable on top of the inherited environment
    pub fn with_env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Executable name or path this configuration will invoke
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Configured invocation timeout, if any
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Build the `tokio` command for one invocation.
    ///
    /// On Windows the call is routed through the command interpreter
    /// (`cmd /s /c <program> <args...>`) because npm installs the Cordova CLI
    /// as a `.cmd` shim; elsewhere the program is invoked directly.
    pub(crate) fn command(&self, args: &[String]) -> Command {
        #[cfg(windows)]
        let mut cmd = {
            let mut cmd = Command::new("cmd");
            cmd.arg("/s").arg("/c").arg(&self.program).args(args);
            cmd
        };

        #[cfg(not(windows))]
        let mut cmd = {
            let mut cmd = Command::new(&self.program);
            cmd.args(args);
            cmd
        };

        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_program() {
        let tool = CordovaTool::default();
        assert_eq!(tool.program(), Path::new(DEFAULT_PROGRAM));
        assert!(tool.timeout().is_none());
    }

    #[test]
    fn test_find_missing_tool() {
        let result = CordovaTool::find("definitely-not-a-real-executable-1b2c3");
        assert!(matches!(result, Err(Error::ToolNotFound)));
    }

    #[test]
    fn test_builder_chain() {
        let tool = CordovaTool::new("/opt/cordova/bin/cordova")
            .with_timeout(Duration::from_secs(30))
            .with_env("NO_COLOR", "1");

        assert_eq!(tool.program(), Path::new("/opt/cordova/bin/cordova"));
        assert_eq!(tool.timeout(), Some(Duration::from_secs(30)));
    }

    #[cfg(unix)]
    #[test]
    fn test_find_resolves_absolute_path() {
        // `sh` exists on any POSIX host the tests run on
        let tool = CordovaTool::find("sh").expect("sh must be on PATH");
        assert!(tool.program().is_absolute());
    }
}
