//! Option sets for plugin and platform management commands
//!
//! Each struct maps its truthy fields to CLI flags in a fixed order, so the
//! same option set always produces the same argument vector. Flags are only
//! ever appended once.

use std::path::PathBuf;

/// Separator for `--searchpath` values; the Cordova CLI follows the
/// platform's PATH convention.
pub const SEARCH_PATH_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Options for `cordova plugin add`
#[derive(Debug, Clone, Default)]
pub struct AddPluginOptions {
    /// Local directories searched for the plugin before the registry.
    /// Passed as one `--searchpath` argument, entries joined with
    /// [`SEARCH_PATH_SEPARATOR`].
    pub search_paths: Vec<PathBuf>,
    /// `--noregistry`: never consult the plugin registry
    pub no_registry: bool,
    /// `--link`: symlink instead of copying
    pub link: bool,
    /// `--save`: record the plugin in config.xml
    pub save: bool,
    /// `--shrinkwrap`: pin the resolved version
    pub shrinkwrap: bool,
    /// `--browserify`: bundle plugin JS via browserify
    pub browserify: bool,
}

impl AddPluginOptions {
    pub(crate) fn append_args(&self, args: &mut Vec<String>) {
        if !self.search_paths.is_empty() {
            args.push("--searchpath".to_string());
            args.push(join_paths(&self.search_paths, SEARCH_PATH_SEPARATOR));
        }
        if self.no_registry {
            args.push("--noregistry".to_string());
        }
        if self.link {
            args.push("--link".to_string());
        }
        if self.save {
            args.push("--save".to_string());
        }
        if self.shrinkwrap {
            args.push("--shrinkwrap".to_string());
        }
        if self.browserify {
            args.push("--browserify".to_string());
        }
    }
}

/// Options for `cordova plugin remove`
#[derive(Debug, Clone, Default)]
pub struct RemovePluginOptions {
    /// `--save`: drop the plugin from config.xml as well
    pub save: bool,
}

impl RemovePluginOptions {
    pub(crate) fn append_args(&self, args: &mut Vec<String>) {
        if self.save {
            args.push("--save".to_string());
        }
    }
}

/// Options for `cordova platform add`
#[derive(Debug, Clone, Default)]
pub struct AddPlatformOptions {
    /// `--usegit`: fetch the platform from git instead of npm
    pub usegit: bool,
    /// `--save`: record the platform in config.xml
    pub save: bool,
    /// `--link`: symlink instead of copying
    pub link: bool,
}

impl AddPlatformOptions {
    pub(crate) fn append_args(&self, args: &mut Vec<String>) {
        if self.usegit {
            args.push("--usegit".to_string());
        }
        if self.save {
            args.push("--save".to_string());
        }
        if self.link {
            args.push("--link".to_string());
        }
    }
}

/// Options for `cordova platform remove`
#[derive(Debug, Clone, Default)]
pub struct RemovePlatformOptions {
    /// `--save`: drop the platform from config.xml as well
    pub save: bool,
}

impl RemovePlatformOptions {
    pub(crate) fn append_args(&self, args: &mut Vec<String>) {
        if self.save {
            args.push("--save".to_string());
        }
    }
}

/// Options for `cordova platform update`.
///
/// Unlike [`AddPlatformOptions`] there is no `--link` here; `platform update`
/// does not take it.
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    /// `--usegit`: fetch the platform from git instead of npm
    pub usegit: bool,
    /// `--save`: record the new version in config.xml
    pub save: bool,
}

impl UpdateOptions {
    pub(crate) fn append_args(&self, args: &mut Vec<String>) {
        if self.usegit {
            args.push("--usegit".to_string());
        }
        if self.save {
            args.push("--save".to_string());
        }
    }
}

/// Join search paths into a single well-formed argument value
fn join_paths(paths: &[PathBuf], separator: char) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(&separator.to_string())
}
