//! Project handle: lifecycle, plugin, and platform operations
//!
//! A [`Project`] is a thin handle over a project directory. Every method
//! builds an argument list, runs the Cordova CLI once in that directory, and
//! resolves the raw or parsed result. There is no state beyond the directory
//! and the tool configuration, no caching, and nothing to tear down.

use std::path::{Path, PathBuf};

use crate::exec;
use crate::options::{
    AddPlatformOptions, AddPluginOptions, RemovePlatformOptions, RemovePluginOptions,
    UpdateOptions,
};
use crate::output;
use crate::tool::CordovaTool;
use cordovan_core::prelude::*;
use cordovan_core::{ActionResult, PlatformInfo, PluginInfo, ProjectInfo};

/// Project descriptor file whose presence marks a valid Cordova project
pub const DESCRIPTOR_FILE: &str = "config.xml";

/// A handle to a Cordova project directory
#[derive(Debug, Clone)]
pub struct Project {
    dir: PathBuf,
    tool: CordovaTool,
}

impl Project {
    // ─────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────

    /// Scaffold a new project in the current working directory and open it.
    ///
    /// Runs `cordova create <name> [id] [title]`. On exit code 0 the newly
    /// created `./<name>` directory is opened; a nonzero exit fails with
    /// [`Error::CreationFailed`] carrying the exit code and captured output.
    pub async fn create(name: &str, id: Option<&str>, title: Option<&str>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::create_in(CordovaTool::default(), &cwd, name, id, title).await
    }

    /// Scaffold a new project under `parent_dir` with an explicit tool
    /// configuration.
    pub async fn create_in(
        tool: CordovaTool,
        parent_dir: &Path,
        name: &str,
        id: Option<&str>,
        title: Option<&str>,
    ) -> Result<Self> {
        let mut args = vec!["create".to_string(), name.to_string()];
        if let Some(id) = id {
            args.push(id.to_string());
        }
        if let Some(title) = title {
            args.push(title.to_string());
        }

        info!("Creating Cordova project '{}' in {}", name, parent_dir.display());
        let result = exec::run_action(&tool, Some(parent_dir), &args).await?;

        if !result.success() {
            return Err(Error::CreationFailed {
                code: result.status_code,
                output: result.output,
            });
        }

        Self::open_with(tool, parent_dir.join(name)).await
    }

    /// Open an existing project directory with the default tool.
    ///
    /// Fails with [`Error::NotAProject`] when `config.xml` is absent or
    /// inaccessible directly under `dir`; exactly one outcome is produced.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        Self::open_with(CordovaTool::default(), dir).await
    }

    /// Open an existing project directory with an explicit tool configuration
    pub async fn open_with(tool: CordovaTool, dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        let descriptor = dir.join(DESCRIPTOR_FILE);

        match tokio::fs::metadata(&descriptor).await {
            Ok(_) => {
                debug!("Opened Cordova project at {}", dir.display());
                Ok(Self { dir, tool })
            }
            Err(e) => {
                debug!("No {} under {}: {}", DESCRIPTOR_FILE, dir.display(), e);
                Err(Error::not_a_project(dir))
            }
        }
    }

    /// Project directory this handle is bound to
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Tool configuration used for every invocation from this handle
    pub fn tool(&self) -> &CordovaTool {
        &self.tool
    }

    // ─────────────────────────────────────────────────────────────
    // Lifecycle commands
    // ─────────────────────────────────────────────────────────────

    /// `cordova prepare [platform] [args...]`
    pub async fn prepare(
        &self,
        platform: Option<&str>,
        extra_args: &[String],
    ) -> Result<ActionResult> {
        self.lifecycle("prepare", platform, extra_args).await
    }

    /// `cordova compile [platform] [args...]`
    pub async fn compile(
        &self,
        platform: Option<&str>,
        extra_args: &[String],
    ) -> Result<ActionResult> {
        self.lifecycle("compile", platform, extra_args).await
    }

    /// `cordova build [platform] [args...]`
    pub async fn build(
        &self,
        platform: Option<&str>,
        extra_args: &[String],
    ) -> Result<ActionResult> {
        self.lifecycle("build", platform, extra_args).await
    }

    /// `cordova run [platform] [args...]`
    pub async fn run(
        &self,
        platform: Option<&str>,
        extra_args: &[String],
    ) -> Result<ActionResult> {
        self.lifecycle("run", platform, extra_args).await
    }

    /// `cordova emulate [platform] [args...]`
    pub async fn emulate(
        &self,
        platform: Option<&str>,
        extra_args: &[String],
    ) -> Result<ActionResult> {
        self.lifecycle("emulate", platform, extra_args).await
    }

    /// `cordova serve`
    pub async fn serve(&self) -> Result<ActionResult> {
        self.run_action(&["serve".to_string()]).await
    }

    // ─────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────

    /// Run `cordova info` and parse the config.xml block and plugin names.
    ///
    /// Fails only when the invocation itself fails; malformed output parses
    /// to empty fields.
    pub async fn info(&self) -> Result<ProjectInfo> {
        let text = self.capture(&["info".to_string()]).await?;
        Ok(output::parse_info(&text))
    }

    /// Run `cordova plugin list` and parse the installed plugins.
    ///
    /// Lines that do not match `<id> <version> "<name>"` are skipped, so a
    /// project without plugins yields an empty list.
    pub async fn plugins(&self) -> Result<Vec<PluginInfo>> {
        let text = self
            .capture(&["plugin".to_string(), "list".to_string()])
            .await?;
        Ok(output::parse_plugin_list(&text))
    }

    /// Run `cordova platform list` and parse the installed platforms
    pub async fn platforms(&self) -> Result<Vec<PlatformInfo>> {
        let text = self
            .capture(&["platform".to_string(), "list".to_string()])
            .await?;
        Ok(output::parse_platform_list(&text))
    }

    // ─────────────────────────────────────────────────────────────
    // Plugin management
    // ─────────────────────────────────────────────────────────────

    /// `cordova plugin add <spec>` plus the flags enabled in `options`
    pub async fn add_plugin(
        &self,
        spec: &str,
        options: &AddPluginOptions,
    ) -> Result<ActionResult> {
        let mut args = vec!["plugin".to_string(), "add".to_string(), spec.to_string()];
        options.append_args(&mut args);
        self.run_action(&args).await
    }

    /// `cordova plugin remove <id>` plus `--save` if requested
    pub async fn remove_plugin(
        &self,
        plugin_id: &str,
        options: &RemovePluginOptions,
    ) -> Result<ActionResult> {
        let mut args = vec![
            "plugin".to_string(),
            "remove".to_string(),
            plugin_id.to_string(),
        ];
        options.append_args(&mut args);
        self.run_action(&args).await
    }

    // ─────────────────────────────────────────────────────────────
    // Platform management
    // ─────────────────────────────────────────────────────────────

    /// `cordova platform add <spec>` plus the flags enabled in `options`
    pub async fn add_platform(
        &self,
        spec: &str,
        options: &AddPlatformOptions,
    ) -> Result<ActionResult> {
        let mut args = vec!["platform".to_string(), "add".to_string(), spec.to_string()];
        options.append_args(&mut args);
        self.run_action(&args).await
    }

    /// `cordova platform remove <name>` plus `--save` if requested
    pub async fn remove_platform(
        &self,
        name: &str,
        options: &RemovePlatformOptions,
    ) -> Result<ActionResult> {
        let mut args = vec![
            "platform".to_string(),
            "remove".to_string(),
            name.to_string(),
        ];
        options.append_args(&mut args);
        self.run_action(&args).await
    }

    /// `cordova platform update [name]` plus the flags enabled in `options`
    pub async fn update(
        &self,
        name: Option<&str>,
        options: &UpdateOptions,
    ) -> Result<ActionResult> {
        let mut args = vec!["platform".to_string(), "update".to_string()];
        if let Some(name) = name {
            args.push(name.to_string());
        }
        options.append_args(&mut args);
        self.run_action(&args).await
    }

    /// Always fails with [`Error::NotImplemented`].
    ///
    /// Kept as a stable, testable contract rather than silently dropped.
    pub async fn check_for_updates(&self) -> Result<()> {
        Err(Error::not_implemented("checkForUpdates"))
    }

    // ─────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────

    async fn lifecycle(
        &self,
        verb: &str,
        platform: Option<&str>,
        extra_args: &[String],
    ) -> Result<ActionResult> {
        let args = lifecycle_args(verb, platform, extra_args);
        self.run_action(&args).await
    }

    async fn run_action(&self, args: &[String]) -> Result<ActionResult> {
        exec::run_action(&self.tool, Some(&self.dir), args).await
    }

    async fn capture(&self, args: &[String]) -> Result<String> {
        exec::capture_output(&self.tool, Some(&self.dir), args).await
    }
}

/// Build `<verb> [platform] [extra...]` as a structured argument list
fn lifecycle_args(verb: &str, platform: Option<&str>, extra_args: &[String]) -> Vec<String> {
    let mut args = vec![verb.to_string()];
    if let Some(platform) = platform {
        args.push(platform.to_string());
    }
    args.extend(extra_args.iter().cloned());
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_args_verb_only() {
        assert_eq!(lifecycle_args("build", None, &[]), vec!["build"]);
    }

    #[test]
    fn test_lifecycle_args_with_platform() {
        assert_eq!(
            lifecycle_args("run", Some("android"), &[]),
            vec!["run", "android"]
        );
    }

    #[test]
    fn test_lifecycle_args_with_extras() {
        let extras = vec!["--release".to_string(), "--device".to_string()];
        assert_eq!(
            lifecycle_args("build", Some("ios"), &extras),
            vec!["build", "ios", "--release", "--device"]
        );
    }

    #[test]
    fn test_lifecycle_args_extras_without_platform() {
        let extras = vec!["--debug".to_string()];
        assert_eq!(
            lifecycle_args("emulate", None, &extras),
            vec!["emulate", "--debug"]
        );
    }

    #[tokio::test]
    async fn test_open_missing_descriptor_is_a_single_error() {
        let temp = tempfile::tempdir().unwrap();

        let result = Project::open(temp.path()).await;
        match result {
            Err(Error::NotAProject { path }) => assert_eq!(path, temp.path()),
            other => panic!("expected NotAProject, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_open_nonexistent_directory() {
        let result = Project::open("/nonexistent/project/dir").await;
        assert!(matches!(result, Err(Error::NotAProject { .. })));
    }

    #[tokio::test]
    async fn test_open_with_descriptor_present() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join(DESCRIPTOR_FILE), "<widget/>").unwrap();

        let project = Project::open(temp.path()).await.unwrap();
        assert_eq!(project.dir(), temp.path());
    }

    #[tokio::test]
    async fn test_descriptor_must_be_directly_under_dir() {
        // A descriptor in a subdirectory does not make the parent a project
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("www");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join(DESCRIPTOR_FILE), "<widget/>").unwrap();

        assert!(matches!(
            Project::open(temp.path()).await,
            Err(Error::NotAProject { .. })
        ));
    }

    #[tokio::test]
    async fn test_check_for_updates_is_not_implemented() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join(DESCRIPTOR_FILE), "<widget/>").unwrap();
        let project = Project::open(temp.path()).await.unwrap();

        let result = project.check_for_updates().await;
        assert!(matches!(
            result,
            Err(Error::NotImplemented {
                operation: "checkForUpdates"
            })
        ));
    }

    #[test]
    fn test_project_handle_is_cheap_to_clone() {
        let project = Project {
            dir: PathBuf::from("/tmp/app"),
            tool: CordovaTool::default(),
        };
        let clone = project.clone();
        assert_eq!(clone.dir(), project.dir());
    }
}
