//! # cordovan - Async facade over the Apache Cordova CLI
//!
//! Wraps the `cordova` command-line tool behind a typed, asynchronous API.
//! Every operation spawns the tool once, captures its stdout, and resolves
//! either the raw output plus exit status or a parsed structure.
//!
//! ```no_run
//! use cordovan::{AddPluginOptions, Project};
//!
//! # async fn demo() -> cordovan::Result<()> {
//! let project = Project::open("./my-app").await?;
//!
//! let result = project.build(Some("android"), &[]).await?;
//! if !result.success() {
//!     eprintln!("build failed:\n{}", result.output);
//! }
//!
//! for plugin in project.plugins().await? {
//!     println!("{} {}", plugin.id, plugin.version);
//! }
//!
//! project
//!     .add_plugin("cordova-plugin-camera", &AddPluginOptions::default())
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module map
//!
//! - [`tool`] - Locating the CLI and configuring invocations (env, timeout)
//! - [`exec`] - The two execution primitives (void and string actions)
//! - [`project`] - The [`Project`] handle with all lifecycle operations
//! - [`options`] - Flag sets for plugin/platform management
//! - [`output`] - Parsers for the CLI's textual output protocols

pub mod exec;
pub mod options;
pub mod output;
pub mod project;
pub mod tool;

pub use options::{
    AddPlatformOptions, AddPluginOptions, RemovePlatformOptions, RemovePluginOptions,
    UpdateOptions,
};
pub use project::{Project, DESCRIPTOR_FILE};
pub use tool::CordovaTool;

// Re-export the foundation crate's surface so callers need one dependency
pub use cordovan_core::{ActionResult, Error, PlatformInfo, PluginInfo, ProjectInfo, Result};
