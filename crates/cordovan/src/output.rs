//! Parsers for the Cordova CLI's line-oriented stdout protocols
//!
//! Three ad hoc textual formats are consumed: the `info` dump, `plugin list`
//! lines, and the `platform list` summary line. Parsing never fails: text
//! that does not match the expected shape is skipped and absent sections
//! degrade to empty results.

use std::sync::LazyLock;

use regex::Regex;

use cordovan_core::{PlatformInfo, PluginInfo, ProjectInfo};

/// Closing tag of the config.xml widget block in `info` output
const WIDGET_CLOSE: &str = "</widget>";

/// Marker preceding the plugin-name section in `info` output
const PLUGINS_MARKER: &str = "Plugins:";

/// Prefix of the `platform list` summary line
const INSTALLED_PREFIX: &str = "Installed platforms: ";

/// One `plugin list` line: `<id> <version> "<name>"`
static PLUGIN_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(\S+)\s+(\S+)\s+"(.*)"\s*$"#).expect("Invalid plugin line regex")
});

/// Parse `cordova info` output.
///
/// Two passes over the same lines: pass 1 accumulates everything up to and
/// including the line containing [`WIDGET_CLOSE`]; pass 2 resumes at that
/// line, looks for [`PLUGINS_MARKER`], and takes every non-blank line after
/// it as a plugin name. A missing widget block leaves `config` empty and
/// restarts the plugin scan from the top; a missing marker leaves
/// `plugin_names` empty.
pub fn parse_info(output: &str) -> ProjectInfo {
    let lines: Vec<&str> = output.lines().collect();

    let mut config = String::new();
    let mut resume_at = 0;
    let mut buffer = String::new();
    for (i, line) in lines.iter().enumerate() {
        buffer.push_str(line);
        buffer.push('\n');
        if line.contains(WIDGET_CLOSE) {
            config = buffer;
            resume_at = i;
            break;
        }
    }

    let plugin_names = lines[resume_at..]
        .iter()
        .skip_while(|line| !line.contains(PLUGINS_MARKER))
        .skip(1) // the marker line itself
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.trim().to_string())
        .collect();

    ProjectInfo {
        config,
        plugin_names,
    }
}

/// Parse `cordova plugin list` output.
///
/// One record per matching line, in output order. Non-matching lines (for
/// example "No plugins added.") produce no record.
pub fn parse_plugin_list(output: &str) -> Vec<PluginInfo> {
    output
        .lines()
        .filter_map(|line| {
            let caps = PLUGIN_LINE.captures(line.trim())?;
            Some(PluginInfo {
                id: caps[1].to_string(),
                version: caps[2].to_string(),
                name: caps[3].to_string(),
            })
        })
        .collect()
}

/// Parse `cordova platform list` output.
///
/// Scans for the line beginning [`INSTALLED_PREFIX`], splits the remainder
/// on commas, and reads each entry as `<id> <version>`. Entries missing a
/// version are skipped.
pub fn parse_platform_list(output: &str) -> Vec<PlatformInfo> {
    let Some(installed) = output
        .lines()
        .find_map(|line| line.trim_start().strip_prefix(INSTALLED_PREFIX))
    else {
        return Vec::new();
    };

    installed
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.trim().split_whitespace();
            let id = parts.next()?;
            let version = parts.next()?;
            Some(PlatformInfo {
                id: id.to_string(),
                version: version.to_string(),
            })
        })
        .collect()
}
