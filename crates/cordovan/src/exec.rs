//! Execution primitives shared by every project operation
//!
//! Two flavors, both one subprocess per call:
//!
//! - [`run_action`] (the "void action"): resolves raw output plus the exit
//!   status. A nonzero exit code is data for the caller, not an error.
//! - [`capture_output`] (the "string action"): resolves only the accumulated
//!   output text, discarding the exit status entirely. Queries that parse the
//!   text further use this one. The asymmetry with [`run_action`] is
//!   intentional and part of the public contract.
//!
//! Arguments travel as a structured list end-to-end; nothing is joined into a
//! shell string and re-tokenized, so embedded spaces survive intact.

use std::path::Path;
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::time::timeout;

use crate::tool::CordovaTool;
use cordovan_core::prelude::*;
use cordovan_core::ActionResult;

/// Run the tool and resolve its output together with the exit status.
///
/// The child inherits the parent environment (plus any overrides from
/// `tool`), runs in `cwd` when given and in the caller's working directory
/// otherwise, and has its stdout accumulated chunk-by-chunk until exit.
/// `output` is the child's stdout verbatim (modulo lossy UTF-8 conversion):
/// no newline normalization and nothing appended.
///
/// Failure cases: executable missing ([`Error::ToolNotFound`]), any other
/// spawn-level error ([`Error::Spawn`]), and exceeding the configured
/// timeout ([`Error::Timeout`]). Nonzero exit resolves normally.
pub async fn run_action(
    tool: &CordovaTool,
    cwd: Option<&Path>,
    args: &[String],
) -> Result<ActionResult> {
    debug!(
        "Running: {} {} (cwd: {:?})",
        tool.program().display(),
        args.join(" "),
        cwd
    );

    let mut cmd = tool.command(args);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::ToolNotFound
            } else {
                Error::spawn(e.to_string())
            }
        })?;

    trace!("Cordova process started with PID: {:?}", child.id());

    let mut stdout = child.stdout.take().expect("stdout was configured");
    let stderr = child.stderr.take().expect("stderr was configured");
    tokio::spawn(stderr_reader(stderr));

    let collect = async {
        let mut buffer = Vec::new();
        stdout.read_to_end(&mut buffer).await?;
        trace!("stdout closed after {} bytes", buffer.len());

        // Stdout EOF only means the pipe closed; wait() captures the real
        // exit code once the process is reaped.
        let status = child.wait().await?;
        debug!("Cordova process exited with status: {:?}", status);

        Ok::<ActionResult, Error>(ActionResult {
            output: String::from_utf8_lossy(&buffer).to_string(),
            status_code: status.code(),
        })
    };

    match tool.timeout() {
        None => collect.await,
        Some(limit) => {
            // Bind first so the collect future (and its borrow of `child`)
            // is dropped before the kill below.
            let outcome = timeout(limit, collect).await;
            match outcome {
                Ok(result) => result,
                Err(_) => {
                    warn!("Cordova process exceeded {:?}, killing", limit);
                    if let Err(e) = child.kill().await {
                        error!("Failed to kill Cordova process: {}", e);
                    }
                    Err(Error::Timeout { elapsed: limit })
                }
            }
        }
    }
}

/// Run the tool and resolve only the accumulated stdout text.
///
/// The exit status is deliberately not surfaced here, nonzero included; a
/// query whose output failed to materialize simply parses to empty records.
pub async fn capture_output(
    tool: &CordovaTool,
    cwd: Option<&Path>,
    args: &[String],
) -> Result<String> {
    let result = run_action(tool, cwd, args).await?;
    Ok(result.output)
}

/// Drain stderr so the child never blocks on a full pipe; surfaced at trace
/// level only, stderr is not part of any parsed protocol.
async fn stderr_reader(stderr: tokio::process::ChildStderr) {
    let mut reader = BufReader::new(stderr).lines();

    while let Ok(Some(line)) = reader.next_line().await {
        trace!("stderr: {}", line);
    }

    trace!("stderr reader finished");
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// `sh` stands in for the Cordova CLI; the primitives only care about
    /// stdout and the exit status.
    fn sh() -> CordovaTool {
        CordovaTool::new("sh")
    }

    fn args(script: &str) -> Vec<String> {
        vec!["-c".to_string(), script.to_string()]
    }

    #[tokio::test]
    async fn test_void_action_zero_exit() {
        let result = run_action(&sh(), None, &args("echo hello")).await.unwrap();
        assert_eq!(result.status_code, Some(0));
        assert_eq!(result.output, "hello\n");
        assert!(result.success());
    }

    #[tokio::test]
    async fn test_void_action_nonzero_exit_resolves() {
        let result = run_action(&sh(), None, &args("echo broken; exit 7"))
            .await
            .unwrap();
        assert_eq!(result.status_code, Some(7));
        assert_eq!(result.output, "broken\n");
        assert!(!result.success());
    }

    #[tokio::test]
    async fn test_void_action_accumulates_lines_in_order() {
        let result = run_action(&sh(), None, &args("echo one; echo two; echo three"))
            .await
            .unwrap();
        assert_eq!(result.output, "one\ntwo\nthree\n");
    }

    #[tokio::test]
    async fn test_string_action_ignores_exit_code() {
        let output = capture_output(&sh(), None, &args("echo partial; exit 1"))
            .await
            .unwrap();
        assert_eq!(output, "partial\n");
    }

    #[tokio::test]
    async fn test_stderr_not_mixed_into_output() {
        let result = run_action(&sh(), None, &args("echo out; echo err >&2"))
            .await
            .unwrap();
        assert_eq!(result.output, "out\n");
    }

    #[tokio::test]
    async fn test_cwd_is_respected() {
        let temp = tempfile::tempdir().unwrap();
        let result = run_action(&sh(), Some(temp.path()), &args("pwd")).await.unwrap();

        let reported = result.output.trim();
        // Compare canonicalized paths; macOS tempdirs live behind /private
        assert_eq!(
            std::fs::canonicalize(reported).unwrap(),
            std::fs::canonicalize(temp.path()).unwrap()
        );
    }

    #[tokio::test]
    async fn test_spawn_missing_executable() {
        let tool = CordovaTool::new("/nonexistent/cordova-binary");
        let result = run_action(&tool, None, &[]).await;
        assert!(matches!(result, Err(Error::ToolNotFound)));
    }

    #[tokio::test]
    async fn test_timeout_kills_hung_process() {
        let tool = sh().with_timeout(Duration::from_millis(100));
        let result = run_action(&tool, None, &args("sleep 30")).await;
        assert!(matches!(result, Err(Error::Timeout { .. })));
    }

    #[tokio::test]
    async fn test_no_timeout_waits_for_exit() {
        let result = run_action(&sh(), None, &args("sleep 0.2; echo done"))
            .await
            .unwrap();
        assert_eq!(result.output, "done\n");
        assert_eq!(result.status_code, Some(0));
    }

    #[tokio::test]
    async fn test_structured_args_preserve_embedded_spaces() {
        // A shell-string split would mangle "two words" into two arguments
        let tool = CordovaTool::new("sh");
        let args = vec![
            "-c".to_string(),
            "printf '%s' \"$1\"".to_string(),
            "argv0".to_string(),
            "two words".to_string(),
        ];
        let result = run_action(&tool, None, &args).await.unwrap();
        assert_eq!(result.output, "two words");
    }

    #[tokio::test]
    async fn test_output_is_verbatim_stdout() {
        // CRLF survives and no trailing newline is invented for an
        // unterminated final chunk
        let result = run_action(&sh(), None, &args(r"printf 'a\r\nb'"))
            .await
            .unwrap();
        assert_eq!(result.output, "a\r\nb");
    }
}
