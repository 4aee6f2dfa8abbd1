//! Validator process execution.
//!
//! The validator's output is only meaningful once complete, so a run
//! collects two signals before returning: standard output reaching EOF,
//! and the process terminating with a status. Both are awaited
//! independently; neither order is assumed.

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::anyhow;

use super::invocation::ValidatorInvocation;
use crate::error::{LintError, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Options for running the validator.
#[derive(Debug, Clone, Default)]
pub struct ExecOptions {
    /// Kill the process after this long (None = no timeout).
    pub timeout: Option<Duration>,
}

/// Collected result of one validator process.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Exit code (None if killed by signal or timed out).
    pub exit_code: Option<i32>,

    /// Complete standard output. Empty when the run timed out.
    pub stdout: String,

    /// Complete standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the process was killed for exceeding the timeout.
    pub timed_out: bool,
}

/// Run the validator and wait for both its output and its exit.
///
/// # Errors
///
/// Returns `SpawnFailed` if the program cannot be started.
pub fn execute(invocation: &ValidatorInvocation, options: &ExecOptions) -> Result<ProcessOutput> {
    let start = Instant::now();

    let mut cmd = Command::new(&invocation.program);
    cmd.args(&invocation.args);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    tracing::debug!(command = %invocation.display(), "spawning validator");

    let mut child = cmd.spawn().map_err(|e| LintError::SpawnFailed {
        program: invocation.program_name(),
        message: e.to_string(),
    })?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| anyhow!("validator stdout was not captured"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| anyhow!("validator stderr was not captured"))?;

    let stdout_handle = thread::spawn(move || read_all(stdout));
    let stderr_handle = thread::spawn(move || read_all(stderr));

    let (status, timed_out) = wait(&mut child, options.timeout)?;

    // Descendants of a killed validator can hold its pipes open, so the
    // readers of a timed-out run are left to finish on their own
    let (stdout_output, stderr_output) = if timed_out {
        (String::new(), String::new())
    } else {
        (
            stdout_handle.join().unwrap_or_default(),
            stderr_handle.join().unwrap_or_default(),
        )
    };

    let duration = start.elapsed();
    tracing::debug!(
        code = ?status.code(),
        timed_out,
        elapsed_ms = duration.as_millis() as u64,
        "validator finished"
    );

    Ok(ProcessOutput {
        exit_code: if timed_out { None } else { status.code() },
        stdout: stdout_output,
        stderr: stderr_output,
        duration,
        timed_out,
    })
}

fn read_all(mut stream: impl Read) -> String {
    let mut bytes = Vec::new();
    // A read error leaves whatever arrived before it
    let _ = stream.read_to_end(&mut bytes);
    String::from_utf8_lossy(&bytes).into_owned()
}

fn wait(child: &mut Child, timeout: Option<Duration>) -> Result<(ExitStatus, bool)> {
    let Some(timeout) = timeout else {
        return Ok((child.wait()?, false));
    };

    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok((status, false));
        }
        if Instant::now() >= deadline {
            tracing::warn!(timeout_ms = timeout.as_millis() as u64, "validator timed out");
            // The process may exit between try_wait and kill
            let _ = child.kill();
            return Ok((child.wait()?, true));
        }
        thread::sleep(POLL_INTERVAL);
    }
}
