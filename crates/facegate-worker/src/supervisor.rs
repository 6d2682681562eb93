//! Worker process lifecycle: spawn, capture output streams, map the exit
//! status to one terminal result.

use std::path::PathBuf;
use std::process::Stdio;

use facegate_core::{Error, Result};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Specification of one worker launch. Built per request and never reused.
#[derive(Debug, Clone)]
pub struct WorkerCommand {
    /// Program to execute (interpreter or binary).
    pub program: PathBuf,
    /// Positional arguments, in order.
    pub args: Vec<String>,
    /// Working directory for the worker.
    pub cwd: PathBuf,
    /// Environment overrides merged onto the inherited environment.
    pub env: Vec<(String, String)>,
}

/// Terminal result of a worker that was successfully spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerOutcome {
    Success {
        stdout: String,
    },
    Failure {
        exit_code: i32,
        stdout: String,
        stderr: String,
    },
}

/// One chunk of worker output, in arrival order.
enum StreamChunk {
    Stdout(Vec<u8>),
    Stderr(Vec<u8>),
}

/// Run a worker process to completion and capture its output.
///
/// Spawns the program with piped stdout/stderr, forwards both streams
/// through a channel so capture never blocks the worker, and waits for the
/// child after both streams are exhausted. Exit code 0 maps to
/// [`WorkerOutcome::Success`], anything else to [`WorkerOutcome::Failure`];
/// a process that could not be started at all yields [`Error::Spawn`].
///
/// No timeout is imposed: a worker that never terminates blocks the calling
/// request indefinitely.
pub async fn run_worker(cmd: &WorkerCommand) -> Result<WorkerOutcome> {
    let invocation = Uuid::new_v4();
    info!(
        %invocation,
        program = %cmd.program.display(),
        args = ?cmd.args,
        cwd = %cmd.cwd.display(),
        "Spawning worker"
    );

    let mut child = Command::new(&cmd.program)
        .args(&cmd.args)
        .current_dir(&cmd.cwd)
        .envs(cmd.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            error!(%invocation, "Spawn error: {}", e);
            Error::Spawn(e.to_string())
        })?;

    let child_stdout = child
        .stdout
        .take()
        .ok_or_else(|| Error::Spawn("worker stdout pipe unavailable".into()))?;
    let child_stderr = child
        .stderr
        .take()
        .ok_or_else(|| Error::Spawn("worker stderr pipe unavailable".into()))?;

    // Both readers feed one channel; the channel closes when both pipes hit
    // EOF, so draining it sees every byte even if the worker exits right
    // after writing.
    let (tx, mut rx) = mpsc::channel::<StreamChunk>(64);
    let stderr_tx = tx.clone();
    tokio::spawn(pump(child_stdout, tx, StreamChunk::Stdout));
    tokio::spawn(pump(child_stderr, stderr_tx, StreamChunk::Stderr));

    let mut stdout_buf: Vec<u8> = Vec::new();
    let mut stderr_buf: Vec<u8> = Vec::new();

    while let Some(chunk) = rx.recv().await {
        match chunk {
            StreamChunk::Stdout(bytes) => {
                info!(%invocation, "[worker stdout] {}", String::from_utf8_lossy(&bytes).trim_end());
                stdout_buf.extend_from_slice(&bytes);
            }
            StreamChunk::Stderr(bytes) => {
                warn!(%invocation, "[worker stderr] {}", String::from_utf8_lossy(&bytes).trim_end());
                stderr_buf.extend_from_slice(&bytes);
            }
        }
    }

    let status = child.wait().await?;

    let stdout = String::from_utf8_lossy(&stdout_buf).into_owned();
    let stderr = String::from_utf8_lossy(&stderr_buf).into_owned();

    if status.success() {
        info!(%invocation, "Worker completed");
        Ok(WorkerOutcome::Success { stdout })
    } else {
        // A signal death has no exit code; -1 stands in for it.
        let exit_code = status.code().unwrap_or(-1);
        error!(%invocation, exit_code, "Worker failed");
        Ok(WorkerOutcome::Failure {
            exit_code,
            stdout,
            stderr,
        })
    }
}

/// Forward one pipe's bytes into the shared channel until EOF.
async fn pump<R>(
    mut reader: R,
    tx: mpsc::Sender<StreamChunk>,
    wrap: fn(Vec<u8>) -> StreamChunk,
) where
    R: AsyncRead + Unpin,
{
    let mut buf = [0u8; 4096];
    loop {
        match reader.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => {
                if tx.send(wrap(buf[..n].to_vec())).await.is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    }
}
