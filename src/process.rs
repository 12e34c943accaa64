//! Subprocess execution for [`Command`]: spawn `pdftotext` with a discrete
//! argument list, capture stdout/stderr, and map failures onto `ExecError`.
//!
//! Plain runs block in `wait_with_output`. Timed and cancellable runs drain the
//! pipes on reader threads and poll the child, so the child can be killed and
//! reaped without leaking zombies. A stopped run returns right after the reap:
//! its reader threads are detached and exit once every inherited copy of the
//! pipes is closed, which for a child that forked helpers may be later.
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, ExitStatus, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, warn};

use crate::command::Command;
use crate::error::{Error, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Failures of the `pdftotext` subprocess itself
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to start {path:?}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {}", describe_code(.code), .stderr.trim())]
    Exit { code: Option<i32>, stderr: String },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {c}"),
        None => "terminated by signal".to_string(),
    }
}

/// When to give up on a running child.
pub(crate) enum Stop<'a> {
    Never,
    After(Duration),
    Flag(&'a AtomicBool),
}

pub(crate) fn execute(cmd: &Command, input: &Path, stop: Stop<'_>) -> Result<Vec<u8>> {
    debug!(command = %cmd.describe_redacted(), input = ?input, "running pdftotext");

    // a deadline beyond what `Instant` can represent is no deadline at all
    let deadline = match stop {
        Stop::After(timeout) => Instant::now().checked_add(timeout).map(|at| (at, timeout)),
        _ => None,
    };

    let mut child = std::process::Command::new(cmd.path())
        .args(cmd.invocation_args(input))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| {
            warn!(path = ?cmd.path(), error = %source, "could not start pdftotext");
            ExecError::Spawn {
                path: cmd.path().to_path_buf(),
                source,
            }
        })?;

    let (status, stdout, stderr) = match (stop, deadline) {
        (Stop::After(_), Some((at, timeout))) => wait_polling(child, || {
            (Instant::now() >= at).then_some(Error::Timeout(timeout))
        })?,
        (Stop::Flag(cancel), _) => wait_polling(child, || {
            cancel.load(Ordering::SeqCst).then_some(Error::Cancelled)
        })?,
        (Stop::Never | Stop::After(_), _) => {
            let output = child.wait_with_output()?;
            (output.status, output.stdout, output.stderr)
        }
    };

    if !status.success() {
        let stderr = String::from_utf8_lossy(&stderr).into_owned();
        warn!(
            input = ?input,
            code = ?status.code(),
            stderr = %stderr.trim(),
            "pdftotext failed"
        );
        return Err(ExecError::Exit {
            code: status.code(),
            stderr,
        }
        .into());
    }

    debug!(input = ?input, bytes = stdout.len(), "pdftotext finished");
    Ok(stdout)
}

/// Poll `child` until it exits or `should_stop` yields an error. On stop the
/// child is killed and reaped and the reader threads are left to finish alone.
fn wait_polling<F>(mut child: Child, should_stop: F) -> Result<(ExitStatus, Vec<u8>, Vec<u8>)>
where
    F: Fn() -> Option<Error>,
{
    let stdout_reader = child.stdout.take().map(spawn_reader);
    let stderr_reader = child.stderr.take().map(spawn_reader);

    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {}
            Err(e) => {
                kill_and_reap(&mut child);
                return Err(e.into());
            }
        }
        if let Some(err) = should_stop() {
            warn!(pid = child.id(), error = %err, "stopping pdftotext");
            kill_and_reap(&mut child);
            return Err(err);
        }
        thread::sleep(POLL_INTERVAL);
    };

    let stdout = join_reader(stdout_reader)?;
    let stderr = join_reader(stderr_reader)?;
    Ok((status, stdout, stderr))
}

fn spawn_reader<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        pipe.read_to_end(&mut buf)?;
        Ok(buf)
    })
}

fn join_reader(reader: Option<JoinHandle<io::Result<Vec<u8>>>>) -> io::Result<Vec<u8>> {
    match reader {
        Some(handle) => handle
            .join()
            .map_err(|_| io::Error::other("pipe reader thread panicked"))?,
        None => Ok(Vec::new()),
    }
}

fn kill_and_reap(child: &mut Child) {
    // the child may already have exited between polls
    let _ = child.kill();
    let _ = child.wait();
}
