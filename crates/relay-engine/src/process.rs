//! Inference subprocess lifecycle.

use std::process::Stdio;

use tokio::process::{Child, ChildStdout, Command};

use crate::invocation::LaunchSpec;
use crate::{RelayError, Result};

/// Handle to a running inference subprocess.
///
/// Spawned with `kill_on_drop`, so the child is signalled whenever the
/// handle is dropped: normal completion, stop match, read error, unwind,
/// or a client disconnect dropping the response body. Orderly exit paths
/// should call [`InferenceProcess::shutdown`] to also reap the exit status;
/// `Drop` is the backstop for everything else.
#[derive(Debug)]
pub struct InferenceProcess {
    child: Child,
}

impl InferenceProcess {
    /// Spawn the binary described by `spec` with stdout piped.
    ///
    /// stdin and stderr go to the null device; the stdout pipe is the only
    /// channel to the inference binary.
    pub fn spawn(spec: &LaunchSpec) -> Result<Self> {
        let child = Command::new(&spec.binary)
            .args(spec.argv())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RelayError::Launch {
                binary: spec.binary.display().to_string(),
                source,
            })?;
        tracing::debug!(
            binary = %spec.binary.display(),
            pid = ?child.id(),
            "inference process spawned"
        );
        Ok(Self { child })
    }

    /// Take ownership of the child's stdout pipe.
    ///
    /// Fails with `NoStdout` if the pipe was not captured or was already
    /// taken.
    pub fn take_stdout(&mut self) -> Result<ChildStdout> {
        self.child.stdout.take().ok_or(RelayError::NoStdout)
    }

    /// OS pid, if the process has not yet been reaped.
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    /// Kill the child and wait for it to be reaped.
    ///
    /// Killing a process that already exited is not an error.
    pub async fn shutdown(&mut self) {
        if let Err(err) = self.child.kill().await {
            tracing::debug!(%err, "inference process already gone");
        }
    }
}
