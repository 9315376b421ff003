//! Spawned zenity processes
//!
//! A [`DialogProcess`] owns the child and both pipes. Dropping it terminates
//! the child if it is still running, so every exit path cleans up.

use std::io::{BufRead, BufReader, Read, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, ChildStdout, Command, ExitStatus, Stdio};

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::Result;

/// Executable name looked up on PATH
pub const ZENITY_BINARY: &str = "zenity";

/// Find zenity on PATH. When it is missing the bare name is returned and the
/// OS reports the failure at spawn time.
pub fn locate_binary() -> PathBuf {
    which::which(ZENITY_BINARY).unwrap_or_else(|_| PathBuf::from(ZENITY_BINARY))
}

pub struct DialogProcess {
    id: Uuid,
    child: Child,
    stdin: Option<ChildStdin>,
    stdout: Option<BufReader<ChildStdout>>,
    history: Vec<String>,
    max_history: usize,
}

impl DialogProcess {
    /// Launch `args[0]` with the remaining arguments, stdin and stdout piped
    pub fn spawn(args: &[String], max_history: usize) -> Result<Self> {
        let id = Uuid::new_v4();
        let (program, rest) = match args.split_first() {
            Some(split) => split,
            None => {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "empty argument vector",
                )
                .into())
            }
        };

        debug!("Dialog {}: {:?}", id, args);

        let mut child = Command::new(program)
            .args(rest)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()?;

        info!("Dialog {} started (pid {})", id, child.id());

        let stdin = child.stdin.take();
        let stdout = child.stdout.take().map(BufReader::new);

        Ok(Self {
            id,
            child,
            stdin,
            stdout,
            history: Vec::new(),
            max_history,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn pid(&self) -> u32 {
        self.child.id()
    }

    /// Read one line of output, trimmed. EOF and read failures give an empty
    /// string.
    pub fn read_line(&mut self) -> String {
        let mut line = String::new();
        if let Some(stdout) = self.stdout.as_mut() {
            if let Err(e) = stdout.read_line(&mut line) {
                warn!("Dialog {}: read failed: {}", self.id, e);
                line.clear();
            }
        }

        let line = line.trim().to_string();
        self.remember(line.clone());
        line
    }

    /// Read everything left on stdout (multi-line text-info output)
    pub fn read_to_end(&mut self) -> String {
        let mut text = String::new();
        if let Some(stdout) = self.stdout.as_mut() {
            if let Err(e) = stdout.read_to_string(&mut text) {
                warn!("Dialog {}: read failed: {}", self.id, e);
                text.clear();
            }
        }

        let text = text.trim_end().to_string();
        self.remember(text.clone());
        text
    }

    /// Write `line` plus a newline to stdin and flush
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        let stdin = self.stdin.as_mut().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin already closed")
        })?;
        stdin.write_all(line.as_bytes())?;
        stdin.write_all(b"\n")?;
        stdin.flush()?;
        Ok(())
    }

    pub fn is_running(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }

    /// Block until the process exits. Its exit code carries the answer of
    /// question dialogs.
    pub fn wait(&mut self) -> Result<ExitStatus> {
        self.stdin.take();
        Ok(self.child.wait()?)
    }

    /// Terminate the process and reap it. Already exited processes are left
    /// alone.
    pub fn stop(&mut self) -> Result<()> {
        self.stdin.take();
        if self.child.try_wait()?.is_some() {
            return Ok(());
        }

        self.child.kill()?;
        self.child.wait()?;
        info!("Dialog {} stopped", self.id);
        Ok(())
    }

    /// Lines read so far, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    fn remember(&mut self, line: String) {
        if self.max_history == 0 {
            return;
        }
        if self.history.len() >= self.max_history {
            let excess = self.history.len() + 1 - self.max_history;
            self.history.drain(..excess);
        }
        self.history.push(line);
    }
}

impl Drop for DialogProcess {
    fn drop(&mut self) {
        if self.is_running() {
            if let Err(e) = self.stop() {
                warn!("Dialog {}: failed to terminate: {}", self.id, e);
            }
        }
    }
}

impl std::fmt::Debug for DialogProcess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogProcess")
            .field("id", &self.id)
            .field("pid", &self.child.id())
            .field("history", &self.history)
            .finish()
    }
}
