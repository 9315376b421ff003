//! Dialog invoker: one request, at most one live process

use tracing::debug;

use crate::decode::DialogResult;
use crate::error::{Result, ZenityError};
use crate::process::DialogProcess;
use crate::request::DialogRequest;

#[derive(Debug)]
pub struct Dialog {
    request: DialogRequest,
    process: Option<DialogProcess>,
}

impl Dialog {
    /// Wrap `request`, spawning immediately when `request.start` is set
    pub fn open(request: DialogRequest) -> Result<Self> {
        let mut dialog = Self {
            request,
            process: None,
        };
        if dialog.request.start {
            dialog.run()?;
        }
        Ok(dialog)
    }

    /// Spawn the process. A dialog that is already running is left as is.
    pub fn run(&mut self) -> Result<()> {
        if self.process.is_some() {
            debug!("Dialog {} already started", self.request.kind);
            return Ok(());
        }
        let args = self.request.args();
        self.process = Some(DialogProcess::spawn(&args, self.request.max_history)?);
        Ok(())
    }

    pub fn request(&self) -> &DialogRequest {
        &self.request
    }

    pub fn is_started(&self) -> bool {
        self.process.is_some()
    }

    pub fn is_running(&mut self) -> bool {
        self.process.as_mut().map(|p| p.is_running()).unwrap_or(false)
    }

    pub fn process_mut(&mut self) -> Result<&mut DialogProcess> {
        self.process.as_mut().ok_or(ZenityError::NotStarted)
    }

    /// Next line of output, trimmed
    pub fn read(&mut self) -> Result<String> {
        Ok(self.process_mut()?.read_line())
    }

    /// Remaining output as one string
    pub fn read_all(&mut self) -> Result<String> {
        Ok(self.process_mut()?.read_to_end())
    }

    /// Read one line and decode it with the kind's rule
    pub fn result(&mut self) -> Result<DialogResult> {
        let line = self.read()?;
        Ok(self.request.effective_decoder().decode(&line))
    }

    pub fn write_line(&mut self, line: &str) -> Result<()> {
        self.process_mut()?.write_line(line)
    }

    /// Wait for the dialog to close; `true` when the user accepted it
    /// (OK / Yes)
    pub fn accepted(&mut self) -> Result<bool> {
        Ok(self.process_mut()?.wait()?.success())
    }

    pub fn stop(&mut self) -> Result<()> {
        match self.process.as_mut() {
            Some(process) => process.stop(),
            None => Ok(()),
        }
    }

    pub fn history(&self) -> &[String] {
        self.process.as_ref().map(|p| p.history()).unwrap_or(&[])
    }
}
