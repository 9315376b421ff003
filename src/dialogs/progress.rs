//! Progress dialog fed through the process's stdin

use tracing::debug;

use super::{plain_builder, DialogBuilder};
use crate::dialog::Dialog;
use crate::error::Result;
use crate::kind::DialogKind;
use crate::request::DialogRequest;

/// Percentage at which the dialog is closed
pub const COMPLETE: u32 = 100;

#[derive(Debug, Clone)]
pub struct ProgressDialog {
    request: DialogRequest,
}

plain_builder!(ProgressDialog);

impl Default for ProgressDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressDialog {
    pub fn new() -> Self {
        Self {
            request: DialogRequest::new(DialogKind::Progress),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.request.options.set("text", text);
        self
    }

    /// Initial percentage
    pub fn percentage(mut self, percentage: u32) -> Self {
        self.request.options.set("percentage", percentage.to_string());
        self
    }

    pub fn pulsate(mut self) -> Self {
        self.request.options.switch("pulsate");
        self
    }

    pub fn auto_close(mut self) -> Self {
        self.request.options.switch("auto-close");
        self
    }

    pub fn no_cancel(mut self) -> Self {
        self.request.options.switch("no-cancel");
        self
    }

    pub fn time_remaining(mut self) -> Self {
        self.request.options.switch("time-remaining");
        self
    }

    pub fn show(self) -> Result<Progress> {
        let initial = self
            .request
            .options
            .value("percentage")
            .and_then(|p| p.parse().ok())
            .unwrap_or(0);
        Ok(Progress {
            dialog: self.open()?,
            progress: initial,
        })
    }
}

/// Running progress dialog
#[derive(Debug)]
pub struct Progress {
    dialog: Dialog,
    progress: u32,
}

impl Progress {
    pub fn progress(&self) -> u32 {
        self.progress
    }

    /// Send `progress` to the dialog. Reaching 100 closes it.
    ///
    /// The dialog is killed right after the final write, so it may close
    /// before it ever displays that last value.
    pub fn set_progress(&mut self, progress: u32) -> Result<()> {
        self.dialog.write_line(&progress.to_string())?;
        self.progress = progress;
        debug!("Progress at {}", progress);
        if progress >= COMPLETE {
            self.dialog.stop()?;
        }
        Ok(())
    }

    /// Replace the label text (zenity reads `# text` lines as labels)
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        self.dialog.write_line(&format!("# {}", text))
    }

    pub fn is_running(&mut self) -> bool {
        self.dialog.is_running()
    }

    pub fn stop(&mut self) -> Result<()> {
        self.dialog.stop()
    }

    pub fn dialog_mut(&mut self) -> &mut Dialog {
        &mut self.dialog
    }
}
