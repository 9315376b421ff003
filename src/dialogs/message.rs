//! Info, warning, question and error dialogs, plus notifications

use super::{plain_builder, DialogBuilder};
use crate::dialog::Dialog;
use crate::error::Result;
use crate::kind::DialogKind;
use crate::request::DialogRequest;

/// Message box. Title and window icon default per kind (see
/// [`crate::Preset`]) and can be overridden.
#[derive(Debug, Clone)]
pub struct MessageDialog {
    request: DialogRequest,
}

plain_builder!(MessageDialog);

impl MessageDialog {
    fn new(kind: DialogKind, text: impl Into<String>) -> Self {
        Self {
            request: DialogRequest::new(kind).option("text", text),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(DialogKind::Info, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(DialogKind::Warning, text)
    }

    pub fn question(text: impl Into<String>) -> Self {
        Self::new(DialogKind::Question, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(DialogKind::Error, text)
    }

    /// Icon shown inside the dialog body
    pub fn icon_name(mut self, icon: impl Into<String>) -> Self {
        self.request.options.set("icon-name", icon);
        self
    }

    pub fn no_wrap(mut self) -> Self {
        self.request.options.switch("no-wrap");
        self
    }

    pub fn no_markup(mut self) -> Self {
        self.request.options.switch("no-markup");
        self
    }

    pub fn ellipsize(mut self) -> Self {
        self.request.options.switch("ellipsize");
        self
    }

    /// Question dialogs only: focus Cancel instead of OK
    pub fn default_cancel(mut self) -> Self {
        self.request.options.switch("default-cancel");
        self
    }

    /// Show the dialog and block until it closes; `true` for OK / Yes
    pub fn confirm(self) -> Result<bool> {
        self.launch()?.accepted()
    }
}

/// Desktop notification. With `listen`, commands such as `message:text`
/// can be streamed through [`Dialog::write_line`].
#[derive(Debug, Clone)]
pub struct NotificationDialog {
    request: DialogRequest,
}

plain_builder!(NotificationDialog);

impl NotificationDialog {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            request: DialogRequest::new(DialogKind::Notification).option("text", text),
        }
    }

    pub fn listen(mut self) -> Self {
        self.request.options.switch("listen");
        self
    }

    pub fn show(self) -> Result<Dialog> {
        self.launch()
    }
}
