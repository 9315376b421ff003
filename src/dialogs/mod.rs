//! Typed builders, one per dialog kind
//!
//! Every builder lowers into a [`DialogRequest`] and shares the same
//! invoker. The generic setters live on [`DialogBuilder`]; kind-specific
//! options and result accessors live on each builder.

mod forms;
mod input;
mod list;
mod message;
mod progress;

pub use forms::{FormField, FormFieldType, FormsDialog};
pub use input::{
    CalendarDialog, ColorDialog, EntryDialog, FileSelectionDialog, PasswordDialog, ScaleDialog,
    TextInfoDialog,
};
pub use list::{list_args, ListDialog, ListRow};
pub use message::{MessageDialog, NotificationDialog};
pub use progress::{Progress, ProgressDialog};

use std::path::PathBuf;

use crate::config::ZenityConfig;
use crate::dialog::Dialog;
use crate::error::Result;
use crate::request::DialogRequest;

pub trait DialogBuilder: Sized {
    fn request_mut(&mut self) -> &mut DialogRequest;

    /// Final request, with any kind-specific trailing arguments appended
    fn into_request(self) -> Result<DialogRequest>;

    fn title(mut self, title: impl Into<String>) -> Self {
        self.request_mut().options.set("title", title);
        self
    }

    fn window_icon(mut self, icon: impl Into<String>) -> Self {
        self.request_mut().options.set("window-icon", icon);
        self
    }

    fn width(mut self, width: u32) -> Self {
        self.request_mut().options.set("width", width.to_string());
        self
    }

    fn height(mut self, height: u32) -> Self {
        self.request_mut().options.set("height", height.to_string());
        self
    }

    /// Seconds before zenity closes the dialog on its own
    fn timeout(mut self, seconds: u32) -> Self {
        self.request_mut().options.set("timeout", seconds.to_string());
        self
    }

    fn ok_label(mut self, label: impl Into<String>) -> Self {
        self.request_mut().options.set("ok-label", label);
        self
    }

    fn cancel_label(mut self, label: impl Into<String>) -> Self {
        self.request_mut().options.set("cancel-label", label);
        self
    }

    /// Any zenity option not covered by a typed setter
    fn option(mut self, name: &str, value: impl Into<String>) -> Self {
        self.request_mut().options.set(name, value);
        self
    }

    fn switch(mut self, name: &str) -> Self {
        self.request_mut().options.switch(name);
        self
    }

    fn binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.request_mut().binary = binary.into();
        self
    }

    fn config(mut self, config: &ZenityConfig) -> Self {
        self.request_mut().apply_config(config);
        self
    }

    fn start(mut self, start: bool) -> Self {
        self.request_mut().start = start;
        self
    }

    fn args(self) -> Result<Vec<String>> {
        Ok(self.into_request()?.args())
    }

    fn open(self) -> Result<Dialog> {
        Dialog::open(self.into_request()?)
    }

    /// Open, making sure the process runs even when `start(false)` was set
    fn launch(self) -> Result<Dialog> {
        let mut dialog = self.open()?;
        dialog.run()?;
        Ok(dialog)
    }
}

/// Builders whose request needs no post-processing
macro_rules! plain_builder {
    ($name:ident) => {
        impl $crate::dialogs::DialogBuilder for $name {
            fn request_mut(&mut self) -> &mut $crate::request::DialogRequest {
                &mut self.request
            }

            fn into_request(self) -> $crate::error::Result<$crate::request::DialogRequest> {
                Ok(self.request)
            }
        }
    };
}

pub(crate) use plain_builder;
