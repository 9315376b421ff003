//! zenity-dialogs
//!
//! Typed API over the `zenity` dialog binary: options become command-line
//! flags, stdout becomes typed results.
//!
//! ```no_run
//! use zenity_dialogs::{ColorDialog, DialogBuilder, FormField, FormsDialog};
//!
//! # fn main() -> zenity_dialogs::Result<()> {
//! let color = ColorDialog::new().title("Accent").prompt()?;
//!
//! let form = FormsDialog::new()
//!     .text("New user")
//!     .field(FormField::entry("Name"))
//!     .field(FormField::new("calendar", "Birthday")?)
//!     .prompt()?;
//! # let _ = (color, form);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod decode;
pub mod dialog;
pub mod dialogs;
pub mod error;
pub mod kind;
pub mod options;
pub mod preset;
pub mod process;
pub mod request;

pub use config::ZenityConfig;
pub use decode::{Auth, Decoder, DialogResult, Rgb};
pub use dialog::Dialog;
pub use dialogs::{
    CalendarDialog, ColorDialog, DialogBuilder, EntryDialog, FileSelectionDialog, FormField,
    FormFieldType, FormsDialog, ListDialog, ListRow, MessageDialog, NotificationDialog,
    PasswordDialog, Progress, ProgressDialog, ScaleDialog, TextInfoDialog,
};
pub use error::{Result, ZenityError};
pub use kind::DialogKind;
pub use options::{DialogOptions, OptionValue};
pub use preset::Preset;
pub use process::DialogProcess;
pub use request::DialogRequest;
