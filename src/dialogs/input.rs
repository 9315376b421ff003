//! Single-value input dialogs

use std::path::PathBuf;

use chrono::NaiveDate;

use super::{plain_builder, DialogBuilder};
use crate::decode::{decode_auth, decode_color, decode_list, Auth, Rgb};
use crate::error::Result;
use crate::kind::DialogKind;
use crate::request::DialogRequest;

/// Text entry
#[derive(Debug, Clone)]
pub struct EntryDialog {
    request: DialogRequest,
}

plain_builder!(EntryDialog);

impl Default for EntryDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryDialog {
    pub fn new() -> Self {
        Self {
            request: DialogRequest::new(DialogKind::Entry),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.request.options.set("text", text);
        self
    }

    /// Pre-filled value
    pub fn entry_text(mut self, value: impl Into<String>) -> Self {
        self.request.options.set("entry-text", value);
        self
    }

    pub fn hide_text(mut self) -> Self {
        self.request.options.switch("hide-text");
        self
    }

    /// Entered text; empty when cancelled
    pub fn prompt(self) -> Result<String> {
        self.launch()?.read()
    }
}

/// Slider. Defaults: value 0, range 0..=100, step 1.
#[derive(Debug, Clone)]
pub struct ScaleDialog {
    request: DialogRequest,
}

plain_builder!(ScaleDialog);

impl Default for ScaleDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl ScaleDialog {
    pub fn new() -> Self {
        Self {
            request: DialogRequest::new(DialogKind::Scale),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.request.options.set("text", text);
        self
    }

    pub fn value(mut self, value: i64) -> Self {
        self.request.options.set("value", value.to_string());
        self
    }

    pub fn min_value(mut self, value: i64) -> Self {
        self.request.options.set("min-value", value.to_string());
        self
    }

    pub fn max_value(mut self, value: i64) -> Self {
        self.request.options.set("max-value", value.to_string());
        self
    }

    pub fn step(mut self, step: i64) -> Self {
        self.request.options.set("step", step.to_string());
        self
    }

    /// Emit every intermediate value, one line each
    pub fn print_partial(mut self) -> Self {
        self.request.options.switch("print-partial");
        self
    }

    pub fn hide_value(mut self) -> Self {
        self.request.options.switch("hide-value");
        self
    }

    /// Selected value; `None` when cancelled
    pub fn prompt(self) -> Result<Option<i64>> {
        let line = self.launch()?.read()?;
        Ok(line.parse().ok())
    }
}

/// Date picker
#[derive(Debug, Clone)]
pub struct CalendarDialog {
    request: DialogRequest,
}

plain_builder!(CalendarDialog);

impl Default for CalendarDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarDialog {
    pub fn new() -> Self {
        Self {
            request: DialogRequest::new(DialogKind::Calendar),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.request.options.set("text", text);
        self
    }

    pub fn day(mut self, day: u32) -> Self {
        self.request.options.set("day", day.to_string());
        self
    }

    pub fn month(mut self, month: u32) -> Self {
        self.request.options.set("month", month.to_string());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.request.options.set("year", year.to_string());
        self
    }

    /// Pre-select `date`
    pub fn date(self, date: NaiveDate) -> Self {
        use chrono::Datelike;
        self.day(date.day()).month(date.month()).year(date.year())
    }

    /// strftime format zenity prints the date with
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.request.options.set("date-format", format);
        self
    }

    /// Date as zenity printed it
    pub fn prompt(self) -> Result<String> {
        self.launch()?.read()
    }

    /// Parsed date. Needs a `date_format`; `None` without one, on cancel,
    /// or when the output does not match the format.
    pub fn prompt_date(self) -> Result<Option<NaiveDate>> {
        let format = self.request.options.value("date-format").map(str::to_string);
        let line = self.prompt()?;
        Ok(format.and_then(|f| parse_date(&line, &f)))
    }
}

pub(crate) fn parse_date(line: &str, format: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(line.trim(), format).ok()
}

/// Color picker
#[derive(Debug, Clone)]
pub struct ColorDialog {
    request: DialogRequest,
}

plain_builder!(ColorDialog);

impl Default for ColorDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorDialog {
    pub fn new() -> Self {
        Self {
            request: DialogRequest::new(DialogKind::ColorSelection),
        }
    }

    /// Initial color (`#rrggbb` or a color name)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.request.options.set("color", color);
        self
    }

    pub fn show_palette(mut self) -> Self {
        self.request.options.switch("show-palette");
        self
    }

    /// Picked color; `None` on cancel or unparseable output
    pub fn prompt(self) -> Result<Option<Rgb>> {
        let line = self.launch()?.read()?;
        Ok(decode_color(&line))
    }
}

/// Password prompt, optionally with a username field
#[derive(Debug, Clone)]
pub struct PasswordDialog {
    request: DialogRequest,
}

plain_builder!(PasswordDialog);

impl Default for PasswordDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordDialog {
    pub fn new() -> Self {
        Self {
            request: DialogRequest::new(DialogKind::Password),
        }
    }

    pub fn username(mut self, ask: bool) -> Self {
        self.request.options.set_switch("username", ask);
        self
    }

    pub fn prompt(self) -> Result<Auth> {
        let username = self.request.effective_options().contains("username");
        let line = self.launch()?.read()?;
        Ok(decode_auth(&line, username))
    }
}

/// File or directory chooser
#[derive(Debug, Clone)]
pub struct FileSelectionDialog {
    request: DialogRequest,
}

plain_builder!(FileSelectionDialog);

impl Default for FileSelectionDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSelectionDialog {
    pub fn new() -> Self {
        Self {
            request: DialogRequest::new(DialogKind::FileSelection),
        }
    }

    /// Starting file or directory
    pub fn filename(mut self, path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        self.request
            .options
            .set("filename", path.to_string_lossy().into_owned());
        self
    }

    pub fn multiple(mut self) -> Self {
        self.request.options.switch("multiple");
        self
    }

    pub fn directory(mut self) -> Self {
        self.request.options.switch("directory");
        self
    }

    pub fn save(mut self) -> Self {
        self.request.options.switch("save");
        self
    }

    pub fn confirm_overwrite(mut self) -> Self {
        self.request.options.switch("confirm-overwrite");
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.request.options.set("separator", separator);
        self
    }

    /// Pattern filter, e.g. `"Images | *.png *.jpg"`
    pub fn file_filter(mut self, filter: impl Into<String>) -> Self {
        self.request.options.set("file-filter", filter);
        self
    }

    /// Chosen paths; empty when cancelled
    pub fn prompt(self) -> Result<Vec<PathBuf>> {
        let separator = self.request.separator();
        let line = self.launch()?.read()?;
        Ok(decode_list(&line, &separator)
            .into_iter()
            .map(PathBuf::from)
            .collect())
    }
}

/// Scrollable text viewer / editor
#[derive(Debug, Clone)]
pub struct TextInfoDialog {
    request: DialogRequest,
}

plain_builder!(TextInfoDialog);

impl Default for TextInfoDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInfoDialog {
    pub fn new() -> Self {
        Self {
            request: DialogRequest::new(DialogKind::TextInfo),
        }
    }

    pub fn filename(mut self, path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        self.request
            .options
            .set("filename", path.to_string_lossy().into_owned());
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.request.options.set_switch("editable", editable);
        self
    }

    pub fn html(mut self, html: bool) -> Self {
        self.request.options.set_switch("html", html);
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.request.options.set("url", url);
        self
    }

    /// Require ticking a checkbox with this label before OK is enabled
    pub fn checkbox(mut self, label: impl Into<String>) -> Self {
        self.request.options.set("checkbox", label);
        self
    }

    /// Final text (the edited text when `editable`)
    pub fn prompt(self) -> Result<String> {
        self.launch()?.read_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_args() {
        let args = EntryDialog::new()
            .binary("zenity")
            .text("Project name")
            .entry_text("demo")
            .hide_text()
            .args()
            .unwrap();
        assert_eq!(
            args,
            vec![
                "zenity",
                "--entry",
                "--text",
                "Project name",
                "--entry-text",
                "demo",
                "--hide-text",
            ]
        );
    }

    #[test]
    fn test_scale_keeps_caller_values_before_defaults() {
        let args = ScaleDialog::new()
            .binary("zenity")
            .min_value(-5)
            .step(5)
            .print_partial()
            .args()
            .unwrap();
        assert_eq!(
            args,
            vec![
                "zenity",
                "--scale",
                "--min-value",
                "-5",
                "--step",
                "5",
                "--print-partial",
                "--value",
                "0",
                "--max-value",
                "100",
            ]
        );
    }

    #[test]
    fn test_calendar_date_and_format() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let args = CalendarDialog::new()
            .binary("zenity")
            .date(date)
            .date_format("%Y-%m-%d")
            .args()
            .unwrap();
        assert_eq!(
            args,
            vec![
                "zenity",
                "--calendar",
                "--day",
                "29",
                "--month",
                "2",
                "--year",
                "2024",
                "--date-format",
                "%Y-%m-%d",
            ]
        );
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-02-29\n", "%Y-%m-%d"),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(parse_date("", "%Y-%m-%d"), None);
        assert_eq!(parse_date("29/02/2024", "%Y-%m-%d"), None);
    }

    #[test]
    fn test_password_username_switch() {
        let args = PasswordDialog::new()
            .binary("zenity")
            .username(true)
            .args()
            .unwrap();
        assert_eq!(args, vec!["zenity", "--password", "--username"]);

        let args = PasswordDialog::new()
            .binary("zenity")
            .username(true)
            .username(false)
            .args()
            .unwrap();
        assert_eq!(args, vec!["zenity", "--password"]);
    }

    #[test]
    fn test_text_info_switches() {
        let args = TextInfoDialog::new()
            .binary("zenity")
            .filename("/tmp/notes.txt")
            .editable(true)
            .html(false)
            .args()
            .unwrap();
        assert_eq!(
            args,
            vec![
                "zenity",
                "--text-info",
                "--filename",
                "/tmp/notes.txt",
                "--editable",
            ]
        );
    }

    #[test]
    fn test_color_and_file_selection_args() {
        let args = ColorDialog::new()
            .binary("zenity")
            .color("#ff8000")
            .show_palette()
            .args()
            .unwrap();
        assert_eq!(
            args,
            vec!["zenity", "--color-selection", "--color", "#ff8000", "--show-palette"]
        );

        let args = FileSelectionDialog::new()
            .binary("zenity")
            .multiple()
            .separator(":")
            .args()
            .unwrap();
        assert_eq!(
            args,
            vec!["zenity", "--file-selection", "--multiple", "--separator", ":"]
        );
    }
}
