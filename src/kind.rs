//! Dialog kinds understood by zenity

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ZenityError;

/// One zenity subcommand (`--info`, `--forms`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DialogKind {
    Info,
    Warning,
    Question,
    Error,
    Progress,
    Entry,
    FileSelection,
    Notification,
    Scale,
    Calendar,
    List,
    ColorSelection,
    Password,
    Forms,
    TextInfo,
}

impl DialogKind {
    pub const ALL: [DialogKind; 15] = [
        DialogKind::Info,
        DialogKind::Warning,
        DialogKind::Question,
        DialogKind::Error,
        DialogKind::Progress,
        DialogKind::Entry,
        DialogKind::FileSelection,
        DialogKind::Notification,
        DialogKind::Scale,
        DialogKind::Calendar,
        DialogKind::List,
        DialogKind::ColorSelection,
        DialogKind::Password,
        DialogKind::Forms,
        DialogKind::TextInfo,
    ];

    /// Subcommand name as zenity spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            DialogKind::Info => "info",
            DialogKind::Warning => "warning",
            DialogKind::Question => "question",
            DialogKind::Error => "error",
            DialogKind::Progress => "progress",
            DialogKind::Entry => "entry",
            DialogKind::FileSelection => "file-selection",
            DialogKind::Notification => "notification",
            DialogKind::Scale => "scale",
            DialogKind::Calendar => "calendar",
            DialogKind::List => "list",
            DialogKind::ColorSelection => "color-selection",
            DialogKind::Password => "password",
            DialogKind::Forms => "forms",
            DialogKind::TextInfo => "text-info",
        }
    }

    /// The `--<kind>` flag that selects this dialog
    pub fn flag(&self) -> String {
        format!("--{}", self.as_str())
    }
}

impl fmt::Display for DialogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialogKind {
    type Err = ZenityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches("--").replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| ZenityError::UnsupportedDialogKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_kind() {
        for kind in DialogKind::ALL {
            let parsed: DialogKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_parse_accepts_flag_and_underscore_forms() {
        assert_eq!("--text-info".parse::<DialogKind>().unwrap(), DialogKind::TextInfo);
        assert_eq!("file_selection".parse::<DialogKind>().unwrap(), DialogKind::FileSelection);
    }

    #[test]
    fn test_parse_unknown_kind() {
        let err = "popup".parse::<DialogKind>().unwrap_err();
        assert!(matches!(err, ZenityError::UnsupportedDialogKind(ref k) if k == "popup"));
    }

    #[test]
    fn test_serde_names_match_cli_names() {
        let json = serde_json::to_string(&DialogKind::ColorSelection).unwrap();
        assert_eq!(json, "\"color-selection\"");
        assert_eq!(DialogKind::ColorSelection.flag(), "--color-selection");
    }
}
