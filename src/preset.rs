//! Per-kind presets: default options, switch flags and decode rule

use crate::decode::{Decoder, FIELD_SEPARATOR};
use crate::kind::DialogKind;
use crate::options::{DialogOptions, OptionValue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub kind: DialogKind,
    /// Applied only when the caller left the option unset
    pub defaults: &'static [(&'static str, &'static str)],
    /// Flags zenity takes without a value
    pub switches: &'static [&'static str],
    pub decoder: Decoder,
}

const MESSAGE_SWITCHES: &[&str] = &["no-wrap", "no-markup", "ellipsize"];

impl Preset {
    pub fn for_kind(kind: DialogKind) -> Self {
        match kind {
            DialogKind::Info => preset(
                kind,
                &[("title", "Information"), ("window-icon", "info")],
                MESSAGE_SWITCHES,
                Decoder::Text,
            ),
            DialogKind::Warning => preset(
                kind,
                &[("title", "Warning"), ("window-icon", "warning")],
                MESSAGE_SWITCHES,
                Decoder::Text,
            ),
            DialogKind::Question => preset(
                kind,
                &[("title", "Question"), ("window-icon", "question")],
                &["no-wrap", "no-markup", "ellipsize", "default-cancel", "switch"],
                Decoder::Text,
            ),
            DialogKind::Error => preset(
                kind,
                &[("title", "Error"), ("window-icon", "error")],
                MESSAGE_SWITCHES,
                Decoder::Text,
            ),
            DialogKind::Progress => preset(
                kind,
                &[],
                &["pulsate", "auto-close", "auto-kill", "no-cancel", "time-remaining"],
                Decoder::Nothing,
            ),
            DialogKind::Entry => preset(kind, &[], &["hide-text"], Decoder::Text),
            DialogKind::FileSelection => preset(
                kind,
                &[],
                &["multiple", "directory", "save", "confirm-overwrite"],
                Decoder::Text,
            ),
            DialogKind::Notification => preset(kind, &[], &["listen"], Decoder::Text),
            DialogKind::Scale => preset(
                kind,
                &[
                    ("value", "0"),
                    ("min-value", "0"),
                    ("max-value", "100"),
                    ("step", "1"),
                ],
                &["print-partial", "hide-value"],
                Decoder::Text,
            ),
            DialogKind::Calendar => preset(kind, &[], &[], Decoder::Text),
            DialogKind::List => preset(
                kind,
                &[],
                &[
                    "checklist",
                    "radiolist",
                    "imagelist",
                    "multiple",
                    "editable",
                    "hide-header",
                    "mid-search",
                ],
                Decoder::Text,
            ),
            DialogKind::ColorSelection => preset(kind, &[], &["show-palette"], Decoder::Color),
            DialogKind::Password => preset(
                kind,
                &[],
                &["username"],
                Decoder::Auth { username: false },
            ),
            DialogKind::Forms => preset(
                kind,
                &[],
                &["show-header"],
                Decoder::Form {
                    labels: Vec::new(),
                    separator: FIELD_SEPARATOR.to_string(),
                },
            ),
            DialogKind::TextInfo => preset(
                kind,
                &[],
                &["editable", "html", "auto-scroll", "no-interaction"],
                Decoder::Text,
            ),
        }
    }

    pub fn is_switch(&self, name: &str) -> bool {
        self.switches.contains(&name)
    }

    /// Lower caller options into the final set: switch options given as
    /// values become bare flags when truthy and disappear otherwise, then
    /// defaults fill the gaps.
    pub fn apply(&self, options: &DialogOptions) -> DialogOptions {
        let mut applied = DialogOptions::new();
        for (name, value) in options.iter() {
            match value {
                OptionValue::Value(v) if self.is_switch(name) => {
                    if is_truthy(v) {
                        applied.switch(name);
                    }
                }
                OptionValue::Value(v) => {
                    applied.set(name, v.clone());
                }
                OptionValue::Switch => {
                    applied.switch(name);
                }
            }
        }
        for (name, value) in self.defaults {
            applied.set_default(name, *value);
        }
        applied
    }

    /// Decode rule once the final options are known
    pub fn decoder_for(&self, applied: &DialogOptions) -> Decoder {
        match &self.decoder {
            Decoder::Auth { .. } => Decoder::Auth {
                username: applied.contains("username"),
            },
            other => other.clone(),
        }
    }
}

fn preset(
    kind: DialogKind,
    defaults: &'static [(&'static str, &'static str)],
    switches: &'static [&'static str],
    decoder: Decoder,
) -> Preset {
    Preset {
        kind,
        defaults,
        switches,
        decoder,
    }
}

/// Values that switch a flag on. An empty string counts, matching
/// `--flag ''` style callers.
fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_defaults() {
        let preset = Preset::for_kind(DialogKind::Scale);
        let mut options = DialogOptions::new();
        options.set("max_value", "10");

        let applied = preset.apply(&options);
        assert_eq!(applied.value("max-value"), Some("10"));
        assert_eq!(applied.value("min-value"), Some("0"));
        assert_eq!(applied.value("value"), Some("0"));
        assert_eq!(applied.value("step"), Some("1"));
    }

    #[test]
    fn test_message_defaults_can_be_overridden() {
        let preset = Preset::for_kind(DialogKind::Info);
        let mut options = DialogOptions::new();
        options.set("window_icon", "dialog-password");

        let applied = preset.apply(&options);
        assert_eq!(applied.value("title"), Some("Information"));
        assert_eq!(applied.value("window-icon"), Some("dialog-password"));
    }

    #[test]
    fn test_switch_values_are_lowered() {
        let preset = Preset::for_kind(DialogKind::TextInfo);
        let mut options = DialogOptions::new();
        options.set("editable", "true").set("html", "false").set("filename", "a.txt");

        let applied = preset.apply(&options);
        assert_eq!(applied.get("editable"), Some(&OptionValue::Switch));
        assert!(!applied.contains("html"));
        assert_eq!(applied.value("filename"), Some("a.txt"));
    }

    #[test]
    fn test_password_decoder_follows_username_switch() {
        let preset = Preset::for_kind(DialogKind::Password);

        let applied = preset.apply(&DialogOptions::new());
        assert_eq!(preset.decoder_for(&applied), Decoder::Auth { username: false });

        let mut options = DialogOptions::new();
        options.set("username", "");
        let applied = preset.apply(&options);
        assert_eq!(preset.decoder_for(&applied), Decoder::Auth { username: true });
    }

    #[test]
    fn test_every_kind_has_a_preset() {
        for kind in DialogKind::ALL {
            assert_eq!(Preset::for_kind(kind).kind, kind);
        }
    }
}
