//! Decoding of zenity's stdout into typed results
//!
//! Malformed output is never an error here: every decoder degrades to an
//! absent or empty value.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Prefix zenity prints before a color triple (`rgb(`)
const COLOR_PREFIX_LEN: usize = 4;
/// Suffix zenity prints after a color triple (`)`)
const COLOR_SUFFIX_LEN: usize = 1;

/// Separator used by password and forms output
pub const FIELD_SEPARATOR: &str = "|";

/// Color channels. zenity prints each as 0-255, so anything larger fails to
/// decode and the color comes back as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Username/password pair returned by the password dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auth {
    pub username: Option<String>,
    pub password: String,
}

/// Decoded value of one dialog read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum DialogResult {
    Text(String),
    Color(Option<Rgb>),
    Auth(Auth),
    Form(IndexMap<String, String>),
    None,
}

/// How a dialog's output line turns into a [`DialogResult`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoder {
    Text,
    Color,
    Auth { username: bool },
    Form { labels: Vec<String>, separator: String },
    /// Progress dialogs produce no result
    Nothing,
}

impl Decoder {
    pub fn decode(&self, line: &str) -> DialogResult {
        match self {
            Decoder::Text => DialogResult::Text(decode_text(line)),
            Decoder::Color => DialogResult::Color(decode_color(line)),
            Decoder::Auth { username } => DialogResult::Auth(decode_auth(line, *username)),
            Decoder::Form { labels, separator } => {
                DialogResult::Form(decode_form(labels, line, separator))
            }
            Decoder::Nothing => DialogResult::None,
        }
    }
}

pub fn decode_text(line: &str) -> String {
    line.trim().to_string()
}

/// Parse `rgb(r,g,b)` into an [`Rgb`]; `None` when the payload is malformed
pub fn decode_color(line: &str) -> Option<Rgb> {
    let line = line.trim();
    let end = line.len().checked_sub(COLOR_SUFFIX_LEN)?;
    let payload = line.get(COLOR_PREFIX_LEN..end)?;

    let components = payload
        .split(',')
        .map(|c| c.trim().parse::<u8>().ok())
        .collect::<Option<Vec<_>>>()?;

    match components.as_slice() {
        [red, green, blue] => Some(Rgb {
            red: *red,
            green: *green,
            blue: *blue,
        }),
        _ => None,
    }
}

/// Split password output. Without a username field the whole line is the
/// password.
pub fn decode_auth(line: &str, username: bool) -> Auth {
    let line = line.trim();
    if !username {
        return Auth {
            username: None,
            password: line.to_string(),
        };
    }

    match line.split_once(FIELD_SEPARATOR) {
        Some((user, password)) => Auth {
            username: Some(user.to_string()),
            password: password.to_string(),
        },
        None => Auth {
            username: Some(line.to_string()),
            password: String::new(),
        },
    }
}

/// Zip separated values against field labels. Extra values or labels on
/// either side are dropped.
pub fn decode_form(labels: &[String], line: &str, separator: &str) -> IndexMap<String, String> {
    labels
        .iter()
        .cloned()
        .zip(line.trim().split(separator).map(str::to_string))
        .collect()
}

/// Split a multi-value line (file selection with `--multiple`)
pub fn decode_list(line: &str, separator: &str) -> Vec<String> {
    let line = line.trim();
    if line.is_empty() {
        return Vec::new();
    }
    line.split(separator).map(str::to_string).collect()
}
