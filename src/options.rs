//! Option bags lowered into zenity command-line flags

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value attached to a single `--<option>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// `--flag value`
    Value(String),
    /// `--flag` with nothing after it
    Switch,
}

/// Insertion-ordered, name-unique set of dialog options.
///
/// Names are stored in their CLI spelling: `window_icon` becomes
/// `window-icon` on insertion, so both spellings address the same entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DialogOptions {
    entries: IndexMap<String, OptionValue>,
}

/// Convert an ergonomic option name into its zenity flag name
pub fn normalize_name(name: &str) -> String {
    name.trim().trim_start_matches("--").replace('_', "-")
}

impl DialogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `--name value`, replacing any previous value in place
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.entries
            .insert(normalize_name(name), OptionValue::Value(value.into()));
        self
    }

    /// Set a valueless `--name` flag
    pub fn switch(&mut self, name: &str) -> &mut Self {
        self.entries.insert(normalize_name(name), OptionValue::Switch);
        self
    }

    /// Set `--name value` only when the caller has not supplied `name`
    pub fn set_default(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.entries
            .entry(normalize_name(name))
            .or_insert_with(|| OptionValue::Value(value.into()));
        self
    }

    /// Set or clear the switch `name`
    pub fn set_switch(&mut self, name: &str, on: bool) -> &mut Self {
        if on {
            self.switch(name)
        } else {
            self.remove(name);
            self
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<OptionValue> {
        self.entries.shift_remove(&normalize_name(name))
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entries.get(&normalize_name(name))
    }

    /// String value of `name`, if set to a value (not a switch)
    pub fn value(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(OptionValue::Value(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&normalize_name(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Append `--name [value]` for every option, in insertion order
    pub fn push_args(&self, args: &mut Vec<String>) {
        for (name, value) in &self.entries {
            args.push(format!("--{}", name));
            if let OptionValue::Value(v) = value {
                args.push(v.clone());
            }
        }
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for DialogOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = DialogOptions::new();
        for (k, v) in iter {
            options.set(k.as_ref(), v);
        }
        options
    }
}
