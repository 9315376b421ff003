//! Dialog requests and the argument vectors they lower into

use std::path::PathBuf;

use crate::config::ZenityConfig;
use crate::decode::{Decoder, FIELD_SEPARATOR};
use crate::error::Result;
use crate::kind::DialogKind;
use crate::options::{DialogOptions, OptionValue};
use crate::preset::Preset;

/// Everything needed to launch one zenity dialog
#[derive(Debug, Clone, PartialEq)]
pub struct DialogRequest {
    pub kind: DialogKind,
    pub options: DialogOptions,
    /// Positional arguments after the options (list cells, form fields)
    pub trailing: Vec<String>,
    pub binary: PathBuf,
    /// Spawn as soon as the dialog is opened
    pub start: bool,
    pub max_history: usize,
    /// Configured defaults, filled in before the preset's
    defaults: DialogOptions,
    decoder: Option<Decoder>,
}

impl DialogRequest {
    pub fn new(kind: DialogKind) -> Self {
        Self::with_config(kind, &ZenityConfig::default())
    }

    /// Request for a kind given by name; unknown names fail before anything
    /// is spawned
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(Self::new(name.parse()?))
    }

    pub fn with_config(kind: DialogKind, config: &ZenityConfig) -> Self {
        let mut request = Self {
            kind,
            options: DialogOptions::new(),
            trailing: Vec::new(),
            binary: config.resolve_binary(),
            start: true,
            max_history: config.max_history,
            defaults: DialogOptions::new(),
            decoder: None,
        };
        request.apply_config(config);
        request
    }

    /// Fill configured default options without overriding explicit ones
    pub fn apply_config(&mut self, config: &ZenityConfig) -> &mut Self {
        for (name, value) in &config.defaults {
            self.defaults.set(name, value.clone());
        }
        self.max_history = config.max_history;
        if let Some(binary) = &config.binary {
            self.binary = binary.clone();
        }
        self
    }

    pub fn option(mut self, name: &str, value: impl Into<String>) -> Self {
        self.options.set(name, value);
        self
    }

    pub fn switch(mut self, name: &str) -> Self {
        self.options.switch(name);
        self
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.trailing.push(arg.into());
        self
    }

    pub fn binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn start(mut self, start: bool) -> Self {
        self.start = start;
        self
    }

    /// Override the preset decode rule (forms set their field labels here)
    pub fn decoder(mut self, decoder: Decoder) -> Self {
        self.decoder = Some(decoder);
        self
    }

    pub fn preset(&self) -> Preset {
        Preset::for_kind(self.kind)
    }

    /// Options after configured defaults, preset defaults and switch
    /// lowering. This is exactly what `args()` sends.
    pub fn effective_options(&self) -> DialogOptions {
        let mut options = self.options.clone();
        for (name, value) in self.defaults.iter() {
            if let OptionValue::Value(v) = value {
                options.set_default(name, v.clone());
            }
        }
        self.preset().apply(&options)
    }

    /// Separator zenity joins composite output with
    pub fn separator(&self) -> String {
        self.effective_options()
            .value("separator")
            .unwrap_or(FIELD_SEPARATOR)
            .to_string()
    }

    pub fn effective_decoder(&self) -> Decoder {
        match &self.decoder {
            Some(decoder) => decoder.clone(),
            None => self.preset().decoder_for(&self.effective_options()),
        }
    }

    /// `[binary, --<kind>, --<opt>, value, ..., trailing...]`
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![self.binary.to_string_lossy().into_owned(), self.kind.flag()];
        self.effective_options().push_args(&mut args);
        args.extend(self.trailing.iter().cloned());
        args
    }
}
