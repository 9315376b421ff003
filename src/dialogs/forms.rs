//! Multi-field forms

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::DialogBuilder;
use crate::decode::{decode_form, Decoder};
use crate::error::{Result, ZenityError};
use crate::kind::DialogKind;
use crate::request::DialogRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormFieldType {
    Entry,
    Password,
    Calendar,
}

impl FormFieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormFieldType::Entry => "entry",
            FormFieldType::Password => "password",
            FormFieldType::Calendar => "calendar",
        }
    }
}

impl fmt::Display for FormFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormFieldType {
    type Err = ZenityError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "entry" => Ok(FormFieldType::Entry),
            "password" => Ok(FormFieldType::Password),
            "calendar" => Ok(FormFieldType::Calendar),
            other => Err(ZenityError::InvalidFieldType(other.to_string())),
        }
    }
}

/// One labeled slot of a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub field_type: FormFieldType,
    pub label: String,
}

impl FormField {
    /// Field from a type name; anything but entry/password/calendar is
    /// rejected
    pub fn new(field_type: &str, label: impl Into<String>) -> Result<Self> {
        Ok(Self {
            field_type: field_type.parse()?,
            label: label.into(),
        })
    }

    pub fn entry(label: impl Into<String>) -> Self {
        Self {
            field_type: FormFieldType::Entry,
            label: label.into(),
        }
    }

    pub fn password(label: impl Into<String>) -> Self {
        Self {
            field_type: FormFieldType::Password,
            label: label.into(),
        }
    }

    pub fn calendar(label: impl Into<String>) -> Self {
        Self {
            field_type: FormFieldType::Calendar,
            label: label.into(),
        }
    }

    /// `--add-<type>`
    pub fn flag(&self) -> String {
        format!("--add-{}", self.field_type)
    }
}

#[derive(Debug, Clone)]
pub struct FormsDialog {
    request: DialogRequest,
    fields: Vec<FormField>,
}

impl DialogBuilder for FormsDialog {
    fn request_mut(&mut self) -> &mut DialogRequest {
        &mut self.request
    }

    fn into_request(self) -> Result<DialogRequest> {
        let decoder = Decoder::Form {
            labels: self.labels(),
            separator: self.separator(),
        };
        let mut request = self.request.decoder(decoder);
        for field in &self.fields {
            request.trailing.push(field.flag());
            request.trailing.push(field.label.clone());
        }
        Ok(request)
    }
}

impl Default for FormsDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl FormsDialog {
    pub fn new() -> Self {
        Self {
            request: DialogRequest::new(DialogKind::Forms),
            fields: Vec::new(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.request.options.set("text", text);
        self
    }

    pub fn field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = FormField>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn separator(&self) -> String {
        self.request.separator()
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.request.options.set("separator", separator);
        self
    }

    pub fn labels(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.label.clone()).collect()
    }

    /// Label → entered value, in field order
    pub fn prompt(self) -> Result<IndexMap<String, String>> {
        let labels = self.labels();
        let separator = self.separator();
        let line = self.launch()?.read()?;
        Ok(decode_form(&labels, &line, &separator))
    }
}
