//! Contact form fields and their input rules.
//!
//! The page renders the form with `required` and `type="email"` so the
//! browser does the checking. The same rules live here so a host without a
//! browser can apply them. There is no submit path: a valid entry is simply
//! accepted and dropped.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::types::ContactForm;

// "valid e-mail address" production from the HTML living standard
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// Input control used for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line text
    Text,
    /// Single-line email address
    Email,
    /// Multi-line text area
    Multiline {
        /// Visible rows
        rows: u8,
    },
}

impl FieldKind {
    /// `type` attribute for `<input>` fields. `None` for text areas.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            FieldKind::Text => Some("text"),
            FieldKind::Email => Some("email"),
            FieldKind::Multiline { .. } => None,
        }
    }
}

/// Which [`ContactEntry`] value a field reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    /// Visitor's name
    Name,
    /// Reply address
    Email,
    /// Message body
    Message,
}

impl FieldId {
    /// Value of the control's `name` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Message => "message",
        }
    }
}

/// One contact form input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContactField {
    /// Entry slot this field reads
    pub id: FieldId,
    /// Field name, also used in error messages
    pub name: &'static str,
    /// Placeholder text shown in the empty control
    pub placeholder: &'static str,
    /// Control type
    pub kind: FieldKind,
    /// Whether an empty value is rejected
    pub required: bool,
}

/// Why a value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Required field left empty or blank
    #[error("{field} is required")]
    Missing {
        /// Field name
        field: &'static str,
    },
    /// Value does not look like an email address
    #[error("{field}: {value:?} is not a valid email address")]
    InvalidEmail {
        /// Field name
        field: &'static str,
        /// Offending input, trimmed
        value: String,
    },
}

impl ContactField {
    /// Check a single value against this field's rules.
    pub fn validate(&self, value: &str) -> Result<(), FieldError> {
        let value = value.trim();
        if value.is_empty() {
            return if self.required {
                Err(FieldError::Missing { field: self.name })
            } else {
                Ok(())
            };
        }

        if self.kind == FieldKind::Email && !EMAIL_RE.is_match(value) {
            return Err(FieldError::InvalidEmail {
                field: self.name,
                value: value.to_string(),
            });
        }

        Ok(())
    }
}

/// Values a visitor typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactEntry {
    /// Name field
    pub name: String,
    /// Email field
    pub email: String,
    /// Message field
    pub message: String,
}

impl ContactEntry {
    fn value_for(&self, id: FieldId) -> &str {
        match id {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
        }
    }
}

impl ContactForm {
    /// Check an entry field by field, in display order.
    ///
    /// Returns the first failure, matching how a browser reports the first
    /// invalid control.
    pub fn validate(&self, entry: &ContactEntry) -> Result<(), FieldError> {
        self.fields
            .iter()
            .try_for_each(|field| field.validate(entry.value_for(field.id)))
    }
}
