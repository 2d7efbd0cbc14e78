use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_MESSAGE_LEN: usize = 10;

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    Required(ContactField),
    #[error("Email is invalid")]
    InvalidEmail,
    #[error("Message must be at least {min} characters long")]
    MessageTooShort { min: usize },
}

/// Every failing field at once, keyed for inline display next to its input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactErrors {
    pub fields: BTreeMap<ContactField, ContactError>,
}

impl ContactErrors {
    pub fn get(&self, field: ContactField) -> Option<&ContactError> {
        self.fields.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Editing a field clears its error without revalidating the others.
    pub fn clear(&mut self, field: ContactField) {
        self.fields.remove(&field);
    }
}

impl fmt::Display for ContactErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.fields.values().map(ToString::to_string).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ContactErrors {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactErrors> {
        let mut errors = ContactErrors::default();

        if self.name.trim().is_empty() {
            errors.fields.insert(ContactField::Name, ContactError::Required(ContactField::Name));
        }

        if self.email.trim().is_empty() {
            errors.fields.insert(ContactField::Email, ContactError::Required(ContactField::Email));
        } else if !EMAIL.is_match(&self.email) {
            errors.fields.insert(ContactField::Email, ContactError::InvalidEmail);
        }

        if self.subject.trim().is_empty() {
            errors
                .fields
                .insert(ContactField::Subject, ContactError::Required(ContactField::Subject));
        }

        // Length counts the untrimmed message in UTF-16 code units, so an
        // emoji counts as two, the same as a browser's `String.length`.
        if self.message.trim().is_empty() {
            errors
                .fields
                .insert(ContactField::Message, ContactError::Required(ContactField::Message));
        } else if self.message.encode_utf16().count() < MIN_MESSAGE_LEN {
            errors.fields.insert(
                ContactField::Message,
                ContactError::MessageTooShort { min: MIN_MESSAGE_LEN },
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// `mailto:` link carrying the form, after validation passes.
    pub fn mailto_link(&self, recipient: &str) -> Result<String, ContactErrors> {
        self.validate()?;
        let body = format!("Name: {}\nEmail: {}\n\n{}", self.name, self.email, self.message);
        Ok(format!(
            "mailto:{recipient}?subject={}&body={}",
            encode_uri_component(&self.subject),
            encode_uri_component(&body),
        ))
    }
}

/// Percent-encoding with the browser's `encodeURIComponent` alphabet:
/// `!'()*` stay literal on top of what `urlencoding` already leaves alone.
pub fn encode_uri_component(raw: &str) -> String {
    urlencoding::encode(raw)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}
