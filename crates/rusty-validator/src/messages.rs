// File: src/messages.rs
// Purpose: Default error message templates and loading overrides from TOML

use crate::rule::RuleId;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Placeholder replaced by a rule's argument
pub const PLACEHOLDER: &str = "%s";

/// Message template for every rule
///
/// Keys in a messages file match [`RuleId::as_str`]; any key left out keeps
/// its default text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub not_empty: String,
    pub min_length: String,
    pub max_length: String,
    pub email: String,
    pub url: String,
    pub num: String,
    pub alphanumeric: String,
    pub boolean: String,
    pub not_equal: String,
    pub contains: String,
    pub phone: String,
    pub zip_code: String,
    pub ip_address: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            not_empty: "Required field".to_string(),
            min_length: "Field must contain at least %s characters".to_string(),
            max_length: "Field must no more than %s characters".to_string(),
            email: "Valid Email Address required".to_string(),
            url: "Valid URL required".to_string(),
            num: "Value contain only numbers".to_string(),
            alphanumeric: "Value must contain only numbers and letters".to_string(),
            boolean: "Value must be a boolean (True or False)".to_string(),
            not_equal: "Value must equal %s".to_string(),
            contains: "Value must contain a specified item".to_string(),
            phone: "Valid Phone Number required".to_string(),
            zip_code: "Valid Zip Code required".to_string(),
            ip_address: "Valid IP Address required".to_string(),
        }
    }
}

impl Messages {
    /// Raw template for a rule
    pub fn template(&self, id: RuleId) -> &str {
        match id {
            RuleId::NotEmpty => &self.not_empty,
            RuleId::MinLength => &self.min_length,
            RuleId::MaxLength => &self.max_length,
            RuleId::Email => &self.email,
            RuleId::Url => &self.url,
            RuleId::Numeric => &self.num,
            RuleId::Alphanumeric => &self.alphanumeric,
            RuleId::Boolean => &self.boolean,
            RuleId::NotEqual => &self.not_equal,
            RuleId::Contains => &self.contains,
            RuleId::Phone => &self.phone,
            RuleId::ZipCode => &self.zip_code,
            RuleId::IpAddress => &self.ip_address,
        }
    }

    /// Template with its first placeholder filled in
    pub fn render(&self, id: RuleId, argument: Option<&str>) -> String {
        let template = self.template(id);
        match argument {
            Some(arg) => template.replacen(PLACEHOLDER, arg, 1),
            None => template.to_string(),
        }
    }

    /// Parse a messages table from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse messages table")
    }

    /// Load messages from a TOML file
    ///
    /// A missing or empty file yields the default table.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            debug!(path = ?path, "messages file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read messages file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let messages: Messages = toml::from_str(&content)
            .with_context(|| format!("Failed to parse messages file: {:?}", path))?;

        debug!(path = ?path, "loaded validation messages");
        Ok(messages)
    }
}
