// File: src/rule.rs
// Purpose: Rule identifiers and rule evaluation

use crate::value::Value;
use rusty_validator_core as predicates;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a rule, also the key of its message template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    NotEmpty,
    MinLength,
    MaxLength,
    Email,
    Url,
    #[serde(rename = "num")]
    Numeric,
    Alphanumeric,
    Boolean,
    NotEqual,
    Contains,
    Phone,
    ZipCode,
    IpAddress,
}

impl RuleId {
    pub const ALL: [RuleId; 13] = [
        RuleId::NotEmpty,
        RuleId::MinLength,
        RuleId::MaxLength,
        RuleId::Email,
        RuleId::Url,
        RuleId::Numeric,
        RuleId::Alphanumeric,
        RuleId::Boolean,
        RuleId::NotEqual,
        RuleId::Contains,
        RuleId::Phone,
        RuleId::ZipCode,
        RuleId::IpAddress,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::NotEmpty => "not_empty",
            RuleId::MinLength => "min_length",
            RuleId::MaxLength => "max_length",
            RuleId::Email => "email",
            RuleId::Url => "url",
            RuleId::Numeric => "num",
            RuleId::Alphanumeric => "alphanumeric",
            RuleId::Boolean => "boolean",
            RuleId::NotEqual => "not_equal",
            RuleId::Contains => "contains",
            RuleId::Phone => "phone",
            RuleId::ZipCode => "zip_code",
            RuleId::IpAddress => "ip_address",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single check together with its arguments
///
/// Deserializes from `{ "rule": "min_length", "arg": 12 }` style tables, so
/// a host can keep per-field rule lists in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", content = "arg", rename_all = "snake_case")]
pub enum Rule {
    NotEmpty,
    MinLength(usize),
    MaxLength(usize),
    Email,
    Url,
    Numeric,
    Alphanumeric,
    Boolean,
    Equals(Value),
    Contains {
        values: Value,
        #[serde(default)]
        separator: Option<String>,
    },
    Phone,
    Zip,
    Ip,
}

impl Rule {
    pub fn id(&self) -> RuleId {
        match self {
            Rule::NotEmpty => RuleId::NotEmpty,
            Rule::MinLength(_) => RuleId::MinLength,
            Rule::MaxLength(_) => RuleId::MaxLength,
            Rule::Email => RuleId::Email,
            Rule::Url => RuleId::Url,
            Rule::Numeric => RuleId::Numeric,
            Rule::Alphanumeric => RuleId::Alphanumeric,
            Rule::Boolean => RuleId::Boolean,
            Rule::Equals(_) => RuleId::NotEqual,
            Rule::Contains { .. } => RuleId::Contains,
            Rule::Phone => RuleId::Phone,
            Rule::Zip => RuleId::ZipCode,
            Rule::Ip => RuleId::IpAddress,
        }
    }

    /// Text substituted into the message template, for rules that have one
    pub fn argument(&self) -> Option<String> {
        match self {
            Rule::MinLength(n) | Rule::MaxLength(n) => Some(n.to_string()),
            Rule::Equals(target) => Some(target.to_string()),
            _ => None,
        }
    }

    /// Evaluate the rule against a value
    pub fn passes(&self, value: &Value) -> bool {
        match self {
            Rule::NotEmpty => !value.is_empty(),
            Rule::MinLength(min) => predicates::has_min_length(&value.to_string(), *min),
            Rule::MaxLength(max) => predicates::has_max_length(&value.to_string(), *max),
            Rule::Email => predicates::is_valid_email(&value.to_string()),
            Rule::Url => predicates::is_valid_url(&value.to_string()),
            Rule::Numeric => value.is_numeric(),
            Rule::Alphanumeric => predicates::is_alphanumeric(&value.to_string()),
            Rule::Boolean => value.is_bool(),
            Rule::Equals(target) => value.loosely_equals(target),
            Rule::Contains { values, separator } => member_set(values, separator.as_deref())
                .iter()
                .any(|member| value.loosely_equals(member)),
            Rule::Phone => predicates::is_valid_phone(&value.to_string()),
            Rule::Zip => predicates::is_zip_code(&value.to_string()),
            Rule::Ip => predicates::is_valid_ip(&value.to_string()),
        }
    }
}

/// Resolve the set a `contains` check tests membership against
///
/// An array is used as-is. A non-null scalar is split on `separator` when one
/// is given. Anything else yields an empty set, which nothing belongs to.
pub fn member_set(values: &Value, separator: Option<&str>) -> Vec<Value> {
    match (values, separator) {
        (Value::Array(items), _) => items.clone(),
        (Value::Null, _) => Vec::new(),
        (scalar, Some(sep)) if !sep.is_empty() => scalar
            .to_string()
            .split(sep)
            .map(Value::from)
            .collect(),
        _ => Vec::new(),
    }
}
