// File: src/validator.rs
// Purpose: Validation engine and the chain handle returned by `set`

use crate::context::FieldContext;
use crate::error::ValidatorError;
use crate::errors::ErrorStore;
use crate::messages::Messages;
use crate::rule::Rule;
use crate::value::Value;
use tracing::{debug, trace};

/// Validation engine
///
/// Holds the message table, the active field and every error recorded so
/// far. Errors are never cleared; build a new `Validator` for each pass.
///
/// ```
/// use rusty_validator::Validator;
///
/// let mut validator = Validator::new();
/// validator.set("name", "").not_empty(None);
/// validator
///     .set("email", "john@msn")
///     .is_email(Some("Please provide a valid Email Address"));
///
/// assert_eq!(validator.error("name"), Some("Required field"));
/// assert_eq!(validator.error("email"), Some("Please provide a valid Email Address"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    messages: Messages,
    errors: ErrorStore,
    current: Option<FieldContext>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator that renders failures from `messages`
    pub fn with_messages(messages: Messages) -> Self {
        Self {
            messages,
            errors: ErrorStore::new(),
            current: None,
        }
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Make `name` the active field and start a rule chain on it
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> FieldChain<'_> {
        let Validator {
            messages,
            errors,
            current,
        } = self;
        let context = current.insert(FieldContext::new(name, value));

        FieldChain {
            context,
            errors,
            messages,
        }
    }

    /// The field set by the most recent `set` call
    pub fn current(&self) -> Option<&FieldContext> {
        self.current.as_ref()
    }

    /// Resume a rule chain on the active field
    pub fn field(&mut self) -> Result<FieldChain<'_>, ValidatorError> {
        let Validator {
            messages,
            errors,
            current,
        } = self;
        let context = current.as_ref().ok_or(ValidatorError::NoActiveField)?;

        Ok(FieldChain {
            context,
            errors,
            messages,
        })
    }

    /// Apply a single rule to the active field
    pub fn check(
        &mut self,
        rule: &Rule,
        message: Option<&str>,
    ) -> Result<&mut Self, ValidatorError> {
        self.field()?.check(rule, message);
        Ok(self)
    }

    /// Record a failure of the caller's own making on the active field
    pub fn set_error(
        &mut self,
        message: impl Into<String>,
    ) -> Result<&mut Self, ValidatorError> {
        self.field()?.fail(message);
        Ok(self)
    }

    /// Whether any field has failed a rule
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// All recorded errors; empty when every check passed
    pub fn errors(&self) -> &ErrorStore {
        &self.errors
    }

    /// The error recorded for `field`, if any
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn into_errors(self) -> ErrorStore {
        self.errors
    }

    /// `Ok(())` when nothing failed, otherwise every recorded error
    pub fn into_result(self) -> Result<(), ErrorStore> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Rule chain bound to one field
///
/// Every rule runs regardless of earlier failures. A failing rule writes its
/// message under the field's name, replacing whatever an earlier rule wrote,
/// so the last failure in a chain is the one that is kept.
///
/// An override `message` is used verbatim when it is `Some` and non-empty;
/// otherwise the rule's template is rendered.
#[derive(Debug)]
pub struct FieldChain<'a> {
    context: &'a FieldContext,
    errors: &'a mut ErrorStore,
    messages: &'a Messages,
}

impl FieldChain<'_> {
    pub fn name(&self) -> &str {
        &self.context.name
    }

    pub fn value(&self) -> &Value {
        &self.context.value
    }

    /// Apply any rule
    pub fn check(self, rule: &Rule, message: Option<&str>) -> Self {
        let field = &self.context.name;
        let id = rule.id();

        if rule.passes(&self.context.value) {
            trace!(field = %field, rule = %id, "rule passed");
            return self;
        }

        let overridden = message.is_some_and(|m| !m.is_empty());
        let message = match message {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => self.messages.render(id, rule.argument().as_deref()),
        };

        debug!(field = %field, rule = %id, overridden, "rule failed");
        self.errors.record(field.clone(), message);
        self
    }

    /// Record `message` for this field without evaluating a rule
    ///
    /// Replaces any message an earlier rule recorded, like a failing rule.
    pub fn fail(self, message: impl Into<String>) -> Self {
        debug!(field = %self.context.name, "custom failure recorded");
        self.errors.record(self.context.name.clone(), message);
        self
    }

    /// Apply a list of rules with their default messages
    pub fn check_all<'r>(self, rules: impl IntoIterator<Item = &'r Rule>) -> Self {
        rules
            .into_iter()
            .fold(self, |chain, rule| chain.check(rule, None))
    }

    /// Fails on null, `""`, `"0"`, `false`, `0`, `0.0` and empty arrays
    pub fn not_empty(self, message: Option<&str>) -> Self {
        self.check(&Rule::NotEmpty, message)
    }

    pub fn min_length(self, min: usize, message: Option<&str>) -> Self {
        self.check(&Rule::MinLength(min), message)
    }

    pub fn max_length(self, max: usize, message: Option<&str>) -> Self {
        self.check(&Rule::MaxLength(max), message)
    }

    pub fn is_email(self, message: Option<&str>) -> Self {
        self.check(&Rule::Email, message)
    }

    pub fn is_url(self, message: Option<&str>) -> Self {
        self.check(&Rule::Url, message)
    }

    /// Integers, floats and numeric strings pass
    pub fn is_numeric(self, message: Option<&str>) -> Self {
        self.check(&Rule::Numeric, message)
    }

    pub fn is_alphanumeric(self, message: Option<&str>) -> Self {
        self.check(&Rule::Alphanumeric, message)
    }

    /// Only a real boolean passes; `"true"` and `1` do not
    pub fn is_boolean(self, message: Option<&str>) -> Self {
        self.check(&Rule::Boolean, message)
    }

    /// Loose comparison, see [`Value::loosely_equals`]
    pub fn is_equal(self, target: impl Into<Value>, message: Option<&str>) -> Self {
        self.check(&Rule::Equals(target.into()), message)
    }

    /// Membership in `values`
    ///
    /// `values` may be an array, or a string split on `separator`. With no
    /// usable separator a string yields an empty set and the check fails.
    pub fn contains(
        self,
        values: impl Into<Value>,
        separator: Option<&str>,
        message: Option<&str>,
    ) -> Self {
        let rule = Rule::Contains {
            values: values.into(),
            separator: separator.map(str::to_string),
        };
        self.check(&rule, message)
    }

    pub fn is_phone(self, message: Option<&str>) -> Self {
        self.check(&Rule::Phone, message)
    }

    pub fn is_zip(self, message: Option<&str>) -> Self {
        self.check(&Rule::Zip, message)
    }

    /// IPv4 or IPv6
    pub fn is_ip(self, message: Option<&str>) -> Self {
        self.check(&Rule::Ip, message)
    }
}
