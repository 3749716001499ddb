use crate::{
    form::FieldMap,
    model::{FieldKind, RecordModel},
    value::Value,
};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// ValidateError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValidateError {
    #[error("validation failed")]
    ValidationFailed(BTreeMap<String, Vec<String>>),
}

impl ValidateError {
    /// Issues recorded for one field, if any.
    #[must_use]
    pub fn field_issues(&self, field: &str) -> Option<&[String]> {
        let Self::ValidationFailed(issues) = self;

        issues.get(field).map(Vec::as_slice)
    }
}

///
/// validate_fields
/// Validate form values against a record model, collecting issues by
/// field name.
///
/// Validation is non-failing at the traversal level: all issues are
/// collected and returned together, so a form can surface every
/// problem at once.
///
pub fn validate_fields(values: &FieldMap, model: &RecordModel) -> Result<(), ValidateError> {
    let mut issues: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut issue = |field: &str, message: &str| {
        issues
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    };

    for field in model.fields {
        let value = values.value(field.name);
        let filled = value.is_some_and(Value::is_filled);

        if field.is_required() && !filled {
            issue(field.name, "required");
        }

        if !filled {
            continue;
        }
        let Some(text) = value.and_then(Value::as_text).map(str::trim) else {
            continue;
        };

        match field.kind {
            FieldKind::Text => {}
            FieldKind::Email => {
                if !is_plausible_email(text) {
                    issue(field.name, "invalid email");
                }
            }
            FieldKind::Phone => {
                if !is_phone_charset(text) {
                    issue(field.name, "invalid phone number");
                }
            }
            FieldKind::Choice(allowed) => {
                if !allowed.iter().any(|choice| *choice == text) {
                    issue(field.name, "not an allowed choice");
                }
            }
        }
    }

    for name in values.keys() {
        if model.field(name).is_none() {
            issue(name, "unknown field");
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidateError::ValidationFailed(issues))
    }
}

/// Minimal address shape check: one `@`, non-empty local part, and a
/// dotted domain without whitespace or empty labels.
fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
        && !value.chars().any(char::is_whitespace)
}

/// Dial-pad characters only, matching the form input's pattern.
fn is_phone_charset(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' '))
}

///
/// TESTS
///
