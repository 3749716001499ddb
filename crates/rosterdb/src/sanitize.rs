use crate::{form::FieldMap, value::Value};

///
/// sanitize_fields
/// Normalize form input before comparison with stored state.
///
/// Sanitization is total and non-failing: surrounding whitespace is
/// trimmed and whitespace-only text collapses to `Null`.
///
pub fn sanitize_fields(fields: &mut FieldMap) {
    for value in fields.values_mut() {
        sanitize_value(value);
    }
}

/// Trim one value in place; whitespace-only text becomes `Null`.
pub fn sanitize_value(value: &mut Value) {
    if let Value::Text(text) = value {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            *value = Value::Null;
        } else if trimmed.len() != text.len() {
            *value = Value::Text(trimmed.to_string());
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let mut value = Value::from("  Tom ");
        sanitize_value(&mut value);

        assert_eq!(value, Value::from("Tom"));
    }

    #[test]
    fn whitespace_only_collapses_to_null() {
        let mut value = Value::from("   ");
        sanitize_value(&mut value);

        assert_eq!(value, Value::Null);
    }

    #[test]
    fn null_and_clean_text_are_untouched() {
        let mut null = Value::Null;
        sanitize_value(&mut null);
        assert_eq!(null, Value::Null);

        let mut clean = Value::from("Sawyer");
        sanitize_value(&mut clean);
        assert_eq!(clean, Value::from("Sawyer"));
    }

    #[test]
    fn sanitize_fields_touches_every_value() {
        let mut fields = FieldMap::new();
        fields.set("firstName", " Tom ");
        fields.set("lastName", "\t");
        fields.set("email", "tom@email.fake");

        sanitize_fields(&mut fields);

        assert_eq!(fields.value("firstName"), Some(&Value::from("Tom")));
        assert_eq!(fields.value("lastName"), Some(&Value::Null));
        assert_eq!(fields.value("email"), Some(&Value::from("tom@email.fake")));
    }
}
