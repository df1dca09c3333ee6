//! Key-driven editing of a single field value
//!
//! Maps a key press on a focused field to the field's next value, according
//! to the field kind. No validation happens here: a number field that holds
//! text which does not parse keeps that text.

use crmform_core::{FieldDescriptor, FieldKind, FieldValue};

use crate::input_key::InputKey;

/// Compute the next value of `field` after `key`, or `None` if the key does
/// not edit this kind of field.
pub fn edit_value(
    field: &FieldDescriptor,
    current: Option<&FieldValue>,
    key: &InputKey,
) -> Option<FieldValue> {
    match &field.kind {
        FieldKind::Text { max_length, .. } => edit_text(current, key, *max_length),
        FieldKind::Textarea { .. }
        | FieldKind::Email { .. }
        | FieldKind::Phone { .. }
        | FieldKind::Date { .. } => edit_text(current, key, None),
        FieldKind::Number { .. } => edit_number(current, key),
        FieldKind::Checkbox => edit_checkbox(current, key),
        FieldKind::Select { options } => {
            let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
            edit_select(current, key, &values)
        }
    }
}

/// Text shown in an input for the current value
pub fn display_text(current: Option<&FieldValue>) -> String {
    current.map(ToString::to_string).unwrap_or_default()
}

fn edit_text(
    current: Option<&FieldValue>,
    key: &InputKey,
    max_length: Option<usize>,
) -> Option<FieldValue> {
    let mut text = display_text(current);
    match key {
        InputKey::Char(c) => {
            if max_length.is_some_and(|max| text.chars().count() >= max) {
                return None;
            }
            text.push(*c);
        }
        InputKey::Backspace => {
            text.pop()?;
        }
        InputKey::Delete => text.clear(),
        _ => return None,
    }
    Some(FieldValue::Text(text))
}

fn edit_number(current: Option<&FieldValue>, key: &InputKey) -> Option<FieldValue> {
    let mut buffer = display_text(current);
    match key {
        InputKey::Char(c) if c.is_ascii_digit() || matches!(c, '.' | '-') => buffer.push(*c),
        InputKey::Backspace => {
            buffer.pop()?;
        }
        InputKey::Delete => buffer.clear(),
        _ => return None,
    }
    Some(parse_number(buffer))
}

/// Store a number only when it renders back to exactly what was typed, so
/// partial input like `1.` or `-` survives the next keystroke.
fn parse_number(buffer: String) -> FieldValue {
    match buffer.parse::<f64>() {
        Ok(n) if FieldValue::Number(n).to_string() == buffer => FieldValue::Number(n),
        _ => FieldValue::Text(buffer),
    }
}

fn edit_checkbox(current: Option<&FieldValue>, key: &InputKey) -> Option<FieldValue> {
    match key {
        InputKey::Char(' ') => {
            let checked = current.and_then(FieldValue::as_bool).unwrap_or(false);
            Some(FieldValue::Bool(!checked))
        }
        _ => None,
    }
}

fn edit_select(current: Option<&FieldValue>, key: &InputKey, values: &[&str]) -> Option<FieldValue> {
    if values.is_empty() {
        return None;
    }
    let position = current
        .and_then(FieldValue::as_str)
        .and_then(|selected| values.iter().position(|v| *v == selected));

    let next = match key {
        InputKey::Right | InputKey::Char(' ') => match position {
            Some(i) => (i + 1) % values.len(),
            None => 0,
        },
        InputKey::Left => match position {
            Some(0) | None => values.len() - 1,
            Some(i) => i - 1,
        },
        InputKey::Backspace | InputKey::Delete => return Some(FieldValue::text("")),
        _ => return None,
    };
    Some(FieldValue::text(values[next]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crmform_core::SelectOption;

    fn text_field(max_length: Option<usize>) -> FieldDescriptor {
        FieldDescriptor::new(
            "name",
            "Name",
            FieldKind::Text {
                placeholder: None,
                max_length,
            },
        )
    }

    fn stage_field() -> FieldDescriptor {
        FieldDescriptor::new(
            "stage",
            "Stage",
            FieldKind::Select {
                options: vec![
                    SelectOption::new("lead", "Lead"),
                    SelectOption::new("qualified", "Qualified"),
                    SelectOption::new("won", "Won"),
                ],
            },
        )
    }

    /// Feed a sequence of keys, carrying the value forward like the form does
    fn type_keys(field: &FieldDescriptor, keys: &[InputKey]) -> Option<FieldValue> {
        let mut value = None;
        for key in keys {
            if let Some(next) = edit_value(field, value.as_ref(), key) {
                value = Some(next);
            }
        }
        value
    }

    fn chars(s: &str) -> Vec<InputKey> {
        s.chars().map(InputKey::Char).collect()
    }

    #[test]
    fn test_text_typing_and_backspace() {
        let field = text_field(None);
        let mut keys = chars("Acme");
        keys.push(InputKey::Backspace);
        assert_eq!(type_keys(&field, &keys), Some(FieldValue::text("Acm")));
    }

    #[test]
    fn test_backspace_on_empty_text_is_ignored() {
        let field = text_field(None);
        assert_eq!(edit_value(&field, None, &InputKey::Backspace), None);
    }

    #[test]
    fn test_delete_clears_to_empty_string() {
        let field = text_field(None);
        let current = FieldValue::text("Acme");
        assert_eq!(
            edit_value(&field, Some(&current), &InputKey::Delete),
            Some(FieldValue::text(""))
        );
    }

    #[test]
    fn test_text_respects_max_length() {
        let field = text_field(Some(3));
        assert_eq!(type_keys(&field, &chars("abcdef")), Some(FieldValue::text("abc")));
    }

    #[test]
    fn test_number_parses_complete_input() {
        let field = FieldDescriptor::new("budget", "Budget", FieldKind::number());
        assert_eq!(type_keys(&field, &chars("1500")), Some(FieldValue::Number(1500.0)));
    }

    #[test]
    fn test_number_keeps_partial_decimal() {
        let field = FieldDescriptor::new("rate", "Rate", FieldKind::number());
        assert_eq!(type_keys(&field, &chars("1.")), Some(FieldValue::text("1.")));
        assert_eq!(type_keys(&field, &chars("1.5")), Some(FieldValue::Number(1.5)));
        assert_eq!(type_keys(&field, &chars("-")), Some(FieldValue::text("-")));
        assert_eq!(type_keys(&field, &chars("-4")), Some(FieldValue::Number(-4.0)));
    }

    #[test]
    fn test_number_ignores_letters() {
        let field = FieldDescriptor::new("qty", "Qty", FieldKind::number());
        assert_eq!(type_keys(&field, &chars("4x2")), Some(FieldValue::Number(42.0)));
    }

    #[test]
    fn test_number_backspace_to_empty_is_empty_string() {
        let field = FieldDescriptor::new("qty", "Qty", FieldKind::number());
        let current = FieldValue::Number(7.0);
        assert_eq!(
            edit_value(&field, Some(&current), &InputKey::Backspace),
            Some(FieldValue::text(""))
        );
    }

    #[test]
    fn test_checkbox_toggles_on_space() {
        let field = FieldDescriptor::new("vip", "VIP", FieldKind::Checkbox);
        assert_eq!(
            edit_value(&field, None, &InputKey::Char(' ')),
            Some(FieldValue::Bool(true))
        );
        assert_eq!(
            edit_value(&field, Some(&FieldValue::Bool(true)), &InputKey::Char(' ')),
            Some(FieldValue::Bool(false))
        );
        assert_eq!(edit_value(&field, None, &InputKey::Char('x')), None);
    }

    #[test]
    fn test_select_cycles_forward_and_back() {
        let field = stage_field();
        assert_eq!(
            type_keys(&field, &[InputKey::Right]),
            Some(FieldValue::text("lead"))
        );
        assert_eq!(
            type_keys(&field, &[InputKey::Right, InputKey::Right, InputKey::Right, InputKey::Right]),
            Some(FieldValue::text("lead"))
        );
        assert_eq!(type_keys(&field, &[InputKey::Left]), Some(FieldValue::text("won")));
    }

    #[test]
    fn test_select_clear() {
        let field = stage_field();
        let current = FieldValue::text("won");
        assert_eq!(
            edit_value(&field, Some(&current), &InputKey::Delete),
            Some(FieldValue::text(""))
        );
    }

    #[test]
    fn test_select_without_options_is_inert() {
        let field = FieldDescriptor::new("empty", "Empty", FieldKind::Select { options: vec![] });
        assert_eq!(edit_value(&field, None, &InputKey::Right), None);
    }
}
