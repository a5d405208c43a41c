//! Form field value objects

use super::validation::FieldName;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Label of the selected option, empty when nothing is chosen
    Choice(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration, value and
/// the validation message currently shown next to it
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: String,
    pub value: FieldValue,
    pub error: Option<String>,
}

impl FormField {
    /// Create a new free-text field
    pub fn text(name: FieldName, label: &str) -> Self {
        Self {
            name,
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            error: None,
        }
    }

    /// Create a new select field with nothing chosen
    pub fn select(name: FieldName, label: &str) -> Self {
        Self {
            name,
            label: label.to_string(),
            value: FieldValue::Choice(String::new()),
            error: None,
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self.value, FieldValue::Choice(_))
    }

    /// Get the raw value (text or selected label)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Choice(s) => s,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_text().is_empty()
    }

    /// Replace the value, keeping the field kind
    pub fn set_value(&mut self, value: &str) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Choice(s) => {
                s.clear();
                s.push_str(value);
            }
        }
    }

    /// Option after (or before) the current choice, with the empty choice in
    /// front and wrapping at both ends. A value that is not among `options`
    /// counts as the empty choice.
    pub fn next_choice<'a>(&self, options: &[&'a str], forward: bool) -> &'a str {
        let count = options.len() + 1;
        let index = options
            .iter()
            .position(|o| *o == self.as_text())
            .map_or(0, |i| i + 1);
        let next = if forward {
            (index + 1) % count
        } else {
            (index + count - 1) % count
        };
        if next == 0 {
            ""
        } else {
            options[next - 1]
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Choice(s) => s.clear(),
        }
    }

    pub fn set_error(&mut self, message: Option<&str>) {
        self.error = message.map(str::to_string);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(s) if s.is_empty() => String::new(),
            FieldValue::Choice(s) => format!("‹ {s} ›"),
        }
    }
}
