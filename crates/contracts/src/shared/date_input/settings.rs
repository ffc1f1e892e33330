use serde::{Deserialize, Serialize};

use super::input_type::DateInputType;

pub const DEFAULT_PARSING_ERROR_MESSAGE: &str = "The {0} field must be a date.";

/// Per-field configuration of a date input
///
/// Stored alongside other form settings as JSON, e.g.
/// `{"inputType":"month","parsingErrorMessage":"{0}: pick a month"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DateInputSettings {
    pub input_type: DateInputType,
    /// Template with a single `{0}` slot for the field's display name
    pub parsing_error_message: String,
}

impl Default for DateInputSettings {
    fn default() -> Self {
        Self {
            input_type: DateInputType::default(),
            parsing_error_message: DEFAULT_PARSING_ERROR_MESSAGE.to_string(),
        }
    }
}

impl DateInputSettings {
    pub fn new(input_type: DateInputType) -> Self {
        Self {
            input_type,
            ..Self::default()
        }
    }

    pub fn with_parsing_error_message(mut self, template: impl Into<String>) -> Self {
        self.parsing_error_message = template.into();
        self
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parsing message for one field
    pub fn format_parsing_error(&self, display_name: &str) -> String {
        format_template(&self.parsing_error_message, display_name)
    }
}

/// Fills `{0}` with `arg`. `{{` and `}}` are literal braces; any other
/// placeholder is copied through untouched.
fn format_template(template: &str, arg: &str) -> String {
    let mut result = String::with_capacity(template.len() + arg.len());
    let mut rest = template;

    while let Some(c) = rest.chars().next() {
        if rest.starts_with("{{") {
            result.push('{');
            rest = &rest[2..];
        } else if rest.starts_with("}}") {
            result.push('}');
            rest = &rest[2..];
        } else if rest.starts_with("{0}") {
            result.push_str(arg);
            rest = &rest[3..];
        } else {
            result.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }

    result
}
