//! Input sub-kinds and the format pair each of them uses

use serde::{Deserialize, Serialize};

/// Complete layout every padded `Date`/`Month`/`DateTime` value is parsed against.
pub(crate) const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
pub(crate) const MONTH_FORMAT: &str = "%Y-%m";
pub(crate) const TIME_FORMAT: &str = "%H:%M:%S";

/// Which date/time control the widget renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateInputType {
    #[default]
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "time")]
    Time,
    #[serde(rename = "datetime-local", alias = "datetime")]
    DateTime,
}

/// `(html, internal)` formats derived from a [`DateInputType`]. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatPair {
    /// Layout the browser control reads and writes
    pub html: &'static str,
    /// Layout the padded raw value is parsed against
    pub internal: &'static str,
}

impl DateInputType {
    /// Value of the `type` attribute on the rendered `<input>`
    pub fn html_type(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Month => "month",
            Self::Time => "time",
            Self::DateTime => "datetime-local",
        }
    }

    pub fn formats(&self) -> FormatPair {
        match self {
            Self::Date => FormatPair {
                html: DATE_FORMAT,
                internal: DATE_TIME_FORMAT,
            },
            Self::Month => FormatPair {
                html: MONTH_FORMAT,
                internal: DATE_TIME_FORMAT,
            },
            Self::Time => FormatPair {
                html: TIME_FORMAT,
                internal: TIME_FORMAT,
            },
            Self::DateTime => FormatPair {
                html: DATE_TIME_FORMAT,
                internal: DATE_TIME_FORMAT,
            },
        }
    }

    pub fn html_format(&self) -> &'static str {
        self.formats().html
    }

    pub fn internal_format(&self) -> &'static str {
        self.formats().internal
    }

    pub fn all() -> Vec<DateInputType> {
        vec![
            DateInputType::Date,
            DateInputType::Month,
            DateInputType::Time,
            DateInputType::DateTime,
        ]
    }
}

impl std::fmt::Display for DateInputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.html_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pairs() {
        assert_eq!(
            DateInputType::Date.formats(),
            FormatPair {
                html: "%Y-%m-%d",
                internal: "%Y-%m-%d %H:%M:%S"
            }
        );
        assert_eq!(DateInputType::Month.html_format(), "%Y-%m");
        assert_eq!(DateInputType::Month.internal_format(), DATE_TIME_FORMAT);
        assert_eq!(DateInputType::Time.html_format(), "%H:%M:%S");
        assert_eq!(DateInputType::Time.internal_format(), "%H:%M:%S");
        assert_eq!(DateInputType::DateTime.html_format(), DATE_TIME_FORMAT);
        assert_eq!(DateInputType::DateTime.internal_format(), DATE_TIME_FORMAT);
    }

    #[test]
    fn test_html_types() {
        let types: Vec<_> = DateInputType::all().iter().map(|t| t.html_type()).collect();
        assert_eq!(types, vec!["date", "month", "time", "datetime-local"]);
        assert_eq!(DateInputType::DateTime.to_string(), "datetime-local");
    }

    #[test]
    fn test_default_is_date() {
        assert_eq!(DateInputType::default(), DateInputType::Date);
    }

    #[test]
    fn test_serde_uses_html_type() {
        let json = serde_json::to_string(&DateInputType::DateTime).unwrap();
        assert_eq!(json, "\"datetime-local\"");
        let parsed: DateInputType = serde_json::from_str("\"month\"").unwrap();
        assert_eq!(parsed, DateInputType::Month);
        let legacy: DateInputType = serde_json::from_str("\"datetime\"").unwrap();
        assert_eq!(legacy, DateInputType::DateTime);
    }
}
