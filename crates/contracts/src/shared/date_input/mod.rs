//! Typed date/time input conversion
//!
//! Maps an input type (`date`, `month`, `time`, `datetime-local`) to the
//! browser's text format and converts that text to and from a
//! `chrono::NaiveDateTime` or `chrono::DateTime<FixedOffset>`, optionally
//! wrapped in `Option`.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDateTime;
//! use contracts::shared::date_input::{DateInputConverter, DateInputType};
//!
//! let converter = DateInputConverter::<NaiveDateTime>::for_type(DateInputType::Month).unwrap();
//! let value = converter.try_parse("2023-07", "Period").unwrap();
//! assert_eq!(converter.format_value(&value), "2023-07");
//! ```

mod converter;
mod error;
mod input_type;
mod settings;
mod value;

pub use converter::{format_for_display, DateInputConverter};
pub use error::{ConfigurationError, ParseError};
pub use input_type::{DateInputType, FormatPair};
pub use settings::{DateInputSettings, DEFAULT_PARSING_ERROR_MESSAGE};
pub use value::{default_offset, DateInputValue, TargetType, TargetValueKind, TypedValue};
