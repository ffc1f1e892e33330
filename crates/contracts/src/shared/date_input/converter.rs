//! Conversion between the browser's text value and the bound value type

use std::borrow::Cow;
use std::marker::PhantomData;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use super::error::{ConfigurationError, ParseError};
use super::input_type::DateInputType;
use super::settings::DateInputSettings;
use super::value::{DateInputValue, TargetType, TypedValue};

/// Converts values of `T` to and from the text of one date input.
///
/// Built once per field. The bound type is resolved at construction, so an
/// unsupported `T` fails here and never during a conversion.
#[derive(Debug, Clone)]
pub struct DateInputConverter<T> {
    settings: DateInputSettings,
    target: TargetType,
    _value: PhantomData<fn() -> T>,
}

impl<T: DateInputValue> DateInputConverter<T> {
    pub fn new(settings: DateInputSettings) -> Result<Self, ConfigurationError> {
        let target = TargetType::resolve::<T>()?;
        Ok(Self {
            settings,
            target,
            _value: PhantomData,
        })
    }

    pub fn for_type(input_type: DateInputType) -> Result<Self, ConfigurationError> {
        Self::new(DateInputSettings::new(input_type))
    }

    pub fn input_type(&self) -> DateInputType {
        self.settings.input_type
    }

    pub fn target(&self) -> TargetType {
        self.target
    }

    /// Text for the input's `value` attribute; empty when there is no value.
    pub fn format_value(&self, value: &T) -> String {
        format_for_display(value.to_typed().as_ref(), self.input_type().html_format())
    }

    /// Parses what the browser reported for the field.
    ///
    /// An empty string is "no value": accepted for `Option<_>` targets,
    /// rejected with the field's message otherwise.
    pub fn try_parse(&self, raw: &str, display_name: &str) -> Result<T, ParseError> {
        let input_type = self.input_type();

        if raw.is_empty() {
            if !self.target.optional {
                return Err(self.parse_error(display_name));
            }
            return T::from_typed(None).ok_or_else(|| self.parse_error(display_name));
        }

        let normalized = normalize_browser_value(raw, input_type);
        let padded = pad(&normalized, input_type);
        let clock = match parse_internal(&padded, input_type) {
            Some(clock) => clock,
            None => {
                log::debug!("rejected {} input value {:?}", input_type, raw);
                return Err(self.parse_error(display_name));
            }
        };

        T::from_typed(Some(TypedValue::from_clock(self.target.kind, clock)))
            .ok_or_else(|| self.parse_error(display_name))
    }

    fn parse_error(&self, display_name: &str) -> ParseError {
        ParseError::new(self.settings.format_parsing_error(display_name))
    }
}

/// Formats `value` with `html_format`. chrono's numeric specifiers are
/// zero-padded ASCII and never consult a locale.
///
/// Browser controls only take four-digit years, so a dated value outside
/// 0000..=9999 has no representation and formats as an empty string.
pub fn format_for_display(value: Option<&TypedValue>, html_format: &str) -> String {
    let Some(clock) = value.map(TypedValue::clock) else {
        return String::new();
    };

    if html_format.contains("%Y") && !(0..=9999).contains(&clock.year()) {
        log::warn!("year {} cannot be shown in a date input", clock.year());
        return String::new();
    }

    clock.format(html_format).to_string()
}

/// Accepts the shapes browsers actually send: `T` between date and time,
/// and no seconds when they are zero.
fn normalize_browser_value(raw: &str, input_type: DateInputType) -> Cow<'_, str> {
    match input_type {
        DateInputType::Time if raw.len() == 5 => Cow::Owned(format!("{}:00", raw)),
        DateInputType::DateTime => {
            let mut value = Cow::Borrowed(raw);
            if raw.as_bytes().get(10) == Some(&b'T') {
                value = Cow::Owned(format!("{} {}", &raw[..10], &raw[11..]));
            }
            if value.len() == 16 {
                value = Cow::Owned(format!("{}:00", value));
            }
            value
        }
        _ => Cow::Borrowed(raw),
    }
}

/// Completes a partial value into the input type's internal format.
fn pad(raw: &str, input_type: DateInputType) -> Cow<'_, str> {
    match input_type {
        DateInputType::Date => Cow::Owned(format!("{} 00:00:00", raw)),
        DateInputType::Month => Cow::Owned(format!("{}-01 00:00:00", raw)),
        DateInputType::Time | DateInputType::DateTime => Cow::Borrowed(raw),
    }
}

/// Parses a padded value strictly against the internal format.
///
/// `Time` values carry no date and are anchored to 0001-01-01. chrono reads
/// second `60` as a leap second; browser controls never produce one, so it
/// is rejected.
fn parse_internal(padded: &str, input_type: DateInputType) -> Option<NaiveDateTime> {
    let format = input_type.internal_format();
    if !matches_layout(padded, format) {
        return None;
    }

    let parsed = match input_type {
        DateInputType::Time => {
            let time = NaiveTime::parse_from_str(padded, format).ok()?;
            NaiveDate::from_ymd_opt(1, 1, 1)?.and_time(time)
        }
        DateInputType::Date | DateInputType::Month | DateInputType::DateTime => {
            NaiveDateTime::parse_from_str(padded, format).ok()?
        }
    };

    (parsed.nanosecond() < 1_000_000_000).then_some(parsed)
}

/// Checks field widths, which chrono's parser does not enforce.
///
/// `%Y` needs exactly four digits, the other specifiers exactly two, and
/// every literal must match.
fn matches_layout(value: &str, format: &str) -> bool {
    let mut value = value.as_bytes().iter();
    let mut format = format.bytes();

    while let Some(f) = format.next() {
        let width = match f {
            b'%' => match format.next() {
                Some(b'Y') => 4,
                Some(b'm' | b'd' | b'H' | b'M' | b'S') => 2,
                _ => return false,
            },
            literal => {
                if value.next() != Some(&literal) {
                    return false;
                }
                continue;
            }
        };

        for _ in 0..width {
            match value.next() {
                Some(b) if b.is_ascii_digit() => {}
                _ => return false,
            }
        }
    }

    value.next().is_none()
}
