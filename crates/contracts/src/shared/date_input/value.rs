//! Value types a date input can be bound to

use std::any::{type_name, TypeId};

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};

use super::error::ConfigurationError;

/// Underlying value kind once optionality is unwrapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetValueKind {
    PlainDateTime,
    OffsetDateTime,
}

/// Resolved once per converter from the bound Rust type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetType {
    pub kind: TargetValueKind,
    /// `Option<_>` wrapper: an empty input means "no value"
    pub optional: bool,
}

impl TargetType {
    /// Maps a Rust type onto the supported set, or reports the type by name.
    pub fn resolve<T: ?Sized + 'static>() -> Result<Self, ConfigurationError> {
        let id = TypeId::of::<T>();
        let (kind, optional) = if id == TypeId::of::<NaiveDateTime>() {
            (TargetValueKind::PlainDateTime, false)
        } else if id == TypeId::of::<Option<NaiveDateTime>>() {
            (TargetValueKind::PlainDateTime, true)
        } else if id == TypeId::of::<DateTime<FixedOffset>>() {
            (TargetValueKind::OffsetDateTime, false)
        } else if id == TypeId::of::<Option<DateTime<FixedOffset>>>() {
            (TargetValueKind::OffsetDateTime, true)
        } else {
            let type_name = type_name::<T>();
            log::error!("date input bound to unsupported type {}", type_name);
            return Err(ConfigurationError::UnsupportedType { type_name });
        };

        Ok(Self { kind, optional })
    }
}

/// Offset given to values parsed into an offset-aware target. The browser
/// formats carry no offset, so this is always UTC.
pub fn default_offset() -> FixedOffset {
    Utc.fix()
}

/// A concrete value, independent of the Rust type it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypedValue {
    Plain(NaiveDateTime),
    Offset(DateTime<FixedOffset>),
}

impl TypedValue {
    /// Wall-clock fields as written in the value; any offset is dropped.
    pub fn clock(&self) -> NaiveDateTime {
        match self {
            TypedValue::Plain(value) => *value,
            TypedValue::Offset(value) => value.naive_local(),
        }
    }

    /// Builds the variant for `kind` from parsed clock fields.
    pub fn from_clock(kind: TargetValueKind, clock: NaiveDateTime) -> Self {
        match kind {
            TargetValueKind::PlainDateTime => TypedValue::Plain(clock),
            TargetValueKind::OffsetDateTime => {
                TypedValue::Offset(default_offset().from_utc_datetime(&clock))
            }
        }
    }
}

mod sealed {
    pub trait Sealed {}

    /// Types that cannot represent "no value"
    pub trait Required {}

    impl Sealed for chrono::NaiveDateTime {}
    impl Sealed for chrono::DateTime<chrono::FixedOffset> {}
    impl<T: Required> Sealed for Option<T> {}

    impl Required for chrono::NaiveDateTime {}
    impl Required for chrono::DateTime<chrono::FixedOffset> {}
}

/// Bridge between a bindable Rust type and [`TypedValue`].
///
/// Sealed: only `NaiveDateTime`, `DateTime<FixedOffset>` and their `Option`
/// wrappers implement it.
pub trait DateInputValue: sealed::Sealed + Clone + PartialEq + 'static {
    fn to_typed(&self) -> Option<TypedValue>;

    /// `None` when the type has no way to hold `value`, which only happens
    /// for an absent value and a non-optional type.
    fn from_typed(value: Option<TypedValue>) -> Option<Self>;
}

impl DateInputValue for NaiveDateTime {
    fn to_typed(&self) -> Option<TypedValue> {
        Some(TypedValue::Plain(*self))
    }

    fn from_typed(value: Option<TypedValue>) -> Option<Self> {
        value.map(|v| v.clock())
    }
}

impl DateInputValue for DateTime<FixedOffset> {
    fn to_typed(&self) -> Option<TypedValue> {
        Some(TypedValue::Offset(*self))
    }

    fn from_typed(value: Option<TypedValue>) -> Option<Self> {
        value.map(|v| match v {
            TypedValue::Offset(value) => value,
            TypedValue::Plain(clock) => default_offset().from_utc_datetime(&clock),
        })
    }
}

impl<T> DateInputValue for Option<T>
where
    T: DateInputValue + sealed::Required,
{
    fn to_typed(&self) -> Option<TypedValue> {
        self.as_ref().and_then(|v| v.to_typed())
    }

    fn from_typed(value: Option<TypedValue>) -> Option<Self> {
        Some(value.and_then(|v| T::from_typed(Some(v))))
    }
}
