use contracts::shared::date_input::{
    ConfigurationError, DateInputConverter, DateInputSettings, DateInputType, DateInputValue,
    ParseError,
};

/// State behind one `DateInput`: the text currently shown and the last
/// parsing message.
///
/// A rejected value stays in `raw` so the user keeps seeing what they typed.
#[derive(Debug, Clone)]
pub struct DateInputViewModel<T> {
    converter: DateInputConverter<T>,
    display_name: String,
    raw: String,
    error: Option<String>,
}

impl<T: DateInputValue> DateInputViewModel<T> {
    pub fn new(
        settings: DateInputSettings,
        display_name: impl Into<String>,
        initial: &T,
    ) -> Result<Self, ConfigurationError> {
        let converter = DateInputConverter::new(settings)?;
        let raw = converter.format_value(initial);
        Ok(Self {
            converter,
            display_name: display_name.into(),
            raw,
            error: None,
        })
    }

    pub fn input_type(&self) -> DateInputType {
        self.converter.input_type()
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }

    /// The bound value changed from outside; show it and drop any message.
    pub fn sync_value(&mut self, value: &T) {
        self.raw = self.converter.format_value(value);
        self.error = None;
    }

    /// Handles a value reported by the browser.
    pub fn on_input(&mut self, raw: String) -> Result<T, ParseError> {
        match self.converter.try_parse(&raw, &self.display_name) {
            Ok(value) => {
                self.raw = self.converter.format_value(&value);
                self.error = None;
                Ok(value)
            }
            Err(err) => {
                self.raw = raw;
                self.error = Some(err.message.clone());
                Err(err)
            }
        }
    }
}
