mod view_model;

pub use view_model::DateInputViewModel;

use contracts::shared::date_input::{DateInputSettings, DateInputType, DateInputValue};
use leptos::prelude::*;

use crate::shared::validation::use_validation_messages;

/// Native date/time input bound to a typed value
///
/// `T` is `NaiveDateTime`, `DateTime<FixedOffset>` or an `Option` of either.
/// The browser's text is parsed on `change`; a valid value is passed to
/// `on_change`, an invalid one stays in the field and its message goes to the
/// page's `ValidationMessageStore`.
///
/// The `<input>` is the root element, so `attr:*` set by the caller
/// (`attr:min`, `attr:required`, ...) land on it.
#[component]
pub fn DateInput<T>(
    /// Bound value
    #[prop(into)]
    value: Signal<T>,
    /// Receives every successfully parsed value
    on_change: Callback<T>,
    /// Field name: `id`/`name` attribute and validation key
    #[prop(into)]
    name: String,
    /// Name used in the parsing message, defaults to `name`
    #[prop(optional, into)]
    display_name: Option<String>,
    /// Control type: date (default), month, time, datetime-local
    #[prop(optional)]
    input_type: DateInputType,
    /// Message template with a `{0}` slot for the display name
    #[prop(optional, into)]
    parsing_error_message: Option<String>,
    /// Full settings, e.g. loaded from JSON; takes precedence over `input_type`
    #[prop(optional)]
    settings: Option<DateInputSettings>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView
where
    T: DateInputValue + Send + Sync,
{
    let mut settings = settings.unwrap_or_else(|| DateInputSettings::new(input_type));
    if let Some(template) = parsing_error_message {
        settings.parsing_error_message = template;
    }
    let html_type = settings.input_type.html_type();
    let display_name = display_name.unwrap_or_else(|| name.clone());

    let view_model =
        match DateInputViewModel::new(settings, display_name, &value.get_untracked()) {
            Ok(view_model) => view_model,
            Err(err) => panic!("{}", err),
        };
    let state = RwSignal::new(view_model);
    let validation = use_validation_messages();

    // Values set from outside replace whatever text is in the field.
    // The first run only subscribes: the view model already holds that value.
    Effect::new(move |subscribed: Option<()>| {
        let current = value.get();
        if subscribed.is_some() {
            state.update(|vm| vm.sync_value(&current));
        }
    });

    let field = name.clone();
    let on_raw = move |raw: String| {
        let mut outcome = None;
        state.update(|vm| outcome = Some(vm.on_input(raw)));
        match outcome {
            Some(Ok(parsed)) => {
                if let Some(store) = validation {
                    store.clear(&field);
                }
                on_change.run(parsed);
            }
            Some(Err(err)) => {
                log::warn!("{}: {}", field, err);
                if let Some(store) = validation {
                    store.set(&field, err.message);
                }
            }
            None => {}
        }
    };

    let additional_class = move || class.get().unwrap_or_default();
    let input_class = move || {
        if state.with(|vm| vm.is_invalid()) {
            format!("form__input form__input--invalid {}", additional_class())
        } else {
            format!("form__input {}", additional_class())
        }
    };

    view! {
        <input
            id=name.clone()
            name=name
            type=html_type
            class=input_class
            aria-invalid=move || state.with(|vm| vm.is_invalid()).then_some("true")
            disabled=disabled
            prop:value=move || state.with(|vm| vm.raw().to_string())
            on:change=move |ev| on_raw(event_target_value(&ev))
        />
    }
}
