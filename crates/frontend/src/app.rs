use crate::shared::components::DateInput;
use crate::shared::validation::{provide_validation_messages, ValidationMessage, ValidationSummary};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use contracts::shared::date_input::{default_offset, DateInputSettings, DateInputType};
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

/// Settings for the reporting period field, in the shape forms persist them
const PERIOD_SETTINGS_JSON: &str =
    r#"{"inputType":"month","parsingErrorMessage":"{0}: choose a month"}"#;

/// Demo page: one field per input type
#[component]
pub fn App() -> impl IntoView {
    let validation = provide_validation_messages();

    let due_date = RwSignal::new(Utc::now().naive_utc());
    let period = RwSignal::new(None::<NaiveDateTime>);
    let reminder = RwSignal::new(Utc::now().naive_utc());
    let meeting = RwSignal::new(Some(Utc::now().with_timezone(&default_offset())));

    let period_settings = match DateInputSettings::from_json(PERIOD_SETTINGS_JSON) {
        Ok(settings) => settings,
        Err(e) => {
            log!("Failed to read period settings: {}", e);
            DateInputSettings::new(DateInputType::Month)
        }
    };

    let meeting_text = move || {
        meeting
            .get()
            .map(|value: DateTime<FixedOffset>| value.to_rfc3339())
            .unwrap_or_else(|| "—".to_string())
    };

    view! {
        <Flex vertical=true gap=FlexGap::Large attr:style="max-width: 420px; padding: 24px;">
            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Due date"</Label>
                <DateInput
                    value=due_date
                    on_change=Callback::new(move |v: NaiveDateTime| due_date.set(v))
                    name="due_date"
                    display_name="Due date"
                    attr:required=true
                />
                <ValidationMessage field="due_date" />
                <div>{move || due_date.get().date().to_string()}</div>
            </Flex>

            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Reporting period"</Label>
                <DateInput
                    value=period
                    on_change=Callback::new(move |v: Option<NaiveDateTime>| period.set(v))
                    name="period"
                    display_name="Reporting period"
                    settings=period_settings
                />
                <ValidationMessage field="period" />
                <div>
                    {move || {
                        period
                            .get()
                            .map(|value| value.format("%m.%Y").to_string())
                            .unwrap_or_else(|| "—".to_string())
                    }}
                </div>
            </Flex>

            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Reminder"</Label>
                <DateInput
                    value=reminder
                    on_change=Callback::new(move |v: NaiveDateTime| reminder.set(v))
                    name="reminder"
                    input_type=DateInputType::Time
                    attr:step="1"
                />
                <ValidationMessage field="reminder" />
                <div>{move || reminder.get().time().to_string()}</div>
            </Flex>

            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Meeting"</Label>
                <DateInput
                    value=meeting
                    on_change=Callback::new(move |v: Option<DateTime<FixedOffset>>| meeting.set(v))
                    name="meeting"
                    input_type=DateInputType::DateTime
                    parsing_error_message="Enter a valid date and time for {0}."
                />
                <ValidationMessage field="meeting" />
                <div>{meeting_text}</div>
            </Flex>

            <ValidationSummary />
            <div>
                {move || if validation.has_errors() { "Form has errors" } else { "Form is valid" }}
            </div>
        </Flex>
    }
}
