#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveDateTime};
use contracts::shared::date_input::DateInputType;
use frontend::shared::components::DateInput;
use frontend::shared::validation::{
    provide_validation_messages, ValidationMessage, ValidationMessageStore, ValidationSummary,
};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn start_of_2024() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn change(input: &HtmlInputElement, text: &str) {
    input.set_value(text);
    dispatch_change(input);
}

/// Date controls sanitize text they cannot show to `""`; switching the
/// element to a text box lets malformed text reach the handler as typed.
fn change_as_text(input: &HtmlInputElement, text: &str) {
    input.set_type("text");
    input.set_value(text);
    dispatch_change(input);
}

fn dispatch_change(input: &HtmlInputElement) {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("change", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

struct Mounted {
    root: HtmlElement,
    input: HtmlInputElement,
    store: ValidationMessageStore,
    received: Arc<Mutex<Vec<NaiveDateTime>>>,
}

fn mount(input_type: DateInputType) -> Mounted {
    let document = document();
    let root: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    document.body().unwrap().append_child(&root).unwrap();

    let received = Arc::new(Mutex::new(Vec::new()));
    let store_slot = Rc::new(Cell::new(None));

    let handle = {
        let received = received.clone();
        let store_slot = store_slot.clone();
        leptos::mount::mount_to(root.clone(), move || {
            store_slot.set(Some(provide_validation_messages()));
            let value = RwSignal::new(start_of_2024());
            view! {
                <DateInput
                    value=value
                    on_change=Callback::new(move |v: NaiveDateTime| {
                        received.lock().unwrap().push(v);
                        value.set(v);
                    })
                    name="due"
                    display_name="Due"
                    input_type=input_type
                />
                <ValidationMessage field="due" />
                <ValidationSummary />
            }
        })
    };
    handle.forget();

    let input: HtmlInputElement = root
        .query_selector("input")
        .unwrap()
        .unwrap()
        .unchecked_into();

    Mounted {
        root,
        input,
        store: store_slot.take().unwrap(),
        received,
    }
}

#[wasm_bindgen_test]
fn test_renders_type_and_initial_value() {
    let mounted = mount(DateInputType::Month);
    assert_eq!(mounted.input.type_(), "month");
    assert_eq!(mounted.input.value(), "2024-01");
    assert_eq!(mounted.input.name(), "due");
}

#[wasm_bindgen_test]
fn test_sanitized_empty_value_is_rejected_for_required_field() {
    let mounted = mount(DateInputType::Date);

    // The date control drops an impossible date, so the handler sees ""
    change(&mounted.input, "2024-02-30");

    assert_eq!(mounted.input.value(), "");
    assert_eq!(
        mounted.store.message_for("due").as_deref(),
        Some("The Due field must be a date.")
    );
    assert!(mounted.received.lock().unwrap().is_empty());
}

#[wasm_bindgen_test]
fn test_malformed_text_is_kept_and_reported() {
    let mounted = mount(DateInputType::Date);

    change_as_text(&mounted.input, "2024-02-30");
    assert_eq!(mounted.input.value(), "2024-02-30");
    assert!(mounted.store.has_errors());

    change_as_text(&mounted.input, "not-a-date");
    assert_eq!(mounted.input.value(), "not-a-date");
    assert_eq!(
        mounted.store.message_for("due").as_deref(),
        Some("The Due field must be a date.")
    );
    assert!(mounted.received.lock().unwrap().is_empty());
}

#[wasm_bindgen_test]
fn test_valid_change_clears_message_and_updates_value() {
    let mounted = mount(DateInputType::Date);

    change_as_text(&mounted.input, "not-a-date");
    assert!(mounted.store.has_errors());

    change(&mounted.input, "2024-02-29");
    assert_eq!(mounted.store.message_for("due"), None);
    assert_eq!(
        mounted.received.lock().unwrap().as_slice(),
        &[NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()]
    );
}

#[wasm_bindgen_test]
async fn test_messages_render_after_invalid_change() {
    let mounted = mount(DateInputType::Date);
    assert!(mounted.root.query_selector(".validation-errors").unwrap().is_none());

    change_as_text(&mounted.input, "not-a-date");
    leptos::task::tick().await;

    let message = mounted
        .root
        .query_selector(".validation-message")
        .unwrap()
        .expect("field message rendered");
    assert_eq!(
        message.text_content().as_deref(),
        Some("The Due field must be a date.")
    );

    let items = mounted.root.query_selector_all(".validation-errors li").unwrap();
    assert_eq!(items.length(), 1);
    assert_eq!(
        items.item(0).and_then(|item| item.text_content()).as_deref(),
        Some("The Due field must be a date.")
    );

    change_as_text(&mounted.input, "2024-02-29");
    leptos::task::tick().await;
    assert!(mounted.root.query_selector(".validation-errors").unwrap().is_none());
    assert!(mounted.root.query_selector(".validation-message").unwrap().is_none());
}
