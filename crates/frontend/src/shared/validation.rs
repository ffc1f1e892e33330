//! Field-scoped validation messages shared by the form controls of a page

use std::collections::BTreeMap;

use leptos::prelude::*;
use thaw::*;

/// Messages keyed by field name. Provided via context; controls report into
/// it when it is present.
#[derive(Clone, Copy)]
pub struct ValidationMessageStore {
    messages: RwSignal<BTreeMap<String, String>>,
}

impl ValidationMessageStore {
    pub fn new() -> Self {
        Self {
            messages: RwSignal::new(BTreeMap::new()),
        }
    }

    pub fn set(&self, field: &str, message: impl Into<String>) {
        let message = message.into();
        self.messages.update(|messages| {
            messages.insert(field.to_string(), message);
        });
    }

    pub fn clear(&self, field: &str) {
        // Avoid notifying subscribers when nothing is stored for the field
        if self
            .messages
            .with_untracked(|messages| messages.contains_key(field))
        {
            self.messages.update(|messages| {
                messages.remove(field);
            });
        }
    }

    pub fn message_for(&self, field: &str) -> Option<String> {
        self.messages.with(|messages| messages.get(field).cloned())
    }

    pub fn has_errors(&self) -> bool {
        self.messages.with(|messages| !messages.is_empty())
    }

    /// All `(field, message)` pairs ordered by field name
    pub fn messages(&self) -> Vec<(String, String)> {
        self.messages.with(|messages| {
            messages
                .iter()
                .map(|(field, message)| (field.clone(), message.clone()))
                .collect()
        })
    }
}

impl Default for ValidationMessageStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_validation_messages() -> ValidationMessageStore {
    let store = ValidationMessageStore::new();
    provide_context(store);
    store
}

pub fn use_validation_messages() -> Option<ValidationMessageStore> {
    use_context::<ValidationMessageStore>()
}

/// Message for a single field, if any
#[component]
pub fn ValidationMessage(#[prop(into)] field: String) -> impl IntoView {
    let store = use_validation_messages();

    move || {
        store
            .and_then(|store| store.message_for(&field))
            .map(|message| view! { <div class="validation-message">{message}</div> })
    }
}

/// Every current message, shown as one error bar
#[component]
pub fn ValidationSummary() -> impl IntoView {
    let store = use_validation_messages();

    move || {
        let messages = store.map(|store| store.messages()).unwrap_or_default();
        (!messages.is_empty()).then(|| {
            view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <ul class="validation-errors">
                        {messages
                            .into_iter()
                            .map(|(_, message)| view! { <li>{message}</li> })
                            .collect_view()}
                    </ul>
                </MessageBar>
            }
        })
    }
}
