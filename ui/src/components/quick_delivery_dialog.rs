use dioxus::prelude::*;

use kgtrack_common::customer::CustomerId;
use kgtrack_common::lifecycle::validate_delivery;

use super::dashboard_state::use_dashboard_state;

/// Modal asking for a single delivery weight. Validation runs on every
/// keystroke; confirm is only enabled for an acceptable amount.
#[component]
pub fn QuickDeliveryDialog(customer_id: CustomerId) -> Element {
    let mut state = use_dashboard_state();
    let mut amount = use_signal(String::new);

    let Some(customer) = state.read().tracker.customer(customer_id).cloned() else {
        return rsx! {};
    };

    let text = amount.read().clone();
    // An empty field is not an error yet, just not confirmable.
    let error = if text.trim().is_empty() {
        None
    } else {
        validate_delivery(&customer, &text).err().map(|e| e.to_string())
    };
    let can_confirm = !text.trim().is_empty() && error.is_none();

    let mut close = move || state.write().delivering = None;
    let mut confirm = move || {
        let text = amount.read().clone();
        let mut s = state.write();
        if s.tracker.quick_deliver(customer_id, &text).is_ok() {
            s.delivering = None;
        }
    };

    rsx! {
        div { class: "dialog-backdrop", onclick: move |_| close() }
        div {
            class: "dialog",
            role: "dialog",
            "aria-modal": "true",
            onkeydown: move |evt: KeyboardEvent| match evt.key() {
                Key::Escape => close(),
                Key::Enter if can_confirm => confirm(),
                _ => {}
            },
            h2 { "Quick delivery" }
            div { class: "dialog-summary",
                p { "Customer: {customer.name}" }
                p { class: "remaining", "Remaining: {customer.remaining_kg} kg" }
            }
            div { class: "form-group",
                label { "Delivery weight (kg)" }
                input {
                    r#type: "number",
                    min: "0",
                    step: "any",
                    autofocus: true,
                    value: "{text}",
                    oninput: move |evt| amount.set(evt.value()),
                }
                if let Some(err) = error {
                    span { class: "field-error", "{err}" }
                }
            }
            div { class: "dialog-actions",
                button { onclick: move |_| close(), "Cancel" }
                button {
                    class: "primary",
                    disabled: !can_confirm,
                    onclick: move |_| confirm(),
                    "Confirm"
                }
            }
        }
    }
}
