use chrono::NaiveDate;
use dioxus::prelude::*;

use kgtrack_common::customer::{CustomerKind, CustomerStatus};
use kgtrack_common::input::CustomerInput;

use super::dashboard_state::{use_dashboard_state, FormMode};

/// Bottom sheet for adding or editing a customer.
#[component]
pub fn CustomerForm() -> Element {
    let mut state = use_dashboard_state();
    let mut error = use_signal(|| None::<String>);

    let Some((mode, form)) = state.read().form.clone() else {
        return rsx! {};
    };

    let title = match mode {
        FormMode::Adding => "New customer",
        FormMode::Editing(_) => "Edit customer",
    };
    let submit_label = match mode {
        FormMode::Adding => "Save",
        FormMode::Editing(_) => "Update",
    };
    let kind_value = form.kind.as_str().to_string();
    let status_value = form.status.as_str().to_string();

    // Apply a change to the open form, if it is still open.
    let mut edit = move |f: &dyn Fn(&mut CustomerInput)| {
        if let Some((_, form)) = state.write().form.as_mut() {
            f(form);
        }
    };

    let submit = move |_| {
        let mut s = state.write();
        let Some((mode, form)) = s.form.clone() else {
            return;
        };
        let result = match mode {
            FormMode::Adding => s.tracker.add_customer(&form).map(|_| ()),
            FormMode::Editing(id) => s.tracker.edit_customer(id, &form),
        };
        match result {
            Ok(()) => {
                s.close_form();
                error.set(None);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        div { class: "sheet-backdrop",
            onclick: move |_| state.write().close_form(),
        }
        div {
            class: "bottom-sheet",
            role: "dialog",
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    state.write().close_form();
                }
            },
            h2 { "{title}" }
            div { class: "form-grid",
                div { class: "form-group",
                    label { "Name" }
                    input {
                        r#type: "text",
                        placeholder: "Customer name",
                        value: "{form.name}",
                        oninput: move |evt| {
                            let v = evt.value();
                            edit(&|f: &mut CustomerInput| f.name = v.clone());
                        },
                    }
                    if let Some(err) = error.read().as_ref() {
                        span { class: "field-error", "{err}" }
                    }
                }
                div { class: "form-group",
                    label { "Ordered (kg)" }
                    input {
                        r#type: "number",
                        min: "0",
                        placeholder: "e.g. 10",
                        value: "{form.order_kg}",
                        oninput: move |evt| {
                            let v = evt.value();
                            edit(&|f: &mut CustomerInput| f.order_kg = v.clone());
                        },
                    }
                }
                div { class: "form-group",
                    label { "Delivered (kg)" }
                    input {
                        r#type: "number",
                        min: "0",
                        placeholder: "e.g. 5",
                        value: "{form.deliver_kg}",
                        oninput: move |evt| {
                            let v = evt.value();
                            edit(&|f: &mut CustomerInput| f.deliver_kg = v.clone());
                        },
                    }
                }
                div { class: "form-group",
                    label { "Total orders" }
                    input {
                        r#type: "number",
                        min: "0",
                        placeholder: "e.g. 3",
                        value: "{form.total_order}",
                        oninput: move |evt| {
                            let v = evt.value();
                            edit(&|f: &mut CustomerInput| f.total_order = v.clone());
                        },
                    }
                }
                div { class: "form-group",
                    label { "Type" }
                    select {
                        value: "{kind_value}",
                        onchange: move |evt| {
                            let kind = CustomerKind::from(evt.value());
                            edit(&|f: &mut CustomerInput| f.kind = kind.clone());
                        },
                        for kind in CustomerKind::all() {
                            option { key: "{kind}", value: kind.as_str(), "{kind}" }
                        }
                        if let CustomerKind::Other(tag) = &form.kind {
                            option { value: "{tag}", "{tag}" }
                        }
                    }
                }
                div { class: "form-group",
                    label { "Status" }
                    select {
                        value: "{status_value}",
                        onchange: move |evt| {
                            if let Some(status) = CustomerStatus::parse(&evt.value()) {
                                edit(&|f: &mut CustomerInput| f.status = status.clone());
                            }
                        },
                        for status in CustomerStatus::all() {
                            option { key: "{status}", value: status.as_str(), "{status}" }
                        }
                        if let CustomerStatus::Other(tag) = &form.status {
                            option { value: "{tag}", "{tag}" }
                        }
                    }
                }
                div { class: "form-group",
                    label { "Requested date" }
                    input {
                        r#type: "date",
                        value: "{form.requested_date}",
                        onchange: move |evt| {
                            if let Ok(date) = evt.value().parse::<NaiveDate>() {
                                edit(&|f: &mut CustomerInput| f.requested_date = date);
                            }
                        },
                    }
                }
                div { class: "form-group",
                    label { "Created date" }
                    input {
                        r#type: "date",
                        value: "{form.created_date}",
                        onchange: move |evt| {
                            if let Ok(date) = evt.value().parse::<NaiveDate>() {
                                edit(&|f: &mut CustomerInput| f.created_date = date);
                            }
                        },
                    }
                }
                div { class: "form-actions",
                    button { class: "primary", onclick: submit, "{submit_label}" }
                    button {
                        onclick: move |_| {
                            error.set(None);
                            state.write().close_form();
                        },
                        "Cancel"
                    }
                }
            }
        }
    }
}
