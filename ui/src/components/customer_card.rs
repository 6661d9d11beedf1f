use dioxus::prelude::*;

use kgtrack_common::customer::Customer;

use super::dashboard_state::use_dashboard_state;

#[component]
pub fn CustomerCardGrid() -> Element {
    let state = use_dashboard_state();
    let customers = state.read().visible_customers();

    if customers.is_empty() {
        return rsx! {
            div { class: "empty-cards", "No customers" }
        };
    }

    rsx! {
        div { class: "card-grid",
            for customer in customers {
                CustomerCard { key: "{customer.id}", customer }
            }
        }
    }
}

#[component]
fn CustomerCard(customer: Customer) -> Element {
    let mut state = use_dashboard_state();
    let id = customer.id;
    let can_deliver = customer.remaining_kg > 0.0;
    let status_class = customer.status.as_str();
    let for_edit = customer.clone();

    rsx! {
        div { class: "customer-card",
            div { class: "card-header",
                h3 { "{customer.name}" }
                span { class: "status-badge status-{status_class}", "{customer.status}" }
            }
            dl { class: "card-fields",
                dt { "Type" }
                dd { "{customer.kind}" }
                dt { "Ordered (kg)" }
                dd { "{customer.order_kg}" }
                dt { "Delivered (kg)" }
                dd { "{customer.deliver_kg}" }
                dt { "Remaining (kg)" }
                dd { class: "remaining", "{customer.remaining_kg}" }
                dt { "Total orders" }
                dd { "{customer.total_order}" }
                dt { "Requested" }
                dd { "{customer.requested_date}" }
                dt { "Created" }
                dd { "{customer.created_date}" }
            }
            div { class: "card-actions",
                button {
                    onclick: move |_| state.write().open_edit_form(&for_edit),
                    "Edit"
                }
                button {
                    disabled: !can_deliver,
                    onclick: move |_| state.write().delivering = Some(id),
                    "Quick delivery"
                }
            }
        }
    }
}
