use dioxus::prelude::*;

use kgtrack_common::csv_export::CSV_HEADERS;
use kgtrack_common::customer::Customer;

use super::dashboard_state::use_dashboard_state;

#[component]
pub fn CustomerTable() -> Element {
    let state = use_dashboard_state();
    let customers = state.read().visible_customers();

    rsx! {
        div { class: "customer-table",
            table {
                thead {
                    tr {
                        // Skip the ID column; it is only useful in exports.
                        for header in CSV_HEADERS.iter().skip(1) {
                            th { key: "{header}", "{header}" }
                        }
                        th { "Actions" }
                    }
                }
                tbody {
                    if customers.is_empty() {
                        tr {
                            td { class: "empty-row", colspan: "10", "No customers" }
                        }
                    }
                    for customer in customers {
                        CustomerRow { key: "{customer.id}", customer }
                    }
                }
            }
        }
    }
}

#[component]
fn CustomerRow(customer: Customer) -> Element {
    let mut state = use_dashboard_state();
    let id = customer.id;
    let can_deliver = customer.remaining_kg > 0.0;
    let status_class = customer.status.as_str();
    let for_edit = customer.clone();

    rsx! {
        tr {
            td { "{customer.name}" }
            td { "{customer.order_kg}" }
            td { "{customer.deliver_kg}" }
            td { "{customer.remaining_kg}" }
            td { "{customer.total_order}" }
            td { "{customer.kind}" }
            td { class: "status-{status_class}", "{customer.status}" }
            td { "{customer.requested_date}" }
            td { "{customer.created_date}" }
            td { class: "row-actions",
                button {
                    onclick: move |_| state.write().open_edit_form(&for_edit),
                    "Edit"
                }
                button {
                    disabled: !can_deliver,
                    onclick: move |_| state.write().delivering = Some(id),
                    "Deliver"
                }
            }
        }
    }
}
