use dioxus::prelude::*;

use kgtrack_common::view_mode::ViewMode;

use super::csv_download::download_csv;
use super::customer_card::CustomerCardGrid;
use super::customer_form::CustomerForm;
use super::customer_table::CustomerTable;
use super::dashboard_state::{use_dashboard_state, DashboardState};
use super::metrics_cards::MetricsCards;
use super::quick_delivery_dialog::QuickDeliveryDialog;
use super::view_toggle::ViewToggle;

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(DashboardState::new()));

    rsx! { Dashboard {} }
}

#[component]
fn Dashboard() -> Element {
    let mut state = use_dashboard_state();

    let s = state.read();
    let view_mode = s.tracker.view_mode();
    let form_open = s.form.is_some();
    let delivering = s.delivering;
    let search = s.search.clone();
    drop(s);

    let heading = match view_mode {
        ViewMode::Table => "Customers",
        ViewMode::Card => "Customer cards",
    };

    rsx! {
        div { class: "kgtrack-app",
            MetricsCards {}

            div { class: "actions-row",
                ViewToggle {}
                button {
                    class: "export-button",
                    onclick: move |_| download_csv(&state.read().tracker),
                    "Export CSV"
                }
            }

            div { class: "list-header",
                h2 { "{heading}" }
                input {
                    class: "search-input",
                    placeholder: "Search...",
                    value: "{search}",
                    oninput: move |evt| state.write().search = evt.value(),
                }
                button {
                    class: "add-button",
                    onclick: move |_| {
                        let mut s = state.write();
                        if s.form.is_some() {
                            s.close_form();
                        } else {
                            s.open_add_form();
                        }
                    },
                    if form_open { "Close" } else { "Add" }
                }
            }

            if form_open {
                CustomerForm {}
            }

            if view_mode == ViewMode::Table {
                CustomerTable {}
            } else {
                CustomerCardGrid {}
            }

            if let Some(id) = delivering {
                QuickDeliveryDialog { customer_id: id }
            }
        }
    }
}
