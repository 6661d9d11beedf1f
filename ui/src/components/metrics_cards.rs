use dioxus::prelude::*;

use super::dashboard_state::use_dashboard_state;

#[component]
pub fn MetricsCards() -> Element {
    let state = use_dashboard_state();
    let metrics = state.read().tracker.metrics();

    rsx! {
        div { class: "metrics-grid",
            MetricsCard {
                title: "Remaining (kg)",
                value: metrics.total_remaining_kg,
                accent: "metrics-blue",
            }
            MetricsCard {
                title: "Delivered (kg)",
                value: metrics.total_delivered_kg,
                accent: "metrics-green",
            }
            MetricsCard {
                title: "Waiting customers",
                value: metrics.waiting_count.to_string(),
                accent: "metrics-orange",
            }
        }
    }
}

#[component]
fn MetricsCard(title: &'static str, value: String, accent: &'static str) -> Element {
    rsx! {
        div { class: "metrics-card {accent}",
            p { class: "metrics-title", "{title}" }
            p { class: "metrics-value", "{value}" }
        }
    }
}
