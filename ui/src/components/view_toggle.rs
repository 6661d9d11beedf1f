use dioxus::prelude::*;

use kgtrack_common::view_mode::ViewMode;

use super::dashboard_state::use_dashboard_state;

/// Table / card switch. The choice is persisted by the tracker.
#[component]
pub fn ViewToggle() -> Element {
    let mut state = use_dashboard_state();
    let current = state.read().tracker.view_mode();

    rsx! {
        div { class: "view-toggle", role: "group",
            for mode in [ViewMode::Table, ViewMode::Card] {
                {
                    let pressed = mode == current;
                    let label = match mode {
                        ViewMode::Table => "Table",
                        ViewMode::Card => "Cards",
                    };
                    rsx! {
                        button {
                            key: "{mode}",
                            class: if pressed { "toggle-option active" } else { "toggle-option" },
                            "aria-pressed": "{pressed}",
                            onclick: move |_| state.write().tracker.set_view_mode(mode),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
