use dioxus::prelude::*;

use kgtrack_common::customer::{Customer, CustomerId};
use kgtrack_common::input::CustomerInput;
use kgtrack_common::tracker::Tracker;

use super::web_storage::{app_store, AppBackend};

/// Which form the bottom sheet is showing.
#[derive(Clone, Debug, PartialEq)]
pub enum FormMode {
    Adding,
    Editing(CustomerId),
}

/// Shared application state accessible from all components.
///
/// The tracker is the single source of truth for customers and the view
/// preference; everything else here is transient UI state.
pub struct DashboardState {
    pub tracker: Tracker<AppBackend>,
    pub search: String,
    pub form: Option<(FormMode, CustomerInput)>,
    pub delivering: Option<CustomerId>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            tracker: Tracker::open(app_store()),
            search: String::new(),
            form: None,
            delivering: None,
        }
    }

    pub fn open_add_form(&mut self) {
        self.form = Some((FormMode::Adding, CustomerInput::blank(today())));
    }

    pub fn open_edit_form(&mut self, customer: &Customer) {
        self.form = Some((
            FormMode::Editing(customer.id),
            CustomerInput::from_customer(customer),
        ));
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Filtered customers, cloned out so the state can be released before rendering.
    pub fn visible_customers(&self) -> Vec<Customer> {
        self.tracker
            .search(&self.search)
            .into_iter()
            .cloned()
            .collect()
    }
}

pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn use_dashboard_state() -> Signal<DashboardState> {
    use_context::<Signal<DashboardState>>()
}
