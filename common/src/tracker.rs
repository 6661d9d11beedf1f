//! Application state for the dashboard.
//!
//! `Tracker` is created once by whichever front-end hosts it and handed to the
//! components that need it. It owns the persisted customer list and view
//! preference; every mutation replaces the whole list and writes it back.

use crate::csv_export::export_csv;
use crate::customer::{Customer, CustomerId};
use crate::filter::filter_customers;
use crate::input::CustomerInput;
use crate::lifecycle::{self, DeliveryError, IdGenerator, ValidationError};
use crate::metrics::DashboardMetrics;
use crate::persisted::Persisted;
use crate::store::{KvBackend, Store};
use crate::view_mode::ViewMode;

pub const CUSTOMERS_KEY: &str = "customers";
pub const VIEW_MODE_KEY: &str = "viewMode";

/// Storage keys used by a [`Tracker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub customers_key: String,
    pub view_mode_key: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            customers_key: CUSTOMERS_KEY.into(),
            view_mode_key: VIEW_MODE_KEY.into(),
        }
    }
}

pub struct Tracker<B> {
    customers: Persisted<Vec<Customer>, B>,
    view_mode: Persisted<ViewMode, B>,
    ids: IdGenerator,
}

impl<B: KvBackend> Tracker<B> {
    pub fn open(store: Store<B>) -> Self {
        Self::with_config(store, TrackerConfig::default())
    }

    pub fn with_config(store: Store<B>, config: TrackerConfig) -> Self {
        let customers = Persisted::open_list(store.clone(), config.customers_key);
        let view_mode = Persisted::open(store, config.view_mode_key, ViewMode::default());
        let ids = IdGenerator::seeded_from(customers.get());
        tracing::debug!(
            customers = customers.get().len(),
            view_mode = %view_mode.get(),
            "tracker loaded"
        );
        Self {
            customers,
            view_mode,
            ids,
        }
    }

    pub fn customers(&self) -> &[Customer] {
        self.customers.get()
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.get().iter().find(|c| c.id == id)
    }

    /// Add a customer created at `now_millis`. Returns its new id.
    pub fn add_customer_at(
        &mut self,
        input: &CustomerInput,
        now_millis: i64,
    ) -> Result<CustomerId, ValidationError> {
        let id = self.ids.next_at(now_millis);
        self.insert(id, input)
    }

    fn insert(
        &mut self,
        id: CustomerId,
        input: &CustomerInput,
    ) -> Result<CustomerId, ValidationError> {
        let next = lifecycle::create(self.customers.get(), id, input)?;
        self.customers.set(next);
        tracing::info!(%id, "customer added");
        Ok(id)
    }

    #[cfg(feature = "std")]
    pub fn add_customer(&mut self, input: &CustomerInput) -> Result<CustomerId, ValidationError> {
        let id = self.ids.next();
        self.insert(id, input)
    }

    /// Rewrite an existing customer from form input.
    ///
    /// An unknown id leaves everything untouched and is only logged.
    pub fn edit_customer(
        &mut self,
        id: CustomerId,
        input: &CustomerInput,
    ) -> Result<(), ValidationError> {
        match lifecycle::update(self.customers.get(), id, input) {
            Ok(next) => {
                self.customers.set(next);
                tracing::info!(%id, "customer updated");
                Ok(())
            }
            Err(ValidationError::UnknownCustomer(id)) => {
                tracing::warn!(%id, "edit for unknown customer ignored");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Validate the dialog amount and, if accepted, record the delivery.
    pub fn quick_deliver(&mut self, id: CustomerId, amount: &str) -> Result<f64, DeliveryError> {
        let Some(customer) = self.customer(id) else {
            tracing::warn!(%id, "delivery for unknown customer ignored");
            return Err(DeliveryError::UnknownCustomer(id));
        };
        let kg = lifecycle::validate_delivery(customer, amount)?;
        self.customers
            .update(|prev| lifecycle::quick_deliver(prev, id, kg));
        tracing::info!(%id, kg, "delivery recorded");
        Ok(kg)
    }

    pub fn search(&self, term: &str) -> Vec<&Customer> {
        filter_customers(self.customers.get(), term)
    }

    pub fn metrics(&self) -> DashboardMetrics {
        DashboardMetrics::compute(self.customers.get())
    }

    /// CSV of the full, unfiltered collection.
    pub fn export_csv(&self) -> String {
        export_csv(self.customers.get())
    }

    pub fn view_mode(&self) -> ViewMode {
        *self.view_mode.get()
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode.set(mode);
    }

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.view_mode.update(|mode| mode.toggle());
        self.view_mode()
    }

    /// Drop every customer, in memory and in storage.
    pub fn clear_customers(&mut self) {
        self.customers.reset(Vec::new());
        tracing::info!("customers cleared");
    }
}
