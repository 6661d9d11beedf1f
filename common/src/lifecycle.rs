//! Customer record lifecycle: create, edit and quick delivery.
//!
//! Every operation takes the current collection by reference and returns a new
//! one. Records other than the target are cloned through untouched.

use thiserror::Error;

use crate::customer::{remaining_weight, Customer, CustomerId, CustomerStatus};
use crate::input::{coerce_count, coerce_kg, CustomerInput};

/// Form input rejected before any state change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    EmptyName,
    #[error("No customer with id {0}")]
    UnknownCustomer(CustomerId),
}

/// Quick-delivery amount rejected by the dialog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeliveryError {
    #[error("Enter a delivery weight")]
    Missing,
    #[error("Delivery weight must be a number")]
    NotANumber,
    #[error("Delivery weight must be greater than 0")]
    NotPositive,
    #[error("At most {remaining} kg can be delivered")]
    ExceedsRemaining { remaining: f64 },
    #[error("No customer with id {0}")]
    UnknownCustomer(CustomerId),
}

/// Hands out customer ids from wall-clock milliseconds, never repeating one.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume after the largest id already in use.
    pub fn seeded_from(customers: &[Customer]) -> Self {
        let last = customers.iter().map(|c| c.id.0).max().unwrap_or(0);
        Self { last }
    }

    /// Next id for a record created at `now_millis`.
    pub fn next_at(&mut self, now_millis: i64) -> CustomerId {
        let now = u64::try_from(now_millis).unwrap_or(0);
        self.last = now.max(self.last.saturating_add(1));
        CustomerId(self.last)
    }

    #[cfg(feature = "std")]
    pub fn next(&mut self) -> CustomerId {
        self.next_at(chrono::Utc::now().timestamp_millis())
    }
}

fn build_record(id: CustomerId, input: &CustomerInput, name: String) -> Customer {
    let order_kg = coerce_kg(&input.order_kg);
    let deliver_kg = coerce_kg(&input.deliver_kg);
    Customer {
        id,
        name,
        order_kg,
        deliver_kg,
        remaining_kg: remaining_weight(order_kg, deliver_kg),
        total_order: coerce_count(&input.total_order),
        kind: input.kind.clone(),
        status: input.status.clone(),
        requested_date: input.requested_date,
        created_date: input.created_date,
    }
}

fn trimmed_name(input: &CustomerInput) -> Result<String, ValidationError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name.to_string())
}

/// Build a new record from `input` and prepend it to the collection.
pub fn create(
    customers: &[Customer],
    id: CustomerId,
    input: &CustomerInput,
) -> Result<Vec<Customer>, ValidationError> {
    let name = trimmed_name(input)?;
    let mut next = Vec::with_capacity(customers.len() + 1);
    next.push(build_record(id, input, name));
    next.extend_from_slice(customers);
    Ok(next)
}

/// Replace the record with `id` by one rebuilt from `input`, keeping its position.
///
/// Status is taken from the form as-is, even when the weights say otherwise.
pub fn update(
    customers: &[Customer],
    id: CustomerId,
    input: &CustomerInput,
) -> Result<Vec<Customer>, ValidationError> {
    let name = trimmed_name(input)?;
    if !customers.iter().any(|c| c.id == id) {
        return Err(ValidationError::UnknownCustomer(id));
    }
    Ok(customers
        .iter()
        .map(|c| {
            if c.id == id {
                build_record(id, input, name.clone())
            } else {
                c.clone()
            }
        })
        .collect())
}

/// Check a quick-delivery amount typed into the dialog against `customer`.
pub fn validate_delivery(customer: &Customer, text: &str) -> Result<f64, DeliveryError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DeliveryError::Missing);
    }
    let kg: f64 = text.parse().map_err(|_| DeliveryError::NotANumber)?;
    if !kg.is_finite() {
        return Err(DeliveryError::NotANumber);
    }
    if kg <= 0.0 {
        return Err(DeliveryError::NotPositive);
    }
    if kg > customer.remaining_kg {
        return Err(DeliveryError::ExceedsRemaining {
            remaining: customer.remaining_kg,
        });
    }
    Ok(kg)
}

/// Record a delivery of `delivery_kg` against the record with `id`.
///
/// Expects an amount already accepted by [`validate_delivery`]. Status moves to
/// `Done` when nothing remains and is otherwise left alone.
pub fn quick_deliver(customers: &[Customer], id: CustomerId, delivery_kg: f64) -> Vec<Customer> {
    customers
        .iter()
        .map(|c| {
            if c.id != id {
                return c.clone();
            }
            let remaining_kg = c.remaining_kg - delivery_kg;
            Customer {
                deliver_kg: c.deliver_kg + delivery_kg,
                remaining_kg,
                status: if remaining_kg == 0.0 {
                    CustomerStatus::Done
                } else {
                    c.status.clone()
                },
                ..c.clone()
            }
        })
        .collect()
}
