use chrono::NaiveDate;

use crate::customer::{Customer, CustomerKind, CustomerStatus};

/// Raw contents of the add/edit customer form.
///
/// Numeric fields are kept as the text the user typed; coercion happens when
/// the lifecycle operations build a record from them.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerInput {
    pub name: String,
    pub order_kg: String,
    pub deliver_kg: String,
    pub total_order: String,
    pub kind: CustomerKind,
    pub status: CustomerStatus,
    pub requested_date: NaiveDate,
    pub created_date: NaiveDate,
}

impl CustomerInput {
    /// An empty form, as shown after a save or cancel.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            order_kg: String::new(),
            deliver_kg: String::new(),
            total_order: String::new(),
            kind: CustomerKind::Pork,
            status: CustomerStatus::Pending,
            requested_date: today,
            created_date: today,
        }
    }

    /// Pre-fill the form from an existing record for editing.
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            order_kg: customer.order_kg.to_string(),
            deliver_kg: customer.deliver_kg.to_string(),
            total_order: customer.total_order.to_string(),
            kind: customer.kind.clone(),
            status: customer.status.clone(),
            requested_date: customer.requested_date,
            created_date: customer.created_date,
        }
    }
}

/// Coerce free-text weight input. Blank, non-numeric, non-finite or negative
/// input becomes 0.
pub fn coerce_kg(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Coerce free-text counter input. Fractions truncate toward zero.
pub fn coerce_count(text: &str) -> u32 {
    let kg = coerce_kg(text);
    if kg >= u32::MAX as f64 {
        u32::MAX
    } else {
        kg.trunc() as u32
    }
}
