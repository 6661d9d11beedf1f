use crate::customer::{Customer, CustomerStatus};

/// Totals shown in the dashboard header cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardMetrics {
    /// Sum of remaining weight, one decimal place.
    pub total_remaining_kg: String,
    /// Sum of delivered weight, one decimal place.
    pub total_delivered_kg: String,
    /// Customers still in `Pending`.
    pub waiting_count: usize,
}

impl DashboardMetrics {
    pub fn compute(customers: &[Customer]) -> Self {
        let remaining: f64 = customers.iter().map(|c| c.remaining_kg).sum();
        let delivered: f64 = customers.iter().map(|c| c.deliver_kg).sum();
        let waiting_count = customers
            .iter()
            .filter(|c| c.status == CustomerStatus::Pending)
            .count();
        Self {
            total_remaining_kg: one_decimal(remaining),
            total_delivered_kg: one_decimal(delivered),
            waiting_count,
        }
    }
}

/// One decimal place, halves rounded away from zero.
fn one_decimal(kg: f64) -> String {
    format!("{:.1}", (kg * 10.0).round() / 10.0)
}
