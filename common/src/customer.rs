use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique customer identifier (millisecond timestamp at creation, monotonically increasing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub u64);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category of meat a customer orders.
///
/// Stored as a plain string so that tags written by older builds survive a
/// load/save cycle untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CustomerKind {
    Poultry,
    Pork,
    Other(String),
}

impl CustomerKind {
    pub fn all() -> &'static [CustomerKind] {
        &[CustomerKind::Poultry, CustomerKind::Pork]
    }

    pub fn as_str(&self) -> &str {
        match self {
            CustomerKind::Poultry => "poultry",
            CustomerKind::Pork => "pork",
            CustomerKind::Other(tag) => tag,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CustomerKind::Poultry => "Poultry",
            CustomerKind::Pork => "Pork",
            CustomerKind::Other(tag) => tag,
        }
    }
}

impl From<String> for CustomerKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "poultry" => CustomerKind::Poultry,
            "pork" => CustomerKind::Pork,
            _ => CustomerKind::Other(tag),
        }
    }
}

impl From<CustomerKind> for String {
    fn from(kind: CustomerKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for CustomerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a customer's order is in its lifecycle.
///
/// Stored as a plain string; values other than the three known ones are
/// kept verbatim in `Other`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CustomerStatus {
    #[default]
    Pending,
    InProgress,
    Done,
    Other(String),
}

impl CustomerStatus {
    pub fn all() -> &'static [CustomerStatus] {
        &[
            CustomerStatus::Pending,
            CustomerStatus::InProgress,
            CustomerStatus::Done,
        ]
    }

    /// The stored (wire) form, e.g. `"in-progress"`.
    pub fn as_str(&self) -> &str {
        match self {
            CustomerStatus::Pending => "pending",
            CustomerStatus::InProgress => "in-progress",
            CustomerStatus::Done => "done",
            CustomerStatus::Other(tag) => tag,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CustomerStatus::Pending => "Pending",
            CustomerStatus::InProgress => "In progress",
            CustomerStatus::Done => "Done",
            CustomerStatus::Other(tag) => tag,
        }
    }

    /// Parse one of the known stored forms. Unknown values give `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().find(|status| status.as_str() == s).cloned()
    }
}

impl From<String> for CustomerStatus {
    fn from(tag: String) -> Self {
        Self::parse(&tag).unwrap_or(CustomerStatus::Other(tag))
    }
}

impl From<CustomerStatus> for String {
    fn from(status: CustomerStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One customer's order/delivery tracking entry.
///
/// `remaining_kg` is derived from `order_kg - deliver_kg` (clamped at zero) and
/// is only ever written by the lifecycle operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub order_kg: f64,
    pub deliver_kg: f64,
    pub remaining_kg: f64,
    #[serde(deserialize_with = "lenient_count")]
    pub total_order: u32,
    #[serde(rename = "type")]
    pub kind: CustomerKind,
    pub status: CustomerStatus,
    pub requested_date: NaiveDate,
    pub created_date: NaiveDate,
}

/// Accept any JSON number for a count, truncated and clamped into `u32`.
fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let n = f64::deserialize(deserializer)?;
    if n.is_nan() || n <= 0.0 {
        Ok(0)
    } else {
        Ok(n.min(u32::MAX as f64) as u32)
    }
}

/// Weight still owed on an order, never negative.
pub fn remaining_weight(order_kg: f64, deliver_kg: f64) -> f64 {
    (order_kg - deliver_kg).max(0.0)
}
