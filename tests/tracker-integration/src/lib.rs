use chrono::NaiveDate;

use kgtrack_common::customer::{CustomerKind, CustomerStatus};
use kgtrack_common::input::CustomerInput;

pub mod harness;

/// Fixed "today" so dates in assertions are stable.
pub fn test_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date")
}

/// A filled-in add/edit form.
pub fn make_form(name: &str, order_kg: &str, deliver_kg: &str) -> CustomerInput {
    CustomerInput {
        name: name.to_string(),
        order_kg: order_kg.to_string(),
        deliver_kg: deliver_kg.to_string(),
        total_order: "1".to_string(),
        ..CustomerInput::blank(test_day())
    }
}

/// Same as [`make_form`] with an explicit type and status.
pub fn make_tagged_form(
    name: &str,
    order_kg: &str,
    kind: CustomerKind,
    status: CustomerStatus,
) -> CustomerInput {
    CustomerInput {
        kind,
        status,
        ..make_form(name, order_kg, "0")
    }
}
