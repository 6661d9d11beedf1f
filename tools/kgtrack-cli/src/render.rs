use std::fmt::Write;

use kgtrack_common::customer::Customer;
use kgtrack_common::metrics::DashboardMetrics;
use kgtrack_common::view_mode::ViewMode;

const EMPTY: &str = "No customers\n";

pub fn render_list(customers: &[&Customer], mode: ViewMode) -> String {
    if customers.is_empty() {
        return EMPTY.to_string();
    }
    match mode {
        ViewMode::Table => render_table(customers),
        ViewMode::Card => render_cards(customers),
    }
}

fn render_table(customers: &[&Customer]) -> String {
    let name_width = customers
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<13}  {:<name_width$}  {:>8}  {:>9}  {:>9}  {:>6}  {:<8}  {:<11}  {:<10}  {:<10}",
        "ID", "Name", "Ordered", "Delivered", "Remaining", "Orders", "Type", "Status", "Requested", "Created",
    );
    for c in customers {
        let _ = writeln!(
            out,
            "{:<13}  {:<name_width$}  {:>8}  {:>9}  {:>9}  {:>6}  {:<8}  {:<11}  {:<10}  {:<10}",
            c.id.to_string(),
            c.name,
            c.order_kg,
            c.deliver_kg,
            c.remaining_kg,
            c.total_order,
            c.kind.as_str(),
            c.status.as_str(),
            c.requested_date.to_string(),
            c.created_date.to_string(),
        );
    }
    out
}

fn render_cards(customers: &[&Customer]) -> String {
    let mut out = String::new();
    for (i, c) in customers.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "[{}] {} ({}, {})", c.id, c.name, c.kind, c.status);
        let _ = writeln!(
            out,
            "    ordered {} kg, delivered {} kg, remaining {} kg",
            c.order_kg, c.deliver_kg, c.remaining_kg
        );
        let _ = writeln!(
            out,
            "    {} orders, requested {}, created {}",
            c.total_order, c.requested_date, c.created_date
        );
    }
    out
}

pub fn render_metrics(metrics: &DashboardMetrics) -> String {
    format!(
        "Remaining (kg):     {}\nDelivered (kg):     {}\nWaiting customers:  {}\n",
        metrics.total_remaining_kg, metrics.total_delivered_kg, metrics.waiting_count
    )
}
