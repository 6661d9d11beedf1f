use chrono::NaiveDate;

use crate::customer::Customer;

/// Byte-order mark so spreadsheet apps detect UTF-8.
pub const UTF8_BOM: &str = "\u{feff}";

/// Column labels, in record field order.
pub const CSV_HEADERS: [&str; 10] = [
    "ID",
    "Name",
    "Ordered (kg)",
    "Delivered (kg)",
    "Remaining (kg)",
    "Total Orders",
    "Type",
    "Status",
    "Requested Date",
    "Created Date",
];

/// Quote a field only if it contains a comma, a double quote or a newline.
pub fn escape_csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn csv_row(customer: &Customer) -> String {
    [
        customer.id.to_string(),
        customer.name.clone(),
        customer.order_kg.to_string(),
        customer.deliver_kg.to_string(),
        customer.remaining_kg.to_string(),
        customer.total_order.to_string(),
        customer.kind.as_str().to_string(),
        customer.status.as_str().to_string(),
        customer.requested_date.to_string(),
        customer.created_date.to_string(),
    ]
    .iter()
    .map(|field| escape_csv_field(field))
    .collect::<Vec<_>>()
    .join(",")
}

/// Export the whole collection, in its current order, as a BOM-prefixed CSV document.
pub fn export_csv(customers: &[Customer]) -> String {
    let mut lines = vec![CSV_HEADERS.join(",")];
    lines.extend(customers.iter().map(csv_row));
    format!("{UTF8_BOM}{}", lines.join("\n"))
}

/// `customers-YYYY-MM-DD.csv` for an export taken on `date`.
pub fn default_export_filename(date: NaiveDate) -> String {
    format!("customers-{}.csv", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::{CustomerId, CustomerKind, CustomerStatus};

    fn customer(id: u64, name: &str) -> Customer {
        Customer {
            id: CustomerId(id),
            name: name.into(),
            order_kg: 10.0,
            deliver_kg: 2.5,
            remaining_kg: 7.5,
            total_order: 2,
            kind: CustomerKind::Poultry,
            status: CustomerStatus::InProgress,
            requested_date: NaiveDate::from_ymd_opt(2026, 4, 2).unwrap(),
            created_date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
        }
    }

    #[test]
    fn test_escape_rules() {
        assert_eq!(escape_csv_field("plain"), "plain");
        assert_eq!(escape_csv_field(r#"A, "B""#), r#""A, ""B""""#);
        assert_eq!(escape_csv_field("two\nlines"), "\"two\nlines\"");
        assert_eq!(escape_csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_field(""), "");
    }

    #[test]
    fn test_export_layout() {
        let csv = export_csv(&[customer(7, "Lin"), customer(3, r#"A, "B""#)]);
        assert!(csv.starts_with(UTF8_BOM));

        let lines: Vec<&str> = csv.trim_start_matches(UTF8_BOM).split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "ID,Name,Ordered (kg),Delivered (kg),Remaining (kg),Total Orders,Type,Status,Requested Date,Created Date"
        );
        assert_eq!(
            lines[1],
            "7,Lin,10,2.5,7.5,2,poultry,in-progress,2026-04-02,2026-04-01"
        );
        assert_eq!(
            lines[2],
            r#"3,"A, ""B""",10,2.5,7.5,2,poultry,in-progress,2026-04-02,2026-04-01"#
        );
    }

    #[test]
    fn test_empty_export_is_header_only() {
        let csv = export_csv(&[]);
        assert_eq!(csv.trim_start_matches(UTF8_BOM), CSV_HEADERS.join(","));
    }

    #[test]
    fn test_default_filename() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 7).unwrap();
        assert_eq!(default_export_filename(day), "customers-2026-10-07.csv");
    }
}
