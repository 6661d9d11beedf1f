use crate::customer::Customer;

/// Customers whose stored name, type or status contains `term`, case-insensitively.
///
/// A blank term keeps everything. Input order is preserved.
pub fn filter_customers<'a>(customers: &'a [Customer], term: &str) -> Vec<&'a Customer> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return customers.iter().collect();
    }
    customers.iter().filter(|c| matches(c, &term)).collect()
}

fn matches(customer: &Customer, term: &str) -> bool {
    [
        customer.name.as_str(),
        customer.kind.as_str(),
        customer.status.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(term))
}
