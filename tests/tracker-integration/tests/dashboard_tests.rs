use kgtrack_common::csv_export::UTF8_BOM;
use kgtrack_common::customer::{CustomerKind, CustomerStatus};
use kgtrack_common::input::CustomerInput;
use kgtrack_common::lifecycle::DeliveryError;
use kgtrack_integration::harness::TestHarness;
use kgtrack_integration::{make_form, make_tagged_form};

/// New customers are listed most-recent first; edits keep their slot.
#[test]
fn ordering_follows_creation_and_edits_keep_position() {
    let mut h = TestHarness::setup();
    let a = h.add(&make_form("A", "1", "0"));
    let b = h.add(&make_form("B", "1", "0"));
    let c = h.add(&make_form("C", "1", "0"));
    let order: Vec<_> = h.tracker.customers().iter().map(|x| x.id).collect();
    assert_eq!(order, vec![c, b, a]);

    let mut edit = CustomerInput::from_customer(h.tracker.customer(b).unwrap());
    edit.name = "B2".into();
    h.tracker.edit_customer(b, &edit).unwrap();

    let names: Vec<_> = h.tracker.customers().iter().map(|x| x.name.as_str()).collect();
    assert_eq!(names, vec!["C", "B2", "A"]);
}

/// Several partial deliveries add up, and the last one closes the order.
#[test]
fn partial_deliveries_then_done() {
    let mut h = TestHarness::setup();
    let id = h.add(&make_form("Alice", "10", "0"));

    assert_eq!(h.tracker.quick_deliver(id, "2.5"), Ok(2.5));
    assert_eq!(h.tracker.quick_deliver(id, "4"), Ok(4.0));
    let alice = h.tracker.customer(id).unwrap();
    assert_eq!(alice.deliver_kg, 6.5);
    assert_eq!(alice.remaining_kg, 3.5);
    assert_eq!(alice.status, CustomerStatus::Pending);

    assert_eq!(
        h.tracker.quick_deliver(id, "4"),
        Err(DeliveryError::ExceedsRemaining { remaining: 3.5 })
    );
    assert_eq!(h.tracker.quick_deliver(id, "3.5"), Ok(3.5));
    let alice = h.tracker.customer(id).unwrap();
    assert_eq!(alice.remaining_kg, 0.0);
    assert_eq!(alice.status, CustomerStatus::Done);
}

/// A delivery that leaves weight outstanding does not touch a manual status.
#[test]
fn partial_delivery_keeps_manual_status() {
    let mut h = TestHarness::setup();
    let id = h.add(&make_tagged_form(
        "Alice",
        "10",
        CustomerKind::Pork,
        CustomerStatus::InProgress,
    ));
    h.tracker.quick_deliver(id, "1").unwrap();
    assert_eq!(h.tracker.customer(id).unwrap().status, CustomerStatus::InProgress);
}

/// Metrics track the whole collection while search narrows only the view.
#[test]
fn metrics_and_search_over_collection() {
    let mut h = TestHarness::setup();
    h.add(&make_tagged_form("Wang", "5", CustomerKind::Pork, CustomerStatus::Pending));
    h.add(&make_tagged_form("Lee", "3.2", CustomerKind::Poultry, CustomerStatus::InProgress));
    let zhao = h.add(&make_tagged_form("Zhao", "2", CustomerKind::Poultry, CustomerStatus::Pending));
    h.tracker.quick_deliver(zhao, "2").unwrap();

    let m = h.tracker.metrics();
    assert_eq!(m.total_remaining_kg, "8.2");
    assert_eq!(m.total_delivered_kg, "2.0");
    assert_eq!(m.waiting_count, 1);

    let poultry: Vec<_> = h.tracker.search("POULTRY").iter().map(|c| c.name.clone()).collect();
    assert_eq!(poultry, vec!["Zhao", "Lee"]);
    assert_eq!(h.tracker.search("done").len(), 1);
    assert!(h.tracker.search("beef").is_empty());
    assert_eq!(h.tracker.search("").len(), 3);
}

/// Export always covers every record, quoted where needed.
#[test]
fn export_covers_full_collection() {
    let mut h = TestHarness::setup();
    h.add(&make_form(r#"A, "B""#, "4", "1"));
    h.add(&make_form("Plain", "1", "0"));

    let csv = h.tracker.export_csv();
    assert!(csv.starts_with(UTF8_BOM));
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains(",Plain,"));
    assert!(lines[2].contains(r#","A, ""B""","#));
    assert!(lines[2].contains(",4,1,3,"));
}
