use kgtrack_common::customer::CustomerStatus;
use kgtrack_common::tracker::{CUSTOMERS_KEY, VIEW_MODE_KEY};
use kgtrack_common::view_mode::ViewMode;
use kgtrack_integration::harness::TestHarness;
use kgtrack_integration::make_form;

/// Everything added, edited and delivered survives a reload unchanged.
#[test]
fn customers_survive_restart() {
    let mut h = TestHarness::setup();
    let alice = h.add(&make_form("Alice", "10", "4"));
    let bob = h.add(&make_form("Bob", "7.5", "0"));
    h.tracker.quick_deliver(alice, "6").unwrap();
    let before = h.tracker.customers().to_vec();

    h.restart();

    assert_eq!(h.tracker.customers(), before.as_slice());
    assert_eq!(h.tracker.customer(alice).unwrap().status, CustomerStatus::Done);
    assert_eq!(h.tracker.customer(bob).unwrap().remaining_kg, 7.5);
}

/// View preference is stored under its own key, independent of the list.
#[test]
fn view_mode_survives_restart() {
    let mut h = TestHarness::setup();
    assert_eq!(h.tracker.view_mode(), ViewMode::Table);
    h.tracker.set_view_mode(ViewMode::Card);
    h.restart();
    assert_eq!(h.tracker.view_mode(), ViewMode::Card);
    assert_eq!(h.read_raw(VIEW_MODE_KEY).as_deref(), Some(r#""card""#));
    assert_eq!(h.read_raw(CUSTOMERS_KEY), None);
}

/// A JSON object where the list should be is treated as "nothing stored".
#[test]
fn object_under_customers_key_loads_empty() {
    let mut h = TestHarness::setup();
    h.write_raw(CUSTOMERS_KEY, r#"{"name": "not a list"}"#);
    h.restart();
    assert!(h.tracker.customers().is_empty());
}

/// Garbage under either key falls back to defaults instead of failing.
#[test]
fn unparseable_data_falls_back_to_defaults() {
    let mut h = TestHarness::setup();
    h.write_raw(CUSTOMERS_KEY, "[{\"id\": 1,");
    h.write_raw(VIEW_MODE_KEY, "\"grid\"");
    h.restart();
    assert!(h.tracker.customers().is_empty());
    assert_eq!(h.tracker.view_mode(), ViewMode::Table);
}

/// The first write after recovering from corrupt data replaces it.
#[test]
fn corrupt_data_is_overwritten_by_next_save() {
    let mut h = TestHarness::setup();
    h.write_raw(CUSTOMERS_KEY, "42");
    h.restart();
    h.add(&make_form("Alice", "1", "0"));

    let raw = h.read_raw(CUSTOMERS_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(1));
    assert_eq!(value[0]["name"], "Alice");
    assert_eq!(value[0]["remainingKg"], 1.0);
}

/// Records written in the stored JSON shape load without loss.
#[test]
fn loads_hand_written_records() {
    let mut h = TestHarness::setup();
    h.write_raw(
        CUSTOMERS_KEY,
        r#"[{"id":1760000000000,"name":"Lin","orderKg":12,"deliverKg":2,"remainingKg":10,
             "totalOrder":3,"type":"goat","status":"in-progress",
             "requestedDate":"2026-10-01","createdDate":"2026-09-30"}]"#,
    );
    h.restart();

    let lin = &h.tracker.customers()[0];
    assert_eq!(lin.name, "Lin");
    assert_eq!(lin.kind.as_str(), "goat");
    assert_eq!(lin.status, CustomerStatus::InProgress);

    let id = h.add(&make_form("Next", "1", "0"));
    assert!(id.0 > 1_760_000_000_000);
}

/// Clearing removes the stored list so a reload starts empty.
#[test]
fn clear_removes_stored_list() {
    let mut h = TestHarness::setup();
    h.add(&make_form("Alice", "1", "0"));
    h.tracker.clear_customers();
    assert!(!h.data_dir().join("customers.json").exists());
    h.restart();
    assert!(h.tracker.customers().is_empty());
}

/// One record with an unfamiliar status or a fractional count does not cost
/// the rest of the list, and the next save keeps every record.
#[test]
fn odd_records_load_alongside_normal_ones() {
    let mut h = TestHarness::setup();
    h.write_raw(
        CUSTOMERS_KEY,
        r#"[{"id":1760000000500,"name":"Zhou","orderKg":5,"deliverKg":5,"remainingKg":0,
             "totalOrder":2.5,"type":"pork","status":"完成",
             "requestedDate":"2026-10-01","createdDate":"2026-09-30"},
            {"id":1760000000000,"name":"Lin","orderKg":12,"deliverKg":2,"remainingKg":10,
             "totalOrder":3,"type":"poultry","status":"pending",
             "requestedDate":"2026-10-01","createdDate":"2026-09-30"}]"#,
    );
    h.restart();

    let loaded = h.tracker.customers();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].status, CustomerStatus::Other("完成".into()));
    assert_eq!(loaded[0].total_order, 2);
    assert_eq!(h.tracker.metrics().waiting_count, 1);

    h.add(&make_form("New", "1", "0"));
    let raw = h.read_raw(CUSTOMERS_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(3));
    assert_eq!(value[1]["status"], "完成");
    assert_eq!(value[2]["name"], "Lin");
}
