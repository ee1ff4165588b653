use chrono::NaiveDate;

use stockroom_core::{InventoryEntity, InventoryError, ItemId};
use stockroom_inventory::{GroceryItem, InventoryLogger, MemorySink, Report};
use stockroom_warehouse::manager::{ELECTRONICS_SNAPSHOT, GROCERIES_SNAPSHOT};
use stockroom_warehouse::{DemoSummary, SnapshotSummary, WarehouseManager};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

fn seeded() -> WarehouseManager<MemorySink> {
    let mut manager = WarehouseManager::new(MemorySink::new());
    manager.seed_data(today());
    manager
}

#[test]
fn seeding_fills_both_categories() {
    let manager = seeded();

    assert_eq!(manager.electronics().len(), 2);
    assert_eq!(manager.groceries().len(), 2);

    let apples = manager.groceries().get_by_id(ItemId::new(1)).unwrap();
    assert_eq!(apples.expiry_date(), NaiveDate::from_ymd_opt(2026, 10, 24).unwrap());
    assert!(manager.sink().failures().next().is_none());
}

#[test]
fn seeding_twice_is_reported_not_fatal() {
    let mut manager = seeded();
    manager.seed_data(today());

    let failures: Vec<_> = manager.sink().failures().cloned().collect();
    assert_eq!(failures.len(), 4);
    assert!(
        failures
            .iter()
            .all(|e| matches!(e, InventoryError::DuplicateIdentifier(_)))
    );
    assert_eq!(manager.electronics().len(), 2);
}

#[test]
fn demo_exercises_every_error_kind_and_keeps_running() {
    let mut manager = seeded();

    let summary = manager.run_demo();

    assert_eq!(
        summary,
        DemoSummary {
            succeeded: 2,
            failed: 3
        }
    );

    let failures: Vec<_> = manager.sink().failures().cloned().collect();
    assert_eq!(
        failures,
        vec![
            InventoryError::DuplicateIdentifier(ItemId::new(1)),
            InventoryError::NotFound(ItemId::new(999)),
            InventoryError::InvalidQuantity(-5),
        ]
    );
}

#[test]
fn demo_leaves_expected_final_state() {
    let mut manager = seeded();
    manager.run_demo();

    let laptop = manager.electronics().get_by_id(ItemId::new(1)).unwrap();
    assert_eq!(laptop.name(), "Laptop");
    assert_eq!(laptop.brand(), "Dell");

    let phone = manager.electronics().get_by_id(ItemId::new(2)).unwrap();
    assert_eq!(phone.quantity().get(), 18);

    assert_eq!(
        manager.groceries().get_by_id(ItemId::new(2)).unwrap_err(),
        InventoryError::NotFound(ItemId::new(2))
    );
}

#[test]
fn demo_output_lists_final_inventory_last() {
    let mut manager = seeded();
    manager.run_demo();

    let lines = manager.sink().lines();
    let final_idx = lines
        .iter()
        .position(|l| l == "--- Final Inventory ---")
        .unwrap();

    assert_eq!(
        &lines[final_idx + 1..],
        &[
            "[Grocery] ID: 1, Name: Apples, Qty: 50, Expiry: 2026-10-24".to_string(),
            "[Electronics] ID: 1, Name: Laptop, Qty: 10, Brand: Dell, Warranty: 24 months"
                .to_string(),
            "[Electronics] ID: 2, Name: Smartphone, Qty: 18, Brand: Samsung, Warranty: 12 months"
                .to_string(),
        ]
    );
    assert!(lines.contains(&"Stock increased for item 2. New quantity: 18".to_string()));
}

#[test]
fn snapshot_export_round_trips_both_categories() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = seeded();
    manager.run_demo();

    let summary = manager.export_snapshot(dir.path()).unwrap();

    assert_eq!(
        summary,
        SnapshotSummary {
            electronics: 2,
            groceries: 1
        }
    );
    assert!(dir.path().join(ELECTRONICS_SNAPSHOT).exists());

    let mut reloaded: InventoryLogger<GroceryItem> =
        InventoryLogger::new(dir.path().join(GROCERIES_SNAPSHOT));
    reloaded.load_from_file().unwrap();
    assert_eq!(reloaded.get_all()[0].name(), "Apples");

    assert!(matches!(
        manager.sink().reports().last(),
        Some(Report::Success(msg)) if msg.contains("2 electronics, 1 groceries")
    ));
}
