//! Warehouse orchestration: per-category repositories and the demo sequence.

use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};
use serde::Serialize;
use serde::de::DeserializeOwned;

use stockroom_core::{ItemId, Quantity, Repository};
use stockroom_inventory::{
    CategoryOperations, ElectronicItem, GroceryItem, InventoryLogger, LoggerError, Outcome, Report,
    ReportSink,
};

/// Counts of absorbed outcomes from [`WarehouseManager::run_demo`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DemoSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl DemoSummary {
    fn record(&mut self, outcome: &Outcome) {
        if outcome.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Items read back from the exported snapshot files.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SnapshotSummary {
    pub electronics: usize,
    pub groceries: usize,
}

pub const ELECTRONICS_SNAPSHOT: &str = "electronics.json";
pub const GROCERIES_SNAPSHOT: &str = "groceries.json";

/// Owns one repository per category and drives them through [`CategoryOperations`].
#[derive(Debug)]
pub struct WarehouseManager<S> {
    electronics: Repository<ElectronicItem>,
    groceries: Repository<GroceryItem>,
    ops: CategoryOperations<S>,
}

impl<S: ReportSink> WarehouseManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            electronics: Repository::new(),
            groceries: Repository::new(),
            ops: CategoryOperations::new(sink),
        }
    }

    pub fn electronics(&self) -> &Repository<ElectronicItem> {
        &self.electronics
    }

    pub fn groceries(&self) -> &Repository<GroceryItem> {
        &self.groceries
    }

    pub fn sink(&self) -> &S {
        self.ops.sink()
    }

    /// Load the fixed sample stock. Grocery expiry dates are relative to `today`.
    ///
    /// Seeding failures (e.g. seeding twice) are reported and logged, never fatal.
    pub fn seed_data(&mut self, today: NaiveDate) {
        let electronics = [
            ElectronicItem::new(ItemId::new(1), "Laptop", Quantity::from(10), "Dell", 24),
            ElectronicItem::new(ItemId::new(2), "Smartphone", Quantity::from(15), "Samsung", 12),
        ];
        let groceries = [
            GroceryItem::new(ItemId::new(1), "Apples", Quantity::from(50), expires_in(today, 7)),
            GroceryItem::new(ItemId::new(2), "Milk", Quantity::from(30), expires_in(today, 5)),
        ];

        let mut failed = 0;
        for item in electronics {
            failed += usize::from(!self.ops.add_item(&mut self.electronics, item).is_success());
        }
        for item in groceries {
            failed += usize::from(!self.ops.add_item(&mut self.groceries, item).is_success());
        }

        if failed > 0 {
            tracing::error!(failed, "seeding finished with rejected items");
        } else {
            tracing::info!(
                electronics = self.electronics.len(),
                groceries = self.groceries.len(),
                "sample stock seeded"
            );
        }
    }

    /// Normal operations first, then one deliberate violation per error kind.
    pub fn run_demo(&mut self) -> DemoSummary {
        let mut summary = DemoSummary::default();

        self.ops.heading("Grocery Items");
        self.ops.print_all(&self.groceries);

        self.ops.heading("Electronic Items");
        self.ops.print_all(&self.electronics);

        self.ops.heading("Stock Operations");
        summary.record(&self.ops.increase_stock(&mut self.electronics, ItemId::new(2), 3));
        summary.record(&self.ops.remove_item_by_id(&mut self.groceries, ItemId::new(2)));

        self.ops.heading("Testing Error Handling");
        let tablet = ElectronicItem::new(ItemId::new(1), "Tablet", Quantity::from(5), "Apple", 12);
        summary.record(&self.ops.add_item(&mut self.electronics, tablet));
        summary.record(&self.ops.remove_item_by_id(&mut self.groceries, ItemId::new(999)));
        summary.record(&self.ops.update_quantity(&mut self.electronics, ItemId::new(2), -5));

        self.ops.heading("Final Inventory");
        self.ops.print_all(&self.groceries);
        self.ops.print_all(&self.electronics);

        tracing::info!(
            succeeded = summary.succeeded,
            failed = summary.failed,
            "demo sequence finished"
        );
        summary
    }

    /// Write each category to its own JSON file under `dir`, then read the
    /// files back as a fresh session would.
    pub fn export_snapshot(&mut self, dir: &Path) -> Result<SnapshotSummary, LoggerError> {
        let electronics = round_trip(dir.join(ELECTRONICS_SNAPSHOT), &self.electronics)?;
        let groceries = round_trip(dir.join(GROCERIES_SNAPSHOT), &self.groceries)?;

        let summary = SnapshotSummary {
            electronics,
            groceries,
        };
        self.ops.sink_mut().report(Report::Success(format!(
            "Snapshot written to {}: {} electronics, {} groceries.",
            dir.display(),
            summary.electronics,
            summary.groceries
        )));
        Ok(summary)
    }
}

fn round_trip<T>(path: PathBuf, repo: &Repository<T>) -> Result<usize, LoggerError>
where
    T: Clone + Serialize + DeserializeOwned,
{
    let mut writer = InventoryLogger::new(&path);
    for item in repo.iter() {
        writer.add(item.clone());
    }
    writer.save_to_file()?;

    let mut reader: InventoryLogger<T> = InventoryLogger::new(path);
    reader.load_from_file()
}

fn expires_in(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}
