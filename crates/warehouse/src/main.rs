use anyhow::Context;
use chrono::Utc;

use stockroom_warehouse::{ConsoleSink, WarehouseConfig, WarehouseManager};

fn main() -> anyhow::Result<()> {
    let config = WarehouseConfig::from_env().context("failed to read configuration")?;
    stockroom_observability::init_with(config.log_format);

    let mut manager = WarehouseManager::new(ConsoleSink::stdout());
    manager.seed_data(Utc::now().date_naive());

    let summary = manager.run_demo();
    tracing::info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "warehouse run complete"
    );

    if let Some(dir) = &config.snapshot_dir {
        manager
            .export_snapshot(dir)
            .with_context(|| format!("failed to export snapshot to {}", dir.display()))?;
    }

    Ok(())
}
