//! Category-agnostic stock workflows over any `Repository<T>`.
//!
//! The repository rejects invalid operations with strict errors; this layer
//! turns each of those into a non-fatal [`Outcome`] and a [`Report`] for the
//! configured sink, so callers keep running whatever happens.

use core::fmt::Display;

use stockroom_core::{InventoryEntity, InventoryError, InventoryResult, ItemId, Repository};

use crate::sink::{Report, ReportSink};

/// Which workflow produced an outcome.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operation {
    AddItem,
    IncreaseStock,
    UpdateQuantity,
    RemoveItem,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let text = match self {
            Operation::AddItem => "adding item",
            Operation::IncreaseStock => "increasing stock",
            Operation::UpdateQuantity => "updating quantity",
            Operation::RemoveItem => "removing item",
        };
        f.write_str(text)
    }
}

/// Result of a workflow after failures have been absorbed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeeded(String),
    Failed {
        operation: Operation,
        error: InventoryError,
    },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded(_))
    }

    pub fn error(&self) -> Option<&InventoryError> {
        match self {
            Outcome::Succeeded(_) => None,
            Outcome::Failed { error, .. } => Some(error),
        }
    }
}

/// Stock workflows that report to a sink instead of propagating errors.
#[derive(Debug, Default)]
pub struct CategoryOperations<S> {
    sink: S,
}

impl<S: ReportSink> CategoryOperations<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Forward a section title to the sink.
    pub fn heading(&mut self, title: impl Into<String>) {
        self.sink.report(Report::Heading(title.into()));
    }

    /// Render every item of `repo` to the sink. Returns how many were rendered.
    pub fn print_all<T>(&mut self, repo: &Repository<T>) -> usize
    where
        T: InventoryEntity + Display,
    {
        let items = repo.get_all();
        tracing::debug!(category = T::CATEGORY, count = items.len(), "listing items");
        for item in &items {
            self.sink.report(Report::Item {
                category: T::CATEGORY,
                line: item.to_string(),
            });
        }
        items.len()
    }

    pub fn add_item<T>(&mut self, repo: &mut Repository<T>, item: T) -> Outcome
    where
        T: InventoryEntity,
    {
        let id = item.id();
        let result = repo
            .add(item)
            .map(|()| format!("Item {id} added to {}.", T::CATEGORY));
        self.settle::<T>(Operation::AddItem, id, result)
    }

    /// Add `delta` to the current stock of `id`.
    ///
    /// `delta` may be negative. A result below zero or past `i64::MAX` is
    /// rejected as `InvalidQuantity` and the stock stays unchanged.
    pub fn increase_stock<T>(&mut self, repo: &mut Repository<T>, id: ItemId, delta: i64) -> Outcome
    where
        T: InventoryEntity,
    {
        let result = Self::apply_delta(repo, id, delta)
            .map(|quantity| format!("Stock increased for item {id}. New quantity: {quantity}"));
        self.settle::<T>(Operation::IncreaseStock, id, result)
    }

    pub fn update_quantity<T>(
        &mut self,
        repo: &mut Repository<T>,
        id: ItemId,
        new_quantity: i64,
    ) -> Outcome
    where
        T: InventoryEntity,
    {
        let result = repo
            .update_quantity(id, new_quantity)
            .map(|()| format!("Quantity for item {id} set to {new_quantity}."));
        self.settle::<T>(Operation::UpdateQuantity, id, result)
    }

    pub fn remove_item_by_id<T>(&mut self, repo: &mut Repository<T>, id: ItemId) -> Outcome
    where
        T: InventoryEntity,
    {
        let result = repo
            .remove(id)
            .map(|_| format!("Item {id} removed successfully."));
        self.settle::<T>(Operation::RemoveItem, id, result)
    }

    fn apply_delta<T: InventoryEntity>(
        repo: &mut Repository<T>,
        id: ItemId,
        delta: i64,
    ) -> InventoryResult<i64> {
        let requested = repo.get_by_id(id)?.quantity().offset(delta)?;
        repo.update_quantity(id, requested.get())?;
        Ok(requested.get())
    }

    fn settle<T: InventoryEntity>(
        &mut self,
        operation: Operation,
        id: ItemId,
        result: InventoryResult<String>,
    ) -> Outcome {
        match result {
            Ok(message) => {
                tracing::info!(category = T::CATEGORY, item_id = %id, %operation, "{message}");
                self.sink.report(Report::Success(message.clone()));
                Outcome::Succeeded(message)
            }
            Err(error) => {
                tracing::warn!(
                    category = T::CATEGORY,
                    item_id = %id,
                    %operation,
                    kind = error.kind(),
                    "{error}"
                );
                self.sink.report(Report::Failure {
                    operation,
                    error: error.clone(),
                });
                Outcome::Failed { operation, error }
            }
        }
    }
}
