//! Keyed, uniqueness-enforcing storage for one inventory category.

use indexmap::IndexMap;

use crate::entity::InventoryEntity;
use crate::error::{InventoryError, InventoryResult};
use crate::id::{ItemId, Quantity};

/// In-memory repository for a single item category.
///
/// Invariants:
/// - at most one item per [`ItemId`];
/// - failed operations leave the map untouched;
/// - iteration follows insertion order (removals do not reorder the rest).
#[derive(Debug, Clone)]
pub struct Repository<T> {
    items: IndexMap<ItemId, T>,
}

impl<T> Repository<T> {
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Iterate stored items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }
}

impl<T> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: InventoryEntity> Repository<T> {
    /// Store a new item keyed by its id.
    pub fn add(&mut self, item: T) -> InventoryResult<()> {
        let id = item.id();
        if self.items.contains_key(&id) {
            return Err(InventoryError::duplicate(id));
        }
        self.items.insert(id, item);
        tracing::debug!(item_id = %id, "item added");
        Ok(())
    }

    /// Look up a stored item.
    pub fn get_by_id(&self, id: ItemId) -> InventoryResult<&T> {
        self.items.get(&id).ok_or(InventoryError::not_found(id))
    }

    /// Delete an item, handing it back to the caller.
    pub fn remove(&mut self, id: ItemId) -> InventoryResult<T> {
        let removed = self
            .items
            .shift_remove(&id)
            .ok_or(InventoryError::not_found(id))?;
        tracing::debug!(item_id = %id, "item removed");
        Ok(removed)
    }

    /// Snapshot of all items in insertion order.
    ///
    /// The returned references are read-only; stock levels can only change
    /// through [`Repository::update_quantity`].
    pub fn get_all(&self) -> Vec<&T> {
        self.items.values().collect()
    }

    /// Set the stock level of a stored item.
    ///
    /// A negative `new_quantity` is rejected with `InvalidQuantity` before the
    /// id is looked up, so an absent id with a negative quantity reports
    /// `InvalidQuantity`, not `NotFound`.
    pub fn update_quantity(&mut self, id: ItemId, new_quantity: i64) -> InventoryResult<()> {
        let quantity = Quantity::new(new_quantity)?;
        let item = self
            .items
            .get_mut(&id)
            .ok_or(InventoryError::not_found(id))?;
        item.set_quantity(quantity);
        tracing::debug!(item_id = %id, quantity = %quantity, "quantity updated");
        Ok(())
    }
}
