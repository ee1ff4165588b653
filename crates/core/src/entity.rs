//! Inventory entity capability: identity + name + stock level.

use crate::id::{ItemId, Quantity};

/// Capability every stock-keeping item type provides.
///
/// `Repository<T>` and the category operations are written against this trait
/// only; category-specific fields (brand, expiry date, ...) are never inspected.
///
/// `set_quantity` exists so the repository can apply validated updates. Once an
/// item is stored, the repository only hands out shared references, so the
/// quantity can no longer change behind its back.
pub trait InventoryEntity {
    /// Label used in rendered lines and log fields (e.g. `"Electronics"`).
    const CATEGORY: &'static str = "Item";

    /// Returns the item identifier.
    fn id(&self) -> ItemId;

    /// Human-readable item name.
    fn name(&self) -> &str;

    /// Current stock level.
    fn quantity(&self) -> Quantity;

    /// Overwrite the stock level.
    fn set_quantity(&mut self, quantity: Quantity);
}
