//! Strongly-typed identifiers and quantities used across inventory categories.

use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Identifier of an inventory item.
///
/// Unique within a single repository only; two categories may reuse the same
/// numeric id.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ItemId> for i64 {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

/// Stock level of an item. Never negative.
///
/// The only fallible way in is [`Quantity::new`] (and the `TryFrom<i64>` /
/// serde paths built on it), so a `Quantity` value is proof that the
/// non-negativity invariant holds.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Quantity(i64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    /// Validate a requested stock level.
    pub fn new(value: i64) -> Result<Self, InventoryError> {
        if value < 0 {
            return Err(InventoryError::invalid_quantity(value));
        }
        Ok(Self(value))
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// Stock level after adding `delta`.
    ///
    /// Fails with `InvalidQuantity` when the result is negative or does not
    /// fit in an `i64`.
    pub fn offset(self, delta: i64) -> Result<Self, InventoryError> {
        match self.0.checked_add(delta) {
            Some(value) => Self::new(value),
            None => Err(InventoryError::invalid_quantity(
                i128::from(self.0) + i128::from(delta),
            )),
        }
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self(i64::from(value))
    }
}

impl TryFrom<i64> for Quantity {
    type Error = InventoryError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for i64 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}
