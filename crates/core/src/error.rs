//! Inventory error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used by repository operations.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Repository-level error.
///
/// Exactly one kind is reported per failed operation, and a failed operation
/// never leaves the repository partially modified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// An item with the same id is already stored.
    #[error("item with id {0} already exists")]
    DuplicateIdentifier(ItemId),

    /// No item with this id is stored.
    #[error("item with id {0} not found")]
    NotFound(ItemId),

    /// A stock level below zero, or above `i64::MAX`, was requested.
    ///
    /// Carried as `i128` so a level reached by an overflowing adjustment is
    /// reported exactly.
    #[error("invalid quantity {0}: quantity must be between 0 and 9223372036854775807")]
    InvalidQuantity(i128),
}

impl InventoryError {
    pub fn duplicate(id: ItemId) -> Self {
        Self::DuplicateIdentifier(id)
    }

    pub fn not_found(id: ItemId) -> Self {
        Self::NotFound(id)
    }

    pub fn invalid_quantity(requested: impl Into<i128>) -> Self {
        Self::InvalidQuantity(requested.into())
    }

    /// Short machine-friendly name of the error kind (for logs and API codes).
    pub fn kind(&self) -> &'static str {
        match self {
            InventoryError::DuplicateIdentifier(_) => "duplicate_identifier",
            InventoryError::NotFound(_) => "not_found",
            InventoryError::InvalidQuantity(_) => "invalid_quantity",
        }
    }
}
