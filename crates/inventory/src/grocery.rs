use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{InventoryEntity, ItemId, Quantity};

/// Perishable grocery product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    id: ItemId,
    name: String,
    quantity: Quantity,
    expiry_date: NaiveDate,
}

impl GroceryItem {
    pub fn new(id: ItemId, name: impl Into<String>, quantity: Quantity, expiry_date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            expiry_date,
        }
    }

    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }
}

impl InventoryEntity for GroceryItem {
    const CATEGORY: &'static str = "Grocery";

    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> Quantity {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }
}

impl core::fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[{}] ID: {}, Name: {}, Qty: {}, Expiry: {}",
            Self::CATEGORY,
            self.id,
            self.name,
            self.quantity,
            self.expiry_date.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_expiry_date() {
        let expiry = NaiveDate::from_ymd_opt(2026, 10, 24).unwrap();
        let item = GroceryItem::new(ItemId::new(1), "Apples", Quantity::from(50), expiry);
        assert_eq!(
            item.to_string(),
            "[Grocery] ID: 1, Name: Apples, Qty: 50, Expiry: 2026-10-24"
        );
    }
}
