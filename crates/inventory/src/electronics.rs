use serde::{Deserialize, Serialize};

use stockroom_core::{InventoryEntity, ItemId, Quantity};

/// Electronic product: stock-keeping data plus brand and warranty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicItem {
    id: ItemId,
    name: String,
    quantity: Quantity,
    brand: String,
    warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        quantity: Quantity,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            brand: brand.into(),
            warranty_months,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }
}

impl InventoryEntity for ElectronicItem {
    const CATEGORY: &'static str = "Electronics";

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

impl core::fmt::Display for ElectronicItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[{}] ID: {}, Name: {}, Qty: {}, Brand: {}, Warranty: {} months",
            Self::CATEGORY,
            self.id,
            self.name,
            self.quantity,
            self.brand,
            self.warranty_months
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_category_specific_fields() {
        let item = ElectronicItem::new(ItemId::new(1), "Laptop", Quantity::from(10), "Dell", 24);
        assert_eq!(
            item.to_string(),
            "[Electronics] ID: 1, Name: Laptop, Qty: 10, Brand: Dell, Warranty: 24 months"
        );
    }

    #[test]
    fn deserialization_rejects_negative_quantity() {
        let json = r#"{"id":1,"name":"Laptop","quantity":-3,"brand":"Dell","warranty_months":24}"#;
        assert!(serde_json::from_str::<ElectronicItem>(json).is_err());
    }
}
