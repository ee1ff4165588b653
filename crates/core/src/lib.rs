//! `stockroom-core` — generic inventory storage building blocks.
//!
//! This crate contains the **category-agnostic** pieces: the entity capability,
//! the error taxonomy and the keyed repository. It knows nothing about concrete
//! product categories, rendering or persistence.

pub mod entity;
pub mod error;
pub mod id;
pub mod repository;
pub mod shared;

pub use entity::InventoryEntity;
pub use error::{InventoryError, InventoryResult};
pub use id::{ItemId, Quantity};
pub use repository::Repository;
pub use shared::SharedRepository;
