//! Common types and traits for all catalog entities

pub mod catalog_entity;
pub mod entity_id;
pub mod nullable;

// Re-exports
pub use catalog_entity::CatalogEntity;
pub use entity_id::EntityId;
pub use nullable::null_as_empty;
