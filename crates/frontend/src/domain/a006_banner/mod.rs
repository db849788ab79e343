pub mod api;
pub mod reorder;
pub mod resource;
pub mod ui;
