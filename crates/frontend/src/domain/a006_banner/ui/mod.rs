pub mod carousel;
pub mod list;
