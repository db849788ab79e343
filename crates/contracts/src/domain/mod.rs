pub mod a001_tag;
pub mod a002_brand;
pub mod a003_supplier;
pub mod a004_unit;
pub mod a005_category;
pub mod a006_banner;
pub mod common;
