pub mod admin;
pub mod api_utils;
pub mod config;
pub mod confirm;
pub mod date_utils;
pub mod export;
pub mod http;
pub mod icons;
pub mod notifications;
pub mod page_frame;
pub mod page_standard;
pub mod scheduler;
