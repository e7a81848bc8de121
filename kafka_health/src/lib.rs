pub mod cache;
pub mod connection_settings;
pub mod consumer_groups;
pub mod error;
pub mod platform;
pub mod reports;
pub mod table;
