pub mod csv_export;
pub mod customer;
pub mod filter;
pub mod input;
pub mod lifecycle;
pub mod metrics;
pub mod persisted;
pub mod store;
pub mod tracker;
pub mod view_mode;
