pub mod app;
pub mod csv_download;
pub mod customer_card;
pub mod customer_form;
pub mod customer_table;
pub mod dashboard_state;
pub mod metrics_cards;
pub mod quick_delivery_dialog;
pub mod view_toggle;
pub mod web_storage;
