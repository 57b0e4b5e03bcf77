pub mod auth_store;
pub mod ui_store;
