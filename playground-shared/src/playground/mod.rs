//! State behind the interactive playground sections.
//!
//! The web crate owns rendering; these types own what each demo mutates.

pub mod activity;
pub mod alerts;
pub mod boundary;
pub mod conditional;
pub mod events;
pub mod lists;
pub mod resource;
pub mod store_demo;
