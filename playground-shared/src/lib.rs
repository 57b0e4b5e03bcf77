//! Framework-free state for the Reactive Playground.
//!
//! Everything in here runs on the host as well as in the browser: the web
//! crate wraps these types in yewdux stores and Yew components.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod auth;
pub mod errors;
pub mod guard;
pub mod models;
pub mod persistence;
pub mod playground;
