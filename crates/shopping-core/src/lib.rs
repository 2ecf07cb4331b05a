//! shopping-core — Pure domain logic, no UI.
//!
//! This crate holds the input form, the list store, and the screen
//! view-model that ties them together. It is completely UI-agnostic:
//! frontends drive it with actions and drain `ScreenEvent`s after each one.

pub mod config;
pub mod events;
pub mod form;
pub mod item;
pub mod screen;
pub mod store;
