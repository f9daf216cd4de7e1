//! Shared types, adapter traits, and error types for the admin settings store.
//!
//! This crate contains the contracts that are shared between the store crate
//! and the persistence adapter implementations. Extracting these into a
//! separate crate lets the adapters compile in parallel with the store.

pub mod cache;
pub mod error;
pub mod prelude;
pub mod setting_adapter;
pub mod types;

// vim: ts=4
