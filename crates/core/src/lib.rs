//! Aura Core - Shared types library.
//!
//! This crate provides common types used across all Aura Living components:
//! - `store` - Embedded catalog store (persistence, drafts, publishing)
//! - `cli` - Command-line tools for seeding and administration
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
