//! Maison Core - Catalog types and page assembly.
//!
//! This crate provides the types and pure transforms shared by the Maison
//! binaries:
//! - `storefront` - Public-facing shop (home page, category pages)
//! - `admin` - Internal editing API (highlights, collection order)
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. Services fetch data and hand it to the pipeline here.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, pricing and status enums
//! - [`catalog`] - Catalog entities, pagination and home page enrichment
//! - [`editor`] - Highlights drafts and collection index input
//! - [`alert`] - Mutation outcomes and the alert channel
//! - [`overlay`] - Admin overlay visibility table

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod alert;
pub mod catalog;
pub mod editor;
pub mod overlay;
pub mod types;

pub use types::*;
