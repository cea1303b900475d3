//! Copperline Core - Shared wire types.
//!
//! This crate provides the JSON contracts spoken between the Copperline
//! services:
//!
//! - `cart` - Session-keyed cart store
//! - `catalog` - Product catalog
//! - `checkout` - Checkout orchestrator
//! - `frontend` - Server-rendered gateway
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. Each service owns its handlers and clients; what they exchange on
//! the wire is defined here once.
//!
//! # Modules
//!
//! - [`contracts`] - Request/response bodies (carts, products, receipts)
//! - [`types`] - Validated newtypes for SKUs and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod contracts;
pub mod types;

pub use contracts::*;
pub use types::*;
