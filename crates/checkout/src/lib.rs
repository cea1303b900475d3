//! Copperline Checkout library.
//!
//! The orchestrator is exposed as a library so the collaborator contract
//! tests in `tests/` can drive the router directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod clients;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod routes;
pub mod state;
