//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the shared response envelope and outcomes; `api` holds the
//! `AuthApi` seam and its `gloo-net` implementation.

pub mod api;
pub mod types;
