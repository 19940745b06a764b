//! Networking modules for the texts REST endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the browser-side fetch, `types` defines the JSON schema
//! shared with the preview host.

pub mod api;
pub mod types;
