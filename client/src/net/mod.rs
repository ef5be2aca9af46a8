//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues requests through the host server's `/api` proxy and defines
//! the traits guards depend on; `types` defines the shared wire schema.

pub mod api;
pub mod types;
