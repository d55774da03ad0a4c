//! Networking modules for the overlay's HTTP calls and pub/sub channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the two REST calls, `transport` defines the event table and
//! the injected pub/sub seam, and `types` defines the shared payload schema.

pub mod api;
pub mod transport;
pub mod types;
