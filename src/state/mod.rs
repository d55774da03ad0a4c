//! Client-side state owned by the reconciler.
//!
//! DESIGN
//! ======
//! The roster decides which slot a chatter owns; connection state is kept
//! separately so diagnostics never gate slot updates.

pub mod connection;
pub mod roster;
