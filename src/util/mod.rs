//! Host-environment helpers shared by the reconciler.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (durable storage, timers) behind
//! traits so reconciliation logic stays testable outside a browser.

pub mod storage;
pub mod timer;
