//! # pokemon-overlay
//!
//! Browser-side reconciler for a stream chat overlay. Each known chatter owns
//! a numbered slot on the page with a chat bubble and a Pokemon sprite; this
//! crate keeps those slots in sync with notifications pushed by the overlay
//! server and persists sprite assignments over HTTP with a `localStorage`
//! fallback.
//!
//! SYSTEM CONTEXT
//! ==============
//! The reconciliation rules live in [`reconciler`] and only talk to the outside
//! world through small traits (`Display`, `Transport`, `PokemonApi`,
//! `FallbackStore`, `Scheduler`). The `hydrate` feature binds those traits to
//! the browser (socket.io, DOM, `fetch`, `localStorage`, timers) and exposes
//! the `wasm-bindgen` entry point in `bootstrap`.

pub mod config;
pub mod display;
pub mod error;
pub mod net;
pub mod reconciler;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod bootstrap;

#[cfg(test)]
mod test_helpers;

pub use config::OverlayConfig;
pub use error::OverlayError;
pub use reconciler::{Collaborators, Outcome, Reconciler};
