//! Display reconciler: maps server notifications onto overlay slots.
//!
//! The `Reconciler` owns the roster and the injected collaborators. It
//! registers one handler per inbound [`EventKind`] against the transport and
//! exposes the two outbound actions the page calls (`random_pokemon`,
//! `save_user_pokemon`).
//!
//! ERROR HANDLING
//! ==============
//! Nothing here fails outward. Unknown chatters and missing surfaces are
//! debug-logged no-ops, malformed payloads are warned and dropped, and HTTP
//! failures fall back to a default identifier or the `localStorage` store.

#[path = "reconciler_actions.rs"]
mod reconciler_actions;
#[path = "reconciler_slots.rs"]
mod reconciler_slots;

#[cfg(test)]
#[path = "reconciler_test.rs"]
mod reconciler_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::config::OverlayConfig;
use crate::display::Display;
use crate::net::api::PokemonApi;
use crate::net::transport::{EventKind, Transport};
use crate::net::types::InboundEvent;
use crate::state::connection::ConnectionState;
use crate::state::roster::Roster;
use crate::util::storage::FallbackStore;
use crate::util::timer::Scheduler;

/// What an inbound handler did with a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The username is not on the roster.
    UnknownUser,
    /// The slot exists but the page has no matching surface.
    MissingSurface,
}

/// External collaborators the reconciler drives.
#[derive(Clone)]
pub struct Collaborators {
    pub display: Rc<dyn Display>,
    pub scheduler: Rc<dyn Scheduler>,
    pub api: Rc<dyn PokemonApi>,
    pub transport: Rc<dyn Transport>,
    pub store: Rc<dyn FallbackStore>,
}

pub struct Reconciler {
    roster: Roster,
    config: OverlayConfig,
    display: Rc<dyn Display>,
    scheduler: Rc<dyn Scheduler>,
    api: Rc<dyn PokemonApi>,
    transport: Rc<dyn Transport>,
    store: Rc<dyn FallbackStore>,
    connection: RefCell<ConnectionState>,
}

impl Reconciler {
    pub fn new(roster: Roster, config: OverlayConfig, collaborators: Collaborators) -> Self {
        let Collaborators { display, scheduler, api, transport, store } = collaborators;
        Self {
            roster,
            config,
            display,
            scheduler,
            api,
            transport,
            store,
            connection: RefCell::new(ConnectionState::default()),
        }
    }

    pub fn connection(&self) -> ConnectionState {
        self.connection.borrow().clone()
    }

    /// Subscribe to every inbound event on the transport. Call once per
    /// reconciler.
    ///
    /// Handlers hold a weak reference, so dropping the last `Rc` detaches them.
    pub fn register(self: &Rc<Self>) {
        for kind in EventKind::INBOUND {
            let weak: Weak<Self> = Rc::downgrade(self);
            self.transport.on(
                kind,
                Box::new(move |payload| {
                    if let Some(reconciler) = weak.upgrade() {
                        reconciler.handle_raw(kind, payload);
                    }
                }),
            );
        }
    }

    /// Decode and dispatch a raw notification. Malformed payloads are dropped.
    pub fn handle_raw(&self, kind: EventKind, payload: serde_json::Value) -> Option<Outcome> {
        match InboundEvent::from_wire(kind, payload) {
            Ok(event) => Some(self.dispatch(event)),
            Err(e) => {
                log::warn!("dropping notification: {e}");
                None
            }
        }
    }

    /// Apply a decoded notification.
    pub fn dispatch(&self, event: InboundEvent) -> Outcome {
        let kind = event.kind();
        let outcome = match event {
            InboundEvent::Connect => {
                self.connection.borrow_mut().mark_connected();
                log::info!("connected to server");
                Outcome::Applied
            }
            InboundEvent::Disconnect { reason } => {
                self.connection.borrow_mut().mark_disconnected();
                log::warn!("disconnected from server: {}", reason.as_deref().unwrap_or("unknown reason"));
                Outcome::Applied
            }
            InboundEvent::Status(status) => {
                log::info!("server status: {}", status.message);
                self.connection.borrow_mut().record_server_status(status.message);
                Outcome::Applied
            }
            InboundEvent::ChatMessage(payload) => self.show_chat_message(&payload),
            InboundEvent::PokemonUpdated(payload) => self.show_pokemon(&payload),
            InboundEvent::ResetPokemon(payload) => self.reset_pokemon(&payload),
        };
        if outcome != Outcome::Applied {
            log::debug!("{kind} ignored: {outcome:?}");
        }
        outcome
    }
}
