//! Payload DTOs for the overlay server's notifications and REST endpoints.
//!
//! DESIGN
//! ======
//! Inbound notifications arrive as loosely typed JSON from the transport;
//! [`InboundEvent::from_wire`] is the single place that turns a
//! `(kind, payload)` pair into a typed event, so handlers never touch raw
//! `serde_json::Value`s.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::transport::EventKind;
use crate::error::OverlayError;

/// `status` payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StatusPayload {
    pub message: String,
}

/// `chat_message` payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChatMessagePayload {
    pub username: String,
    pub message: String,
    /// Twitch badge metadata. Not rendered by the overlay.
    #[serde(default)]
    pub badges: serde_json::Value,
}

/// `pokemon_updated` and `reset_pokemon` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonPayload {
    pub username: String,
    pub pokemon: String,
}

/// Body of `GET /api/pokemon/random`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RandomPokemon {
    pub pokemon: String,
}

/// A Pokemon assignment as persisted via `POST /api/pokemon/{username}`.
///
/// The page may hand in any JSON value. It is posted and stored in the
/// `localStorage` fallback verbatim; only its `pokemon` field, when present,
/// is read back out for the `pokemon_update` broadcast.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PokemonAssignment(serde_json::Value);

impl PokemonAssignment {
    pub fn new(pokemon: impl Into<String>) -> Self {
        Self(serde_json::json!({ "pokemon": pokemon.into() }))
    }

    /// The payload's `pokemon` field, whatever its type. `None` for payloads
    /// that are not objects or lack the field.
    pub fn pokemon(&self) -> Option<&serde_json::Value> {
        self.0.get("pokemon")
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for PokemonAssignment {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// A decoded inbound notification.
#[derive(Clone, Debug, PartialEq)]
pub enum InboundEvent {
    Connect,
    Disconnect { reason: Option<String> },
    Status(StatusPayload),
    ChatMessage(ChatMessagePayload),
    PokemonUpdated(PokemonPayload),
    ResetPokemon(PokemonPayload),
}

impl InboundEvent {
    /// Decode a raw notification of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::Payload`] when `kind` is outbound-only or the
    /// payload does not match the event's shape.
    pub fn from_wire(kind: EventKind, payload: serde_json::Value) -> Result<Self, OverlayError> {
        let malformed = |e: serde_json::Error| OverlayError::Payload { event: kind.as_str(), reason: e.to_string() };
        match kind {
            EventKind::Connect => Ok(Self::Connect),
            EventKind::Disconnect => Ok(Self::Disconnect { reason: payload.as_str().map(str::to_owned) }),
            EventKind::Status => serde_json::from_value(payload).map(Self::Status).map_err(malformed),
            EventKind::ChatMessage => serde_json::from_value(payload).map(Self::ChatMessage).map_err(malformed),
            EventKind::PokemonUpdated => serde_json::from_value(payload)
                .map(Self::PokemonUpdated)
                .map_err(malformed),
            EventKind::ResetPokemon => serde_json::from_value(payload).map(Self::ResetPokemon).map_err(malformed),
            EventKind::PokemonUpdate => Err(OverlayError::Payload {
                event: kind.as_str(),
                reason: "outbound-only event".to_owned(),
            }),
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Connect => EventKind::Connect,
            Self::Disconnect { .. } => EventKind::Disconnect,
            Self::Status(_) => EventKind::Status,
            Self::ChatMessage(_) => EventKind::ChatMessage,
            Self::PokemonUpdated(_) => EventKind::PokemonUpdated,
            Self::ResetPokemon(_) => EventKind::ResetPokemon,
        }
    }
}
