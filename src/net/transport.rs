//! Pub/sub event table and the injected transport seam.
//!
//! The overlay server speaks socket.io; the transport library owns framing,
//! reconnection and delivery. The reconciler only needs `on(kind, handler)`
//! and `emit(kind, payload)`, captured by the [`Transport`] trait so tests can
//! drive handlers directly.
//!
//! All socket bindings are gated behind `#[cfg(feature = "hydrate")]` since
//! they require a browser environment.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

/// Callback invoked with a notification's JSON payload.
pub type EventHandler = Box<dyn Fn(serde_json::Value)>;

/// Named notifications exchanged with the overlay server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Connect,
    Disconnect,
    Status,
    ChatMessage,
    PokemonUpdated,
    ResetPokemon,
    /// Outbound: broadcast after a successful save.
    PokemonUpdate,
}

impl EventKind {
    /// Every kind the reconciler subscribes to.
    pub const INBOUND: [Self; 6] = [
        Self::Connect,
        Self::Disconnect,
        Self::Status,
        Self::ChatMessage,
        Self::PokemonUpdated,
        Self::ResetPokemon,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connect => "connect",
            Self::Disconnect => "disconnect",
            Self::Status => "status",
            Self::ChatMessage => "chat_message",
            Self::PokemonUpdated => "pokemon_updated",
            Self::ResetPokemon => "reset_pokemon",
            Self::PokemonUpdate => "pokemon_update",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Publish/subscribe channel to the overlay server.
pub trait Transport {
    /// Register `handler` for every future notification named `kind`.
    fn on(&self, kind: EventKind, handler: EventHandler);

    /// Send a notification to the server.
    fn emit(&self, kind: EventKind, payload: serde_json::Value);
}

/// Transport backed by a page-provided socket.io client (`io()`).
#[cfg(feature = "hydrate")]
pub mod socket_io {
    use wasm_bindgen::JsValue;
    use wasm_bindgen::prelude::*;

    use super::{EventHandler, EventKind, Transport};

    #[wasm_bindgen]
    extern "C" {
        /// A socket.io `Socket` instance.
        #[derive(Clone)]
        pub type Socket;

        #[wasm_bindgen(method)]
        fn on(this: &Socket, event: &str, handler: &Closure<dyn FnMut(JsValue)>);

        #[wasm_bindgen(method)]
        fn emit(this: &Socket, event: &str, payload: JsValue);
    }

    pub struct SocketIoTransport {
        socket: Socket,
    }

    impl SocketIoTransport {
        pub fn new(socket: Socket) -> Self {
            Self { socket }
        }
    }

    impl Transport for SocketIoTransport {
        fn on(&self, kind: EventKind, handler: EventHandler) {
            let closure = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
                handler(js_to_json(&payload));
            });
            self.socket.on(kind.as_str(), &closure);
            // Subscriptions live for the page's lifetime.
            closure.forget();
        }

        fn emit(&self, kind: EventKind, payload: serde_json::Value) {
            match js_sys::JSON::parse(&payload.to_string()) {
                Ok(value) => self.socket.emit(kind.as_str(), value),
                Err(_) => log::warn!("could not convert {kind} payload for emit"),
            }
        }
    }

    /// Convert a JS value into JSON. `undefined` and unserializable values
    /// become `null`.
    pub(crate) fn js_to_json(value: &JsValue) -> serde_json::Value {
        if value.is_undefined() {
            return serde_json::Value::Null;
        }
        js_sys::JSON::stringify(value)
            .ok()
            .and_then(|s| s.as_string())
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or(serde_json::Value::Null)
    }
}
