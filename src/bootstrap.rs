//! Browser entry point.
//!
//! The overlay page creates its socket.io client and roster, then calls
//! `mountOverlay(socket, roster, config)`. The returned handle replaces the
//! page's `getRandomPokemon` / `saveUserPokemonData` helpers.

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::OverlayConfig;
use crate::display::dom::DomDisplay;
use crate::net::api::GlooPokemonApi;
use crate::net::transport::socket_io::{Socket, SocketIoTransport, js_to_json};
use crate::net::types::PokemonAssignment;
use crate::reconciler::{Collaborators, Reconciler};
use crate::state::roster::Roster;
use crate::util::storage::LocalStorageStore;
use crate::util::timer::BrowserScheduler;

fn init_logging() {
    console_error_panic_hook::set_once();
    // A second mount keeps the logger installed by the first.
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Wire browser collaborators into a reconciler and subscribe it to `socket`.
///
/// `config` may be `undefined`/`null` for defaults or a partial config object.
///
/// # Errors
///
/// Returns a JS error string if `config` is not a valid config object.
#[wasm_bindgen(js_name = mountOverlay)]
pub fn mount_overlay(socket: Socket, roster: js_sys::Array, config: JsValue) -> Result<OverlayHandle, JsValue> {
    init_logging();

    let config = if config.is_undefined() || config.is_null() {
        OverlayConfig::default()
    } else {
        OverlayConfig::from_json(&js_to_json(&config).to_string()).map_err(|e| JsValue::from_str(&e.to_string()))?
    };
    let roster: Roster = roster.iter().filter_map(|v| v.as_string()).collect();
    log::info!("mounting overlay for {} chatters", roster.len());

    let collaborators = Collaborators {
        display: Rc::new(DomDisplay),
        scheduler: Rc::new(BrowserScheduler),
        api: Rc::new(GlooPokemonApi::new(config.api_base.clone())),
        transport: Rc::new(SocketIoTransport::new(socket)),
        store: Rc::new(LocalStorageStore),
    };
    let reconciler = Rc::new(Reconciler::new(roster, config, collaborators));
    reconciler.register();
    Ok(OverlayHandle { reconciler })
}

/// Page-facing handle for the overlay's outbound actions.
#[wasm_bindgen]
pub struct OverlayHandle {
    reconciler: Rc<Reconciler>,
}

#[wasm_bindgen]
impl OverlayHandle {
    /// Resolves to a Pokemon identifier; never rejects.
    #[wasm_bindgen(js_name = getRandomPokemon)]
    pub fn get_random_pokemon(&self) -> js_sys::Promise {
        let reconciler = Rc::clone(&self.reconciler);
        wasm_bindgen_futures::future_to_promise(async move {
            let pokemon = reconciler.random_pokemon().await;
            Ok(JsValue::from_str(&pokemon))
        })
    }

    /// Resolves to `true` when the server accepted the assignment, `false`
    /// when it was kept in `localStorage` instead; never rejects.
    #[wasm_bindgen(js_name = saveUserPokemonData)]
    pub fn save_user_pokemon_data(&self, username: String, data: JsValue) -> js_sys::Promise {
        let reconciler = Rc::clone(&self.reconciler);
        wasm_bindgen_futures::future_to_promise(async move {
            let assignment = PokemonAssignment::from(js_to_json(&data));
            let saved = reconciler.save_user_pokemon(&username, &assignment).await;
            Ok(JsValue::from_bool(saved))
        })
    }

    /// Connection status as a lowercase string.
    #[wasm_bindgen(js_name = connectionStatus)]
    pub fn connection_status(&self) -> String {
        format!("{:?}", self.reconciler.connection().status).to_lowercase()
    }
}
