//! Recording fakes for the reconciler's collaborators.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::config::OverlayConfig;
use crate::display::Display;
use crate::error::OverlayError;
use crate::net::api::PokemonApi;
use crate::net::transport::{EventHandler, EventKind, Transport};
use crate::net::types::{PokemonAssignment, RandomPokemon};
use crate::reconciler::{Collaborators, Reconciler};
use crate::state::roster::{Roster, Slot};
use crate::util::storage::MemoryStore;
use crate::util::timer::ManualScheduler;

// =========================================================================
// RecordingDisplay
// =========================================================================

/// In-memory page with surfaces for slots `1..=slots`.
#[derive(Default)]
pub struct RecordingDisplay {
    pub messages: RefCell<HashMap<Slot, String>>,
    pub images: RefCell<HashMap<Slot, (String, String)>>,
    pub crops: RefCell<Vec<Slot>>,
    pub resets: RefCell<Vec<String>>,
    present: HashSet<usize>,
}

impl RecordingDisplay {
    pub fn with_slots(slots: usize) -> Self {
        Self { present: (1..=slots).collect(), ..Self::default() }
    }

    pub fn message(&self, slot: usize) -> Option<String> {
        self.messages.borrow().get(&Slot::from_index(slot - 1)).cloned()
    }

    pub fn image(&self, slot: usize) -> Option<(String, String)> {
        self.images.borrow().get(&Slot::from_index(slot - 1)).cloned()
    }

    pub fn is_untouched(&self) -> bool {
        self.messages.borrow().is_empty()
            && self.images.borrow().is_empty()
            && self.crops.borrow().is_empty()
            && self.resets.borrow().is_empty()
    }
}

impl Display for RecordingDisplay {
    fn set_message_text(&self, slot: Slot, text: &str) -> bool {
        if !self.present.contains(&slot.number()) {
            return false;
        }
        self.messages.borrow_mut().insert(slot, text.to_owned());
        true
    }

    fn set_pokemon_image(&self, slot: Slot, src: &str, pokemon: &str) -> bool {
        if !self.present.contains(&slot.number()) {
            return false;
        }
        self.images
            .borrow_mut()
            .insert(slot, (src.to_owned(), pokemon.to_owned()));
        true
    }

    fn crop_transparent(&self, slot: Slot) {
        self.crops.borrow_mut().push(slot);
    }

    fn reset_user(&self, username: &str) {
        self.resets.borrow_mut().push(username.to_owned());
    }
}

// =========================================================================
// RecordingTransport
// =========================================================================

#[derive(Default)]
pub struct RecordingTransport {
    handlers: RefCell<HashMap<EventKind, Vec<EventHandler>>>,
    pub emitted: RefCell<Vec<(EventKind, serde_json::Value)>>,
}

impl RecordingTransport {
    /// Deliver a notification to every handler registered for `kind`.
    pub fn deliver(&self, kind: EventKind, payload: serde_json::Value) {
        let handlers = self.handlers.borrow();
        for handler in handlers.get(&kind).into_iter().flatten() {
            handler(payload.clone());
        }
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.borrow().get(&kind).map_or(0, Vec::len)
    }
}

impl Transport for RecordingTransport {
    fn on(&self, kind: EventKind, handler: EventHandler) {
        self.handlers.borrow_mut().entry(kind).or_default().push(handler);
    }

    fn emit(&self, kind: EventKind, payload: serde_json::Value) {
        self.emitted.borrow_mut().push((kind, payload));
    }
}

// =========================================================================
// ScriptedApi
// =========================================================================

pub struct ScriptedApi {
    pub random: Result<RandomPokemon, OverlayError>,
    pub save: Result<(), OverlayError>,
    pub saved: RefCell<Vec<(String, PokemonAssignment)>>,
}

impl ScriptedApi {
    pub fn ok() -> Self {
        Self {
            random: Ok(RandomPokemon { pokemon: "bulbasaur".to_owned() }),
            save: Ok(()),
            saved: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl PokemonApi for ScriptedApi {
    async fn fetch_random(&self) -> Result<RandomPokemon, OverlayError> {
        self.random.clone()
    }

    async fn save(&self, username: &str, assignment: &PokemonAssignment) -> Result<(), OverlayError> {
        self.saved
            .borrow_mut()
            .push((username.to_owned(), assignment.clone()));
        self.save.clone()
    }
}

// =========================================================================
// Harness
// =========================================================================

pub struct Harness {
    pub reconciler: Rc<Reconciler>,
    pub display: Rc<RecordingDisplay>,
    pub scheduler: Rc<ManualScheduler>,
    pub api: Rc<ScriptedApi>,
    pub transport: Rc<RecordingTransport>,
    pub store: Rc<MemoryStore>,
}

/// Reconciler over `roster` with a surface for every roster slot.
pub fn harness(roster: &[&str]) -> Harness {
    harness_with(roster, RecordingDisplay::with_slots(roster.len()), ScriptedApi::ok())
}

pub fn harness_with(roster: &[&str], display: RecordingDisplay, api: ScriptedApi) -> Harness {
    let display = Rc::new(display);
    let scheduler = Rc::new(ManualScheduler::new());
    let api = Rc::new(api);
    let transport = Rc::new(RecordingTransport::default());
    let store = Rc::new(MemoryStore::new());
    let collaborators = Collaborators {
        display: display.clone(),
        scheduler: scheduler.clone(),
        api: api.clone(),
        transport: transport.clone(),
        store: store.clone(),
    };
    let reconciler = Rc::new(Reconciler::new(
        roster.iter().copied().collect::<Roster>(),
        OverlayConfig::default(),
        collaborators,
    ));
    Harness { reconciler, display, scheduler, api, transport, store }
}
