//! Slot handlers for chat, sprite and reset notifications.

#[cfg(test)]
#[path = "reconciler_slots_test.rs"]
mod reconciler_slots_test;

use std::rc::Rc;

use super::{Outcome, Reconciler};
use crate::net::types::{ChatMessagePayload, PokemonPayload};

impl Reconciler {
    /// Show `message` in the chatter's bubble and schedule it to clear.
    ///
    /// Every call schedules its own clear and none are cancelled, so an older
    /// timer can blank a newer message in the same slot.
    pub(super) fn show_chat_message(&self, payload: &ChatMessagePayload) -> Outcome {
        let Some(slot) = self.roster.slot_for(&payload.username) else {
            return Outcome::UnknownUser;
        };
        if !self.display.set_message_text(slot, &payload.message) {
            return Outcome::MissingSurface;
        }
        let display = Rc::clone(&self.display);
        self.scheduler.schedule(
            self.config.message_ttl(),
            Box::new(move || {
                display.set_message_text(slot, "");
            }),
        );
        Outcome::Applied
    }

    pub(super) fn show_pokemon(&self, payload: &PokemonPayload) -> Outcome {
        let Some(slot) = self.roster.slot_for(&payload.username) else {
            return Outcome::UnknownUser;
        };
        let src = self.config.sprite_path(&payload.pokemon);
        if !self.display.set_pokemon_image(slot, &src, &payload.pokemon) {
            return Outcome::MissingSurface;
        }
        self.display.crop_transparent(slot);
        Outcome::Applied
    }

    pub(super) fn reset_pokemon(&self, payload: &PokemonPayload) -> Outcome {
        if self.roster.slot_for(&payload.username).is_none() {
            return Outcome::UnknownUser;
        }
        self.display.reset_user(&payload.username);
        Outcome::Applied
    }
}
