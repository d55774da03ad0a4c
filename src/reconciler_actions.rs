//! Outbound actions: random sprite lookup and assignment persistence.

#[cfg(test)]
#[path = "reconciler_actions_test.rs"]
mod reconciler_actions_test;

use super::Reconciler;
use crate::net::transport::EventKind;
use crate::net::types::PokemonAssignment;
use crate::util::storage::record_fallback_assignment;

impl Reconciler {
    /// Ask the server for a random Pokemon, or the configured fallback
    /// identifier if the call fails in any way.
    pub async fn random_pokemon(&self) -> String {
        match self.api.fetch_random().await {
            Ok(random) => random.pokemon,
            Err(e) => {
                log::error!("error getting random Pokemon: {e}");
                self.config.fallback_pokemon.clone()
            }
        }
    }

    /// Persist `assignment` for `username`.
    ///
    /// On success broadcasts `pokemon_update` and returns `true`. On failure
    /// records the assignment in the fallback store and returns `false`.
    pub async fn save_user_pokemon(&self, username: &str, assignment: &PokemonAssignment) -> bool {
        match self.api.save(username, assignment).await {
            Ok(()) => {
                self.transport
                    .emit(EventKind::PokemonUpdate, pokemon_update_payload(username, assignment));
                true
            }
            Err(e) => {
                log::error!("failed to save Pokemon data for {username}: {e}");
                if let Err(e) = record_fallback_assignment(&*self.store, &self.config.storage_key, username, assignment) {
                    log::warn!("fallback store write failed for {username}: {e}");
                }
                false
            }
        }
    }
}

/// `{username, pokemon}` for the broadcast. `pokemon` is copied as-is and
/// omitted when the payload has none.
fn pokemon_update_payload(username: &str, assignment: &PokemonAssignment) -> serde_json::Value {
    let mut update = serde_json::Map::new();
    update.insert("username".to_owned(), serde_json::Value::from(username));
    if let Some(pokemon) = assignment.pokemon() {
        update.insert("pokemon".to_owned(), pokemon.clone());
    }
    serde_json::Value::Object(update)
}
