//! REST API helpers for the overlay's Pokemon endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Elsewhere the [`PokemonApi`] trait is implemented by test doubles or the
//! embedding host.
//!
//! ERROR HANDLING
//! ==============
//! Implementations return `Result<_, OverlayError>`; the reconciler owns the
//! fallback policy (default identifier, `localStorage` write) so every
//! implementation stays a thin transport.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::types::{PokemonAssignment, RandomPokemon};
use crate::error::OverlayError;

/// Characters `encodeURIComponent` leaves untouched besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a path segment the way browsers' `encodeURIComponent` does.
pub fn encode_uri_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

pub fn random_pokemon_endpoint(api_base: &str) -> String {
    format!("{api_base}/api/pokemon/random")
}

pub fn save_pokemon_endpoint(api_base: &str, username: &str) -> String {
    format!("{api_base}/api/pokemon/{}", encode_uri_component(username))
}

/// The overlay server's Pokemon endpoints. Enables mocking in tests.
#[async_trait::async_trait(?Send)]
pub trait PokemonApi {
    /// `GET /api/pokemon/random`.
    ///
    /// # Errors
    ///
    /// Returns an [`OverlayError`] if the request fails or the body is not a
    /// JSON object with a `pokemon` string.
    async fn fetch_random(&self) -> Result<RandomPokemon, OverlayError>;

    /// `POST /api/pokemon/{username}` with the assignment as JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`OverlayError`] if the request fails or the server answers
    /// with a non-success status.
    async fn save(&self, username: &str, assignment: &PokemonAssignment) -> Result<(), OverlayError>;
}

/// [`PokemonApi`] over the browser `fetch` API.
#[cfg(feature = "hydrate")]
pub struct GlooPokemonApi {
    api_base: String,
}

#[cfg(feature = "hydrate")]
impl GlooPokemonApi {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into() }
    }
}

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl PokemonApi for GlooPokemonApi {
    async fn fetch_random(&self) -> Result<RandomPokemon, OverlayError> {
        // The status is not checked: any body carrying a `pokemon` field is usable.
        let resp = gloo_net::http::Request::get(&random_pokemon_endpoint(&self.api_base))
            .send()
            .await
            .map_err(|e| OverlayError::Request(e.to_string()))?;
        resp.json::<RandomPokemon>()
            .await
            .map_err(|e| OverlayError::Parse(e.to_string()))
    }

    async fn save(&self, username: &str, assignment: &PokemonAssignment) -> Result<(), OverlayError> {
        let resp = gloo_net::http::Request::post(&save_pokemon_endpoint(&self.api_base, username))
            .json(assignment)
            .map_err(|e| OverlayError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| OverlayError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(OverlayError::Status { status: resp.status() });
        }
        Ok(())
    }
}
