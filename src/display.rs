//! Slot surfaces on the overlay page.
//!
//! Page markup owns the surfaces (`message{N}`, `pokemon{N}`) and the two
//! page-level routines `cropTransparent` and `resetSpecificUser`. The
//! reconciler reaches all of them through [`Display`].

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use crate::state::roster::Slot;

/// Attributes written on a sprite surface, in write order.
pub fn sprite_attributes<'a>(src: &'a str, pokemon: &'a str) -> [(&'static str, &'a str); 2] {
    [("src", src), ("data-pokemon", pokemon)]
}

pub trait Display {
    /// Set the chat bubble text for `slot`. Returns `false` if the page has no
    /// message surface for that slot.
    fn set_message_text(&self, slot: Slot, text: &str) -> bool;

    /// Point the sprite for `slot` at `src` and mirror `pokemon` into its
    /// `data-pokemon` attribute. Returns `false` if the surface is missing.
    fn set_pokemon_image(&self, slot: Slot, src: &str, pokemon: &str) -> bool;

    /// Trim transparent padding from the sprite for `slot`.
    fn crop_transparent(&self, slot: Slot);

    /// Restore `username`'s slot to the page's default presentation.
    fn reset_user(&self, username: &str);
}

#[cfg(feature = "hydrate")]
pub mod dom {
    use wasm_bindgen::prelude::*;

    use super::{Display, sprite_attributes};
    use crate::state::roster::Slot;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_name = cropTransparent)]
        fn crop_transparent(element: &web_sys::Element);

        #[wasm_bindgen(js_name = resetSpecificUser)]
        fn reset_specific_user(username: &str);
    }

    /// [`Display`] over the live document.
    #[derive(Debug, Default)]
    pub struct DomDisplay;

    impl DomDisplay {
        fn element(id: &str) -> Option<web_sys::Element> {
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(id))
        }
    }

    impl Display for DomDisplay {
        fn set_message_text(&self, slot: Slot, text: &str) -> bool {
            let Some(el) = Self::element(&slot.message_surface_id()) else {
                return false;
            };
            el.set_text_content(Some(text));
            true
        }

        fn set_pokemon_image(&self, slot: Slot, src: &str, pokemon: &str) -> bool {
            let Some(el) = Self::element(&slot.pokemon_surface_id()) else {
                return false;
            };
            for (name, value) in sprite_attributes(src, pokemon) {
                if let Err(e) = el.set_attribute(name, value) {
                    log::warn!("could not set {name} on slot {} sprite: {e:?}", slot.number());
                }
            }
            true
        }

        fn crop_transparent(&self, slot: Slot) {
            if let Some(el) = Self::element(&slot.pokemon_surface_id()) {
                crop_transparent(&el);
            }
        }

        fn reset_user(&self, username: &str) {
            reset_specific_user(username);
        }
    }
}
