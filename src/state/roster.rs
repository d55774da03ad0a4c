//! Roster of known chatters and their display slots.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

/// A 1-based display slot number. Slot `N` addresses the `message{N}` and
/// `pokemon{N}` surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(usize);

impl Slot {
    /// Slot owned by the roster entry at 0-based `index`.
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    pub fn number(self) -> usize {
        self.0
    }

    pub fn message_surface_id(self) -> String {
        format!("message{}", self.0)
    }

    pub fn pokemon_surface_id(self) -> String {
        format!("pokemon{}", self.0)
    }
}

/// Ordered usernames, fixed when the overlay is mounted.
///
/// Lookup is first exact match and case-sensitive, so a name listed twice only
/// ever resolves to its first position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    usernames: Vec<String>,
}

impl Roster {
    pub fn new(usernames: Vec<String>) -> Self {
        Self { usernames }
    }

    pub fn slot_for(&self, username: &str) -> Option<Slot> {
        self.usernames
            .iter()
            .position(|name| name == username)
            .map(Slot::from_index)
    }

    pub fn len(&self) -> usize {
        self.usernames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.usernames.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Roster {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
