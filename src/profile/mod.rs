//! The durable slot holding the user's profile.

use crate::{
    core::Profile,
    persistence::{
        load_json_or_default,
        save_json,
    },
};

const PROFILE_FILE: &str = "profile.json";

/// Owns the profile between sessions. Loading happens once at startup and
/// saving is explicit, triggered only when the wizard commits a search.
pub struct ProfileStore {
    pub profile: Profile,
    durable: bool,
}

impl ProfileStore {
    /// Restores the saved profile, or defaults when the slot is missing or
    /// malformed.
    pub fn load() -> Self {
        Self { profile: load_json_or_default::<Profile>(PROFILE_FILE), durable: true }
    }

    /// A store with no backing slot. Used by tests and anywhere the disk
    /// must stay untouched.
    pub fn in_memory(profile: Profile) -> Self {
        Self { profile, durable: false }
    }

    pub fn save(&self) {
        if !self.durable {
            return;
        }
        if let Err(e) = save_json(&self.profile, PROFILE_FILE) {
            eprintln!("Failed to save profile: {}", e);
        }
    }
}
