//! Profile Manager
//!
//! A small identity record stored as JSON under [`PROFILE_KEY`]. A save with
//! a blank name is rejected silently and leaves the stored record untouched.

use crate::store::{KeyValueStore, StoreExt, PROFILE_KEY};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// User identity shown in the dashboard header
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl UserProfile {
    /// Whether a name has been saved
    pub fn is_set(&self) -> bool {
        !self.name.is_empty()
    }

    /// Drop blank locations left behind by older records
    fn normalized(mut self) -> Self {
        self.location = self.location.filter(|l| !l.trim().is_empty());
        self
    }
}

/// Owner of the persisted [`UserProfile`]
pub struct ProfileManager {
    store: Arc<dyn KeyValueStore>,
    profile: UserProfile,
}

impl ProfileManager {
    /// Load the profile, defaulting to the empty record
    pub fn load_from(store: Arc<dyn KeyValueStore>) -> Self {
        let profile = store
            .get_json::<UserProfile>(PROFILE_KEY)
            .unwrap_or_default()
            .normalized();

        Self { store, profile }
    }

    /// Save a new name and location.
    ///
    /// Returns the saved profile, or `None` when the trimmed name is empty.
    pub fn save(&mut self, name: &str, location: &str) -> Option<UserProfile> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let location = location.trim();
        self.profile = UserProfile {
            name: name.to_string(),
            location: (!location.is_empty()).then(|| location.to_string()),
        };

        if let Err(e) = self.store.set_json(PROFILE_KEY, &self.profile) {
            tracing::warn!(error = %e, "Failed to persist profile");
        }

        tracing::info!("Profile saved");
        Some(self.profile.clone())
    }

    /// Last saved profile
    pub fn load(&self) -> &UserProfile {
        &self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_empty_by_default() {
        let manager = ProfileManager::load_from(Arc::new(MemoryStore::new()));
        assert_eq!(manager.load(), &UserProfile::default());
        assert!(!manager.load().is_set());
    }

    #[test]
    fn test_save_trims_fields() {
        let store = Arc::new(MemoryStore::new());
        let mut manager = ProfileManager::load_from(store.clone());

        let saved = manager.save("  Ada  ", "  London ").unwrap();
        assert_eq!(saved.name, "Ada");
        assert_eq!(saved.location.as_deref(), Some("London"));

        let stored: UserProfile = store.get_json(PROFILE_KEY).unwrap();
        assert_eq!(stored, saved);
    }

    #[test]
    fn test_blank_name_leaves_store_unchanged() {
        let store = Arc::new(MemoryStore::new());
        let mut manager = ProfileManager::load_from(store.clone());
        manager.save("Ada", "London").unwrap();
        let before = store.get(PROFILE_KEY);

        assert!(manager.save("", "NYC").is_none());
        assert!(manager.save("   ", "NYC").is_none());

        assert_eq!(store.get(PROFILE_KEY), before);
        assert_eq!(manager.load().name, "Ada");
    }

    #[test]
    fn test_blank_name_on_empty_store_writes_nothing() {
        let store = Arc::new(MemoryStore::new());
        let mut manager = ProfileManager::load_from(store.clone());

        assert!(manager.save("", "NYC").is_none());
        assert!(store.get(PROFILE_KEY).is_none());
    }

    #[test]
    fn test_blank_location_is_absent() {
        let store = Arc::new(MemoryStore::new());
        let mut manager = ProfileManager::load_from(store.clone());

        let saved = manager.save("Ada", "   ").unwrap();
        assert!(saved.location.is_none());
        assert_eq!(store.get(PROFILE_KEY).as_deref(), Some(r#"{"name":"Ada"}"#));
    }

    #[test]
    fn test_load_legacy_records() {
        let store = Arc::new(MemoryStore::with_entries([(
            PROFILE_KEY,
            r#"{"name":"Grace","location":""}"#,
        )]));
        let manager = ProfileManager::load_from(store);
        assert_eq!(manager.load().name, "Grace");
        assert!(manager.load().location.is_none());

        let store = Arc::new(MemoryStore::with_entries([(PROFILE_KEY, "{}")]));
        let manager = ProfileManager::load_from(store);
        assert!(!manager.load().is_set());
    }

    #[test]
    fn test_load_corrupt_profile() {
        let store = Arc::new(MemoryStore::with_entries([(PROFILE_KEY, "nope")]));
        let manager = ProfileManager::load_from(store);
        assert_eq!(manager.load(), &UserProfile::default());
    }
}
