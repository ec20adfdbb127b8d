//! Client-side state container shared by the views.
//!
//! `EntryContext::init` is the only implicit fetch: it loads the full entry
//! list once and applies the stored theme preference. After that the local
//! list changes only through the context's own write methods, and only once
//! the server has confirmed the write.

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::models::{CreateEntryRequest, Entry, UpdateEntryRequest};
use crate::preferences::{PreferenceStore, Preferences};
use std::collections::BTreeSet;
use tracing::{debug, info};

pub const DARK_MARKER: &str = "dark";

/// Presentation markers applied to the root of the view tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeRoot {
    classes: BTreeSet<String>,
}

impl ThemeRoot {
    pub fn set(&mut self, marker: &str, enabled: bool) {
        if enabled {
            self.classes.insert(marker.to_string());
        } else {
            self.classes.remove(marker);
        }
    }

    pub fn contains(&self, marker: &str) -> bool {
        self.classes.contains(marker)
    }
}

#[derive(Debug)]
pub struct EntryContext {
    api: ApiClient,
    preference_store: PreferenceStore,
    entries: Vec<Entry>,
    preferences: Preferences,
    theme: ThemeRoot,
}

impl EntryContext {
    pub async fn init(api: ApiClient, preference_store: PreferenceStore) -> Result<Self, ClientError> {
        let preferences = preference_store.load().await;
        let entries = api.list_entries().await?;
        info!(count = entries.len(), "entries loaded");

        let mut context = Self {
            api,
            preference_store,
            entries,
            preferences,
            theme: ThemeRoot::default(),
        };
        context.apply_theme();
        Ok(context)
    }

    pub async fn connect(config: &ClientConfig) -> Result<Self, ClientError> {
        let api = ApiClient::new(config.api_base_url.as_str());
        Self::init(api, PreferenceStore::new(&config.preferences_path)).await
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn dark_mode(&self) -> bool {
        self.preferences.dark_mode
    }

    pub fn theme(&self) -> &ThemeRoot {
        &self.theme
    }

    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        self.entries = self.api.list_entries().await?;
        Ok(())
    }

    pub async fn save_entry(&mut self, request: &CreateEntryRequest) -> Result<&Entry, ClientError> {
        let created = self.api.create_entry(request).await?;
        debug!(id = %created.id, "entry saved");
        self.entries.push(created);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Sends the update, then replaces the local copy with the row as the
    /// server now stores it. The local list is untouched if either call fails.
    pub async fn update_entry(&mut self, id: &str, changes: &UpdateEntryRequest) -> Result<(), ClientError> {
        self.api.update_entry(id, changes).await?;
        let fresh = self.api.get_entry(id).await?;

        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(slot) => *slot = fresh,
            None => self.entries.push(fresh),
        }
        debug!(%id, "entry updated");
        Ok(())
    }

    pub async fn delete_entry(&mut self, id: &str) -> Result<(), ClientError> {
        self.api.delete_entry(id).await?;
        self.entries.retain(|entry| entry.id != id);
        debug!(%id, "entry deleted");
        Ok(())
    }

    /// Flips dark mode and persists it. The in-memory flag and marker change
    /// even when the preference file cannot be written; the error is returned.
    pub async fn toggle_dark_mode(&mut self) -> Result<bool, ClientError> {
        self.preferences.dark_mode = !self.preferences.dark_mode;
        self.apply_theme();
        self.preference_store.persist(&self.preferences).await?;
        Ok(self.preferences.dark_mode)
    }

    fn apply_theme(&mut self) {
        self.theme.set(DARK_MARKER, self.preferences.dark_mode);
    }
}
