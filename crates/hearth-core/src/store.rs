//! Single source of truth for user-configurable state.
//!
//! Every mutator updates the in-memory [`AppState`] and re-serializes the
//! whole blob to `<data_dir>/state.json`. Persistence failures never surface
//! to the caller: they are logged, remembered in `last_error` for the UI to
//! show once, and the in-memory state keeps going.

use std::fs;
use std::path::PathBuf;

use uuid::Uuid;

use crate::config::CoreConfig;
use crate::constants::STATE_FILE;
use crate::models::{
    AppState, NewShortcut, PreferenceUpdate, Shortcut, ShortcutPatch, ThemePatch,
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read state file: {0}")]
    Read(String),
    #[error("failed to parse state file: {0}")]
    Parse(String),
    #[error("failed to write state file: {0}")]
    Write(String),
}

/// Identifier source for new shortcuts, injected at construction so tests
/// can supply deterministic ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Production generator: random UUID v4.
#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

pub struct StateStore {
    path: PathBuf,
    state: AppState,
    ids: Box<dyn IdGenerator>,
    last_error: Option<StoreError>,
}

impl StateStore {
    /// Open the store, rehydrating from disk. A missing or unparsable file
    /// falls back to the built-in defaults; check [`take_last_error`] to
    /// surface a load problem once at startup.
    ///
    /// [`take_last_error`]: StateStore::take_last_error
    pub fn open(config: &CoreConfig, ids: Box<dyn IdGenerator>) -> Self {
        let path = config.data_dir.join(STATE_FILE);
        let (state, last_error) = Self::load_from_file(&path);
        Self {
            path,
            state,
            ids,
            last_error,
        }
    }

    fn load_from_file(path: &PathBuf) -> (AppState, Option<StoreError>) {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(state) => (state, None),
                Err(e) => (
                    AppState::default(),
                    Some(StoreError::Parse(e.to_string())),
                ),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // First run - nothing persisted yet
                (AppState::default(), None)
            }
            Err(e) => (AppState::default(), Some(StoreError::Read(e.to_string()))),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Last persistence problem, if any, clearing it.
    pub fn take_last_error(&mut self) -> Option<StoreError> {
        self.last_error.take()
    }

    pub fn set_preference(&mut self, update: PreferenceUpdate) {
        match update {
            PreferenceUpdate::Use24h(v) => self.state.use_24h = v,
            PreferenceUpdate::ShowSeconds(v) => self.state.show_seconds = v,
            PreferenceUpdate::ShowWeather(v) => self.state.show_weather = v,
            PreferenceUpdate::ShowGreeting(v) => self.state.show_greeting = v,
            PreferenceUpdate::UserName(v) => self.state.user_name = v,
        }
        self.persist();
    }

    pub fn update_theme(&mut self, patch: ThemePatch) {
        if let Some(base) = patch.base {
            self.state.theme.base = base;
        }
        if let Some(accent) = patch.accent {
            self.state.theme.accent = accent;
        }
        self.persist();
    }

    /// Append a new shortcut with a freshly generated id, returning the id.
    pub fn add_shortcut(&mut self, data: NewShortcut) -> String {
        let id = self.ids.next_id();
        self.state.shortcuts.push(Shortcut {
            id: id.clone(),
            title: data.title,
            url: data.url,
            icon: data.icon,
        });
        self.persist();
        id
    }

    /// Merge `patch` into the shortcut with the given id; no-op if absent.
    pub fn edit_shortcut(&mut self, id: &str, patch: ShortcutPatch) {
        if let Some(shortcut) = self.state.shortcuts.iter_mut().find(|s| s.id == id) {
            if let Some(title) = patch.title {
                shortcut.title = title;
            }
            if let Some(url) = patch.url {
                shortcut.url = url;
            }
            if let Some(icon) = patch.icon {
                shortcut.icon = icon;
            }
            self.persist();
        }
    }

    /// Remove the shortcut with the given id; no-op if absent.
    pub fn remove_shortcut(&mut self, id: &str) {
        let before = self.state.shortcuts.len();
        self.state.shortcuts.retain(|s| s.id != id);
        if self.state.shortcuts.len() != before {
            self.persist();
        }
    }

    /// Move the shortcut at `from` so it lands at `to`, where `to` is
    /// interpreted against the sequence *after* removal:
    /// `[a,b,c,d]` with (0, 2) yields `[b,c,a,d]`.
    ///
    /// An out-of-range `from` is a no-op; `to` clamps to the end.
    pub fn reorder_shortcuts(&mut self, from: usize, to: usize) {
        if from >= self.state.shortcuts.len() {
            return;
        }
        let item = self.state.shortcuts.remove(from);
        let to = to.min(self.state.shortcuts.len());
        self.state.shortcuts.insert(to, item);
        self.persist();
    }

    /// One-way latch marking the bang feature as discovered. Idempotent.
    pub fn set_has_seen_bang_hint(&mut self) {
        if self.state.onboarding.has_seen_bang_hint {
            return;
        }
        self.state.onboarding.has_seen_bang_hint = true;
        self.persist();
    }

    fn persist(&mut self) {
        if let Err(e) = self.write_to_file() {
            tracing::warn!("skipping state persist: {e}");
            self.last_error = Some(e);
        }
    }

    fn write_to_file(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Write(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(&self.state)
            .map_err(|e| StoreError::Write(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| StoreError::Write(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ThemeColors;

    /// Deterministic ids: "id-1", "id-2", ...
    struct SeqIds(u32);

    impl IdGenerator for SeqIds {
        fn next_id(&mut self) -> String {
            self.0 += 1;
            format!("id-{}", self.0)
        }
    }

    fn test_store(dir: &tempfile::TempDir) -> StateStore {
        let config = CoreConfig::new(dir.path());
        StateStore::open(&config, Box::new(SeqIds(0)))
    }

    fn shortcut_ids(store: &StateStore) -> Vec<&str> {
        store.state().shortcuts.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn fresh_store_has_documented_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = test_store(&dir);
        let state = store.state();
        assert!(state.use_24h);
        assert!(!state.show_weather);
        assert!(!state.show_seconds);
        assert!(state.show_greeting);
        assert_eq!(state.user_name, "Traveler");
        assert_eq!(state.search_engines.len(), 7);
        assert_eq!(state.shortcuts.len(), 4);
        assert!(!state.onboarding.has_seen_bang_hint);
        assert_eq!(state.theme, ThemeColors::default());
    }

    #[test]
    fn corrupt_state_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(STATE_FILE), "{ not json").unwrap();
        let mut store = test_store(&dir);
        assert_eq!(*store.state(), AppState::default());
        assert!(matches!(store.take_last_error(), Some(StoreError::Parse(_))));
        assert!(store.take_last_error().is_none());
    }

    #[test]
    fn rehydration_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let expected = {
            let mut store = test_store(&dir);
            store.set_preference(PreferenceUpdate::UserName("Mira".into()));
            store.set_preference(PreferenceUpdate::ShowWeather(true));
            store.add_shortcut(NewShortcut {
                title: "Docs".into(),
                url: "https://docs.rs".into(),
                icon: "📚".into(),
            });
            store.update_theme(ThemePatch {
                base: Some(Some("#1a1a2a".into())),
                accent: None,
            });
            store.set_has_seen_bang_hint();
            store.state().clone()
        };

        let reopened = test_store(&dir);
        assert_eq!(*reopened.state(), expected);
    }

    #[test]
    fn add_then_remove_restores_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = test_store(&dir);
        let original = store.state().shortcuts.clone();
        let id = store.add_shortcut(NewShortcut {
            title: "Netflix".into(),
            url: "https://netflix.com".into(),
            icon: "🍿".into(),
        });
        assert_eq!(id, "id-1");
        assert_eq!(store.state().shortcuts.len(), original.len() + 1);
        store.remove_shortcut(&id);
        assert_eq!(store.state().shortcuts, original);
    }

    #[test]
    fn edit_merges_only_supplied_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = test_store(&dir);
        store.edit_shortcut(
            "1",
            ShortcutPatch {
                title: Some("Hub".into()),
                ..Default::default()
            },
        );
        let first = &store.state().shortcuts[0];
        assert_eq!(first.title, "Hub");
        assert_eq!(first.url, "https://github.com");
        assert_eq!(first.icon, "🐙");
    }

    #[test]
    fn edit_and_remove_unknown_id_are_noops() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = test_store(&dir);
        let before = store.state().clone();
        store.edit_shortcut("nope", ShortcutPatch::default());
        store.remove_shortcut("nope");
        assert_eq!(*store.state(), before);
    }

    #[test]
    fn reorder_uses_post_removal_target_index() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = test_store(&dir);
        // defaults are [1,2,3,4] = [a,b,c,d]
        store.reorder_shortcuts(0, 2);
        assert_eq!(shortcut_ids(&store), ["2", "3", "1", "4"]);
    }

    #[test]
    fn reorder_clamps_target_and_ignores_bad_source() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = test_store(&dir);
        store.reorder_shortcuts(9, 0);
        assert_eq!(shortcut_ids(&store), ["1", "2", "3", "4"]);
        store.reorder_shortcuts(0, 99);
        assert_eq!(shortcut_ids(&store), ["2", "3", "4", "1"]);
    }

    #[test]
    fn bang_hint_latch_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = test_store(&dir);
        store.set_has_seen_bang_hint();
        let once = store.state().clone();
        store.set_has_seen_bang_hint();
        assert_eq!(*store.state(), once);
        assert!(store.state().onboarding.has_seen_bang_hint);
    }

    #[test]
    fn theme_patch_merges_and_clears() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = test_store(&dir);
        store.update_theme(ThemePatch {
            base: Some(Some("#112233".into())),
            accent: Some(Some("#445566".into())),
        });
        store.update_theme(ThemePatch {
            base: None,
            accent: Some(None),
        });
        assert_eq!(store.state().theme.base.as_deref(), Some("#112233"));
        assert_eq!(store.state().theme.accent, None);
    }

    #[test]
    fn persist_failure_keeps_memory_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = test_store(&dir);
        // Point the store at a path whose parent is a regular file so the
        // write fails.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        store.path = blocker.join("state.json");

        store.set_preference(PreferenceUpdate::UserName("Kept".into()));
        assert_eq!(store.state().user_name, "Kept");
        assert!(matches!(store.take_last_error(), Some(StoreError::Write(_))));
    }
}
