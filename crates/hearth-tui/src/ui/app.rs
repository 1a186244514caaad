//! Application state for the TUI: focus, modals, search bar, grid selection.
//!
//! All persisted state lives in the [`StateStore`]; everything here is
//! per-session view state.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use hearth_core::models::{NewShortcut, SearchEngine, Shortcut, ShortcutPatch};
use hearth_core::resolver::{self, Resolution};
use hearth_core::weather::WeatherUpdate;
use hearth_core::{CoreConfig, StateStore};

use crate::ui::theme::{parse_hex_color, Theme};

/// Tiles per grid row.
pub const GRID_COLS: usize = 4;

/// How long a status message stays visible.
const STATUS_TTL: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The search bar has focus; printable keys type into the query.
    Search,
    /// The shortcut grid has focus.
    Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    ShowSeconds,
    ShowWeather,
    ShowGreeting,
    Use24h,
    UserName,
    ThemeBase,
    ThemeAccent,
    ResetTheme,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 8] = [
        SettingsRow::ShowSeconds,
        SettingsRow::ShowWeather,
        SettingsRow::ShowGreeting,
        SettingsRow::Use24h,
        SettingsRow::UserName,
        SettingsRow::ThemeBase,
        SettingsRow::ThemeAccent,
        SettingsRow::ResetTheme,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsRow::ShowSeconds => "Show Seconds",
            SettingsRow::ShowWeather => "Show Weather",
            SettingsRow::ShowGreeting => "Show Greeting",
            SettingsRow::Use24h => "24h Time Format",
            SettingsRow::UserName => "Name",
            SettingsRow::ThemeBase => "Background",
            SettingsRow::ThemeAccent => "Accent",
            SettingsRow::ResetTheme => "Reset theme to Rose Pine Moon",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(
            self,
            SettingsRow::UserName | SettingsRow::ThemeBase | SettingsRow::ThemeAccent
        )
    }
}

#[derive(Debug, Default)]
pub struct SettingsState {
    pub selected: usize,
    /// Edit buffer for the selected text row, when editing.
    pub editing: Option<String>,
    pub error: Option<String>,
}

impl SettingsState {
    pub fn row(&self) -> SettingsRow {
        SettingsRow::ALL[self.selected]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Url,
    Icon,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Title, FormField::Url, FormField::Icon];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Name",
            FormField::Url => "URL",
            FormField::Icon => "Icon",
        }
    }
}

/// Add/edit form for a shortcut tile.
#[derive(Debug, Default)]
pub struct FormState {
    /// `Some(id)` when editing an existing shortcut, `None` when adding.
    pub editing_id: Option<String>,
    pub title: String,
    pub url: String,
    pub icon: String,
    pub field: usize,
    pub error: Option<String>,
}

impl FormState {
    pub fn add() -> Self {
        Self::default()
    }

    pub fn edit(shortcut: &Shortcut) -> Self {
        Self {
            editing_id: Some(shortcut.id.clone()),
            title: shortcut.title.clone(),
            url: shortcut.url.clone(),
            icon: shortcut.icon.clone(),
            field: 0,
            error: None,
        }
    }

    pub fn active_field(&self) -> FormField {
        FormField::ALL[self.field]
    }

    pub fn active_value_mut(&mut self) -> &mut String {
        match self.active_field() {
            FormField::Title => &mut self.title,
            FormField::Url => &mut self.url,
            FormField::Icon => &mut self.icon,
        }
    }

    pub fn next_field(&mut self) {
        self.field = (self.field + 1) % FormField::ALL.len();
    }

    pub fn prev_field(&mut self) {
        self.field = (self.field + FormField::ALL.len() - 1) % FormField::ALL.len();
    }

    /// Name and URL are required; the URL must parse as an absolute URL.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        if self.url.trim().is_empty() {
            return Err("URL is required".to_string());
        }
        url::Url::parse(self.url.trim())
            .map(|_| ())
            .map_err(|e| format!("URL must be absolute (https://...): {e}"))
    }
}

#[derive(Debug, Default)]
pub enum Modal {
    #[default]
    None,
    Settings(SettingsState),
    ShortcutForm(FormState),
    BangHelp,
}

#[derive(Debug)]
pub struct StatusMessage {
    pub text: String,
    pub warning: bool,
    expires_at: Instant,
}

pub struct App {
    pub config: CoreConfig,
    pub store: StateStore,
    pub running: bool,
    pub pending_quit: bool,
    pub focus: Focus,
    pub query: String,
    pub engine_index: usize,
    pub grid_index: usize,
    pub modal: Modal,
    pub weather: Option<WeatherUpdate>,
    pub now: DateTime<Local>,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(config: CoreConfig, mut store: StateStore) -> Self {
        let engine_index = resolver::default_engine_index(&store.state().search_engines);
        let load_error = store.take_last_error();
        let mut app = Self {
            config,
            store,
            running: true,
            pending_quit: false,
            focus: Focus::Search,
            query: String::new(),
            engine_index,
            grid_index: 0,
            modal: Modal::None,
            weather: None,
            now: Local::now(),
            status: None,
        };
        if let Some(e) = load_error {
            app.set_warning(format!("Stored state unreadable, using defaults ({e})"));
        }
        app
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Per-tick upkeep: advance the clock, expire the status message.
    pub fn tick(&mut self) {
        self.now = Local::now();
        if let Some(status) = &self.status {
            if Instant::now() >= status.expires_at {
                self.status = None;
            }
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::from_overrides(&self.store.state().theme)
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            warning: false,
            expires_at: Instant::now() + STATUS_TTL,
        });
    }

    pub fn set_warning(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            warning: true,
            expires_at: Instant::now() + STATUS_TTL,
        });
    }

    // ---- search bar ----

    pub fn selected_engine(&self) -> Option<&SearchEngine> {
        self.store.state().search_engines.get(self.engine_index)
    }

    /// Cycle the engine selection forward or backward, wrapping.
    pub fn cycle_engine(&mut self, forward: bool) {
        let len = self.store.state().search_engines.len();
        if len == 0 {
            return;
        }
        self.engine_index = if forward {
            (self.engine_index + 1) % len
        } else {
            (self.engine_index + len - 1) % len
        };
    }

    /// Resolve the query and hand the result to the browser. Clears the
    /// query on navigation; configuration errors land in the status line.
    pub fn submit_search(&mut self) {
        let engines = self.store.state().search_engines.clone();
        let Some(selected) = engines.get(self.engine_index) else {
            return;
        };
        match resolver::resolve(&self.query, &engines, selected) {
            Ok(Resolution::None) => {}
            Ok(Resolution::Navigate { url, bang_used }) => {
                if bang_used && !self.store.state().onboarding.has_seen_bang_hint {
                    self.set_status("Bangs discovered! !yt, !gh, !r, !w jump straight there");
                }
                if bang_used {
                    self.store.set_has_seen_bang_hint();
                }
                self.open_url(&url);
                self.query.clear();
            }
            Err(e) => self.set_warning(e.to_string()),
        }
    }

    /// Full-page navigation analogue: hand the URL to the system browser.
    pub fn open_url(&mut self, url: &str) {
        tracing::info!("opening {url}");
        if let Err(e) = open::that_detached(url) {
            self.set_warning(format!("Failed to open browser: {e}"));
        }
    }

    // ---- shortcut grid ----

    pub fn shortcut_count(&self) -> usize {
        self.store.state().shortcuts.len()
    }

    pub fn selected_shortcut(&self) -> Option<&Shortcut> {
        self.store.state().shortcuts.get(self.grid_index)
    }

    pub fn open_selected_shortcut(&mut self) {
        if let Some(url) = self.selected_shortcut().map(|s| s.url.clone()) {
            self.open_url(&url);
        }
    }

    pub fn move_grid_selection(&mut self, dx: isize, dy: isize) {
        let len = self.shortcut_count();
        if len == 0 {
            return;
        }
        let current = self.grid_index as isize;
        let target = current + dx + dy * GRID_COLS as isize;
        if (0..len as isize).contains(&target) {
            self.grid_index = target as usize;
        }
    }

    /// Move the selected tile one slot backward or forward, following it
    /// with the selection.
    pub fn reorder_selected(&mut self, forward: bool) {
        let len = self.shortcut_count();
        if len < 2 {
            return;
        }
        let from = self.grid_index;
        let to = if forward {
            if from + 1 >= len {
                return;
            }
            from + 1
        } else {
            if from == 0 {
                return;
            }
            from - 1
        };
        self.store.reorder_shortcuts(from, to);
        self.grid_index = to;
    }

    pub fn delete_selected_shortcut(&mut self) {
        if let Some(id) = self.selected_shortcut().map(|s| s.id.clone()) {
            let title = self.selected_shortcut().map(|s| s.title.clone());
            self.store.remove_shortcut(&id);
            self.clamp_grid_selection();
            if let Some(title) = title {
                self.set_status(format!("Removed \"{title}\""));
            }
        }
    }

    pub fn clamp_grid_selection(&mut self) {
        let len = self.shortcut_count();
        if len == 0 {
            self.grid_index = 0;
        } else if self.grid_index >= len {
            self.grid_index = len - 1;
        }
    }

    // ---- modals ----

    pub fn open_add_form(&mut self) {
        self.modal = Modal::ShortcutForm(FormState::add());
    }

    pub fn open_edit_form(&mut self) {
        if let Some(shortcut) = self.selected_shortcut() {
            self.modal = Modal::ShortcutForm(FormState::edit(shortcut));
        }
    }

    /// Validate and commit the shortcut form; keeps the modal open with an
    /// inline error when validation fails.
    pub fn submit_shortcut_form(&mut self) {
        let Modal::ShortcutForm(form) = &mut self.modal else {
            return;
        };
        if let Err(msg) = form.validate() {
            form.error = Some(msg);
            return;
        }
        let title = form.title.trim().to_string();
        let url = form.url.trim().to_string();
        let icon = form.icon.trim().to_string();
        let editing_id = form.editing_id.clone();
        match editing_id {
            Some(id) => self.store.edit_shortcut(
                &id,
                ShortcutPatch {
                    title: Some(title),
                    url: Some(url),
                    icon: Some(icon),
                },
            ),
            None => {
                self.store.add_shortcut(NewShortcut { title, url, icon });
                self.grid_index = self.shortcut_count().saturating_sub(1);
            }
        }
        self.modal = Modal::None;
        self.surface_store_error();
    }

    /// Apply a committed settings text edit. Theme fields must be valid
    /// `#rrggbb`; an empty value clears the override.
    pub fn commit_settings_edit(&mut self) {
        use hearth_core::models::{PreferenceUpdate, ThemePatch};

        let Modal::Settings(state) = &mut self.modal else {
            return;
        };
        let Some(value) = state.editing.clone() else {
            return;
        };
        let row = state.row();
        match row {
            SettingsRow::UserName => {
                state.editing = None;
                self.store
                    .set_preference(PreferenceUpdate::UserName(value.trim().to_string()));
            }
            SettingsRow::ThemeBase | SettingsRow::ThemeAccent => {
                let trimmed = value.trim();
                let color = if trimmed.is_empty() {
                    None
                } else if parse_hex_color(trimmed).is_some() {
                    Some(trimmed.to_string())
                } else {
                    state.error = Some("Colors must look like #aabbcc".to_string());
                    return;
                };
                state.editing = None;
                state.error = None;
                let patch = if row == SettingsRow::ThemeBase {
                    ThemePatch {
                        base: Some(color),
                        accent: None,
                    }
                } else {
                    ThemePatch {
                        base: None,
                        accent: Some(color),
                    }
                };
                self.store.update_theme(patch);
            }
            _ => {}
        }
        self.surface_store_error();
    }

    /// Show a swallowed persistence error once, then forget it.
    pub fn surface_store_error(&mut self) {
        if let Some(e) = self.store.take_last_error() {
            self.set_warning(format!("Changes kept in memory only: {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::store::{IdGenerator, StateStore};

    struct SeqIds(u32);

    impl IdGenerator for SeqIds {
        fn next_id(&mut self) -> String {
            self.0 += 1;
            format!("t-{}", self.0)
        }
    }

    fn test_app() -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        let config = CoreConfig::new(dir.path());
        let store = StateStore::open(&config, Box::new(SeqIds(0)));
        let app = App::new(config, store);
        (dir, app)
    }

    #[test]
    fn engine_cycling_wraps_both_directions() {
        let (_dir, mut app) = test_app();
        let len = app.store.state().search_engines.len();
        assert_eq!(app.engine_index, 0);
        app.cycle_engine(false);
        assert_eq!(app.engine_index, len - 1);
        app.cycle_engine(true);
        assert_eq!(app.engine_index, 0);
        for _ in 0..len {
            app.cycle_engine(true);
        }
        assert_eq!(app.engine_index, 0);
    }

    #[test]
    fn grid_selection_stays_in_bounds() {
        let (_dir, mut app) = test_app();
        // 4 default shortcuts in a 4-wide grid: one row
        app.move_grid_selection(-1, 0);
        assert_eq!(app.grid_index, 0);
        app.move_grid_selection(1, 0);
        assert_eq!(app.grid_index, 1);
        app.move_grid_selection(0, 1);
        assert_eq!(app.grid_index, 1);
        app.move_grid_selection(99, 0);
        assert_eq!(app.grid_index, 1);
    }

    #[test]
    fn reorder_selected_follows_the_tile() {
        let (_dir, mut app) = test_app();
        app.grid_index = 1;
        app.reorder_selected(true);
        assert_eq!(app.grid_index, 2);
        let ids: Vec<_> = app
            .store
            .state()
            .shortcuts
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "3", "2", "4"]);
    }

    #[test]
    fn delete_clamps_the_selection() {
        let (_dir, mut app) = test_app();
        app.grid_index = 3;
        app.delete_selected_shortcut();
        assert_eq!(app.shortcut_count(), 3);
        assert_eq!(app.grid_index, 2);
    }

    #[test]
    fn form_validation_requires_name_and_absolute_url() {
        let mut form = FormState::add();
        assert!(form.validate().is_err());
        form.title = "Netflix".into();
        form.url = "netflix".into();
        assert!(form.validate().is_err());
        form.url = "https://netflix.com".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn submitting_the_add_form_selects_the_new_tile() {
        let (_dir, mut app) = test_app();
        app.modal = Modal::ShortcutForm(FormState {
            title: "Docs".into(),
            url: "https://docs.rs".into(),
            ..Default::default()
        });
        app.submit_shortcut_form();
        assert!(matches!(app.modal, Modal::None));
        assert_eq!(app.grid_index, 4);
        assert_eq!(app.store.state().shortcuts[4].title, "Docs");
    }

    #[test]
    fn invalid_theme_hex_keeps_the_editor_open() {
        let (_dir, mut app) = test_app();
        let mut state = SettingsState::default();
        state.selected = SettingsRow::ALL
            .iter()
            .position(|r| *r == SettingsRow::ThemeBase)
            .unwrap();
        state.editing = Some("oops".into());
        app.modal = Modal::Settings(state);
        app.commit_settings_edit();
        match &app.modal {
            Modal::Settings(state) => {
                assert!(state.editing.is_some());
                assert!(state.error.is_some());
            }
            other => panic!("unexpected modal: {other:?}"),
        }
        assert_eq!(app.store.state().theme.base, None);
    }
}
