//! Key dispatch. Modals get first claim on a key; otherwise keys route by
//! which part of the page has focus.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::{App, Focus, Modal};

pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Double Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        if app.pending_quit {
            app.quit();
        } else {
            app.pending_quit = true;
        }
        return Ok(());
    }
    app.pending_quit = false;

    match app.modal {
        Modal::Settings(_) => handle_settings_key(app, key),
        Modal::ShortcutForm(_) => handle_form_key(app, key),
        Modal::BangHelp => {
            // Any key dismisses the popover
            app.modal = Modal::None;
        }
        Modal::None => match app.focus {
            Focus::Search => handle_search_key(app, key),
            Focus::Grid => handle_grid_key(app, key),
        },
    }
    Ok(())
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_search(),
        KeyCode::Tab => app.cycle_engine(true),
        KeyCode::BackTab => app.cycle_engine(false),
        KeyCode::Esc => {
            // Clear first; blur to the grid once already empty
            if app.query.is_empty() {
                app.focus = Focus::Grid;
            } else {
                app.query.clear();
            }
        }
        KeyCode::Backspace => {
            app.query.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.query.push(c);
        }
        _ => {}
    }
}

fn handle_grid_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.move_grid_selection(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => app.move_grid_selection(1, 0),
        KeyCode::Up | KeyCode::Char('k') => app.move_grid_selection(0, -1),
        KeyCode::Down | KeyCode::Char('j') => app.move_grid_selection(0, 1),
        KeyCode::Enter => app.open_selected_shortcut(),
        KeyCode::Char('a') => app.open_add_form(),
        KeyCode::Char('e') => app.open_edit_form(),
        KeyCode::Char('d') => app.delete_selected_shortcut(),
        KeyCode::Char('[') => app.reorder_selected(false),
        KeyCode::Char(']') => app.reorder_selected(true),
        KeyCode::Char(',') => app.modal = Modal::Settings(Default::default()),
        KeyCode::Char('?') => app.modal = Modal::BangHelp,
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('/') => app.focus = Focus::Search,
        KeyCode::Esc => app.focus = Focus::Search,
        // Any other printable key refocuses the search bar and types
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.focus = Focus::Search;
            app.query.push(c);
        }
        _ => {}
    }
}

fn handle_settings_key(app: &mut App, key: KeyEvent) {
    use hearth_core::models::{PreferenceUpdate, ThemePatch};
    use crate::ui::SettingsRow;

    let Modal::Settings(state) = &mut app.modal else {
        return;
    };

    // Text rows take over the keyboard while editing
    if state.editing.is_some() {
        match key.code {
            KeyCode::Enter => app.commit_settings_edit(),
            KeyCode::Esc => {
                state.editing = None;
                state.error = None;
            }
            KeyCode::Backspace => {
                if let Some(buffer) = &mut state.editing {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(buffer) = &mut state.editing {
                    buffer.push(c);
                }
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.modal = Modal::None,
        KeyCode::Up | KeyCode::Char('k') => {
            state.selected = state.selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.selected + 1 < SettingsRow::ALL.len() {
                state.selected += 1;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let row = state.row();
            if row.is_text() {
                let current = match row {
                    SettingsRow::UserName => app.store.state().user_name.clone(),
                    SettingsRow::ThemeBase => {
                        app.store.state().theme.base.clone().unwrap_or_default()
                    }
                    SettingsRow::ThemeAccent => {
                        app.store.state().theme.accent.clone().unwrap_or_default()
                    }
                    _ => unreachable!(),
                };
                state.editing = Some(current);
                return;
            }
            match row {
                SettingsRow::ShowSeconds => {
                    let v = !app.store.state().show_seconds;
                    app.store.set_preference(PreferenceUpdate::ShowSeconds(v));
                }
                SettingsRow::ShowWeather => {
                    let v = !app.store.state().show_weather;
                    app.store.set_preference(PreferenceUpdate::ShowWeather(v));
                }
                SettingsRow::ShowGreeting => {
                    let v = !app.store.state().show_greeting;
                    app.store.set_preference(PreferenceUpdate::ShowGreeting(v));
                }
                SettingsRow::Use24h => {
                    let v = !app.store.state().use_24h;
                    app.store.set_preference(PreferenceUpdate::Use24h(v));
                }
                SettingsRow::ResetTheme => {
                    app.store.update_theme(ThemePatch::clear_all());
                }
                _ => {}
            }
            app.surface_store_error();
        }
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    let Modal::ShortcutForm(form) = &mut app.modal else {
        return;
    };

    match key.code {
        KeyCode::Esc => app.modal = Modal::None,
        KeyCode::Enter => app.submit_shortcut_form(),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Backspace => {
            form.active_value_mut().pop();
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(id) = form.editing_id.clone() {
                app.store.remove_shortcut(&id);
                app.clamp_grid_selection();
                app.modal = Modal::None;
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.active_value_mut().push(c);
        }
        _ => {}
    }
}
