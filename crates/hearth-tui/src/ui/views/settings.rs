//! Settings modal: visibility toggles, profile name, theme overrides.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::views::centered_rect;
use crate::ui::{theme, App, SettingsRow, SettingsState};

pub fn render_settings(f: &mut Frame, app: &App, area: Rect, state: &SettingsState) {
    let palette = app.theme();
    let popup = centered_rect(area, 52, (SettingsRow::ALL.len() + 5) as u16);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Settings ")
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(theme::BG_SURFACE));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let app_state = app.store.state();
    let mut lines = Vec::new();

    for (i, row) in SettingsRow::ALL.iter().enumerate() {
        let selected = i == state.selected;
        let marker = if selected { "▌ " } else { "  " };
        let label_style = if selected {
            Style::default()
                .fg(theme::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::TEXT_MUTED)
        };

        let value = match row {
            SettingsRow::ShowSeconds => toggle_text(app_state.show_seconds),
            SettingsRow::ShowWeather => toggle_text(app_state.show_weather),
            SettingsRow::ShowGreeting => toggle_text(app_state.show_greeting),
            SettingsRow::Use24h => toggle_text(app_state.use_24h),
            SettingsRow::UserName => text_value(
                selected,
                state,
                &app_state.user_name,
            ),
            SettingsRow::ThemeBase => text_value(
                selected,
                state,
                app_state.theme.base.as_deref().unwrap_or("default"),
            ),
            SettingsRow::ThemeAccent => text_value(
                selected,
                state,
                app_state.theme.accent.as_deref().unwrap_or("default"),
            ),
            SettingsRow::ResetTheme => String::new(),
        };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(palette.accent)),
            Span::styled(format!("{:<28}", row.label()), label_style),
            Span::styled(value, Style::default().fg(palette.accent)),
        ]));
    }

    lines.push(Line::default());
    if let Some(error) = &state.error {
        lines.push(Line::from(Span::styled(
            format!("  {error}"),
            Style::default().fg(theme::ACCENT_ERROR),
        )));
    } else if state.editing.is_some() {
        lines.push(Line::from(Span::styled(
            "  Enter save · Esc cancel",
            Style::default().fg(theme::TEXT_MUTED),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "  Enter toggle/edit · Esc close",
            Style::default().fg(theme::TEXT_MUTED),
        )));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn toggle_text(on: bool) -> String {
    if on { "● on".to_string() } else { "○ off".to_string() }
}

fn text_value(selected: bool, state: &SettingsState, current: &str) -> String {
    match (&state.editing, selected) {
        (Some(buffer), true) => format!("{buffer}█"),
        _ => current.to_string(),
    }
}
