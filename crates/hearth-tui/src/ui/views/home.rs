//! The dashboard itself: greeting, clock, weather, search bar, and the
//! shortcut grid.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use hearth_core::weather::{condition_label, relative_age, WeatherUpdate};

use crate::ui::app::GRID_COLS;
use crate::ui::{theme, App, Focus};

const SIDEBAR_WIDTH: u16 = 34;
const TILE_HEIGHT: u16 = 4;

pub fn render_home(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(area);

    render_sidebar(f, app, columns[0]);

    let main = Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).split(columns[1]);
    render_search_bar(f, app, main[0]);
    render_grid(f, app, main[1]);
}

fn render_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let state = app.store.state();
    let mut constraints = Vec::new();
    if state.show_greeting {
        constraints.push(Constraint::Length(4));
    }
    constraints.push(Constraint::Length(5));
    if state.show_weather {
        constraints.push(Constraint::Length(5));
    }
    constraints.push(Constraint::Min(0));
    let chunks = Layout::vertical(constraints).split(area);

    let mut next = 0;
    if state.show_greeting {
        render_greeting(f, app, chunks[next]);
        next += 1;
    }
    render_clock(f, app, chunks[next]);
    next += 1;
    if state.show_weather {
        render_weather(f, app, chunks[next]);
    }
}

fn card(title: &str, accent: ratatui::style::Color) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().fg(theme::TEXT_MUTED))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(theme::BG_SURFACE))
}

fn render_greeting(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme();
    let block = card("hearth", palette.accent);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            "Welcome back,",
            Style::default().fg(theme::TEXT_PRIMARY),
        )),
        Line::from(Span::styled(
            app.store.state().user_name.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_clock(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme();
    let state = app.store.state();
    let block = card("clock", palette.accent);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let time = app
        .now
        .format(time_format(state.use_24h, state.show_seconds))
        .to_string();
    let date = app.now.format("%A, %B %-d").to_string();

    let lines = vec![
        Line::from(Span::styled(
            time,
            Style::default()
                .fg(theme::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(date, Style::default().fg(theme::TEXT_MUTED))),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_weather(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme();
    let block = card("weather", palette.accent);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = match &app.weather {
        None => vec![
            Line::from(Span::styled("--°", Style::default().fg(theme::TEXT_MUTED))),
            Line::from(Span::styled(
                "fetching...",
                Style::default().fg(theme::TEXT_MUTED),
            )),
        ],
        Some(WeatherUpdate::Current(snapshot)) => vec![
            Line::from(Span::styled(
                format!("{:.0}°C", snapshot.temperature),
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                condition_label(snapshot.weather_code),
                Style::default().fg(theme::ACCENT_OK),
            )),
        ],
        Some(WeatherUpdate::Offline(Some(snapshot))) => vec![
            Line::from(Span::styled(
                format!("{:.0}°C", snapshot.temperature),
                Style::default().fg(theme::TEXT_PRIMARY),
            )),
            Line::from(Span::styled(
                format!("offline · {}", relative_age(snapshot.age_secs())),
                Style::default().fg(theme::ACCENT_WARNING),
            )),
        ],
        Some(WeatherUpdate::Offline(None)) => vec![
            Line::from(Span::styled("--°", Style::default().fg(theme::TEXT_MUTED))),
            Line::from(Span::styled(
                "offline",
                Style::default().fg(theme::ACCENT_WARNING),
            )),
        ],
    };
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_search_bar(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme();
    let focused = app.focus == Focus::Search && matches!(app.modal, crate::ui::Modal::None);
    let border = if focused {
        palette.accent
    } else {
        theme::TEXT_MUTED
    };
    let label = app
        .selected_engine()
        .map(|e| e.label.clone())
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme::BG_SURFACE));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut spans = vec![Span::styled(
        format!(" {label} ▸ "),
        Style::default().fg(palette.accent),
    )];
    if app.query.is_empty() && !focused {
        spans.push(Span::styled(
            format!("Search {label}..."),
            Style::default().fg(theme::TEXT_MUTED),
        ));
    } else {
        spans.push(Span::styled(
            app.query.clone(),
            Style::default().fg(theme::TEXT_PRIMARY),
        ));
        if focused {
            spans.push(Span::styled("█", Style::default().fg(palette.accent)));
        }
    }
    let mut lines = vec![Line::from(spans)];

    // Discovery hint until the first bang redirect happens
    if app.query.is_empty() && !app.store.state().onboarding.has_seen_bang_hint {
        lines.push(Line::from(Span::styled(
            " Try: !yt, !gh, !r — Tab cycles engines",
            Style::default().fg(theme::TEXT_MUTED),
        )));
    }
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let shortcuts = &app.store.state().shortcuts;
    let grid_focused = app.focus == Focus::Grid && matches!(app.modal, crate::ui::Modal::None);

    let header = Rect::new(area.x + 1, area.y, area.width.saturating_sub(2), 1);
    f.render_widget(
        Paragraph::new("Apps").style(
            Style::default()
                .fg(theme::TEXT_MUTED)
                .add_modifier(Modifier::BOLD),
        ),
        header,
    );

    let body = Rect::new(
        area.x,
        area.y + 1,
        area.width,
        area.height.saturating_sub(1),
    );

    if shortcuts.is_empty() {
        f.render_widget(
            Paragraph::new(" No shortcuts yet - press 'a' to add one")
                .style(Style::default().fg(theme::TEXT_MUTED)),
            body,
        );
        return;
    }

    for (i, shortcut) in shortcuts.iter().enumerate() {
        let row = i / GRID_COLS;
        let col = i % GRID_COLS;
        let tile_width = body.width / GRID_COLS as u16;
        let x = body.x + col as u16 * tile_width;
        let y = body.y + row as u16 * TILE_HEIGHT;
        if y + TILE_HEIGHT > body.y + body.height || tile_width < 8 {
            break;
        }
        let tile = Rect::new(x, y, tile_width.saturating_sub(1), TILE_HEIGHT);
        render_tile(f, app, tile, shortcut, grid_focused && i == app.grid_index);
    }
}

fn render_tile(
    f: &mut Frame,
    app: &App,
    area: Rect,
    shortcut: &hearth_core::models::Shortcut,
    selected: bool,
) {
    let palette = app.theme();
    let (border, bg) = if selected {
        (palette.accent, theme::BG_SELECTED)
    } else {
        (theme::TEXT_MUTED, theme::BG_SURFACE)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let icon = if shortcut.icon.is_empty() {
        "🔗"
    } else {
        shortcut.icon.as_str()
    };
    let lines = vec![
        Line::from(vec![
            Span::raw(format!("{icon} ")),
            Span::styled(
                shortcut.title.clone(),
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            hostname(&shortcut.url),
            Style::default().fg(theme::TEXT_MUTED),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

/// Clock format for the preference pair. The 12-hour variants drop the
/// leading zero and carry no AM/PM marker.
fn time_format(use_24h: bool, show_seconds: bool) -> &'static str {
    match (use_24h, show_seconds) {
        (true, true) => "%H:%M:%S",
        (true, false) => "%H:%M",
        (false, true) => "%-I:%M:%S",
        (false, false) => "%-I:%M",
    }
}

/// Hostname of a shortcut URL for the tile subtitle; falls back to the raw
/// text when the URL does not parse.
fn hostname(raw: &str) -> String {
    url::Url::parse(raw)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_format_covers_every_preference_pair() {
        let evening = chrono::NaiveDate::from_ymd_opt(2026, 8, 28)
            .unwrap()
            .and_hms_opt(21, 5, 9)
            .unwrap();
        assert_eq!(
            evening.format(time_format(true, true)).to_string(),
            "21:05:09"
        );
        assert_eq!(evening.format(time_format(true, false)).to_string(), "21:05");
        assert_eq!(
            evening.format(time_format(false, true)).to_string(),
            "9:05:09"
        );
        assert_eq!(evening.format(time_format(false, false)).to_string(), "9:05");
    }

    #[test]
    fn hostname_extracts_host_or_falls_back() {
        assert_eq!(hostname("https://github.com/search"), "github.com");
        assert_eq!(hostname("not a url"), "not a url");
    }
}
