use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::views;
use crate::ui::{theme, App, Modal};

pub fn render(f: &mut Frame, app: &mut App) {
    let palette = app.theme();

    // Fill the whole frame with the (possibly overridden) base color
    let bg = Block::default().style(Style::default().bg(palette.base));
    f.render_widget(bg, f.area());

    let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(f.area());

    views::render_home(f, app, chunks[0]);
    render_footer(f, app, chunks[1]);

    match &app.modal {
        Modal::Settings(state) => views::render_settings(f, app, f.area(), state),
        Modal::ShortcutForm(form) => views::render_shortcut_form(f, app, f.area(), form),
        Modal::BangHelp => views::render_bang_help(f, app, f.area()),
        Modal::None => {}
    }
}

fn render_footer(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let (text, style) = if app.pending_quit {
        (
            " Press Ctrl+C again to quit".to_string(),
            Style::default().fg(theme::ACCENT_ERROR),
        )
    } else if let Some(status) = app.status() {
        let color = if status.warning {
            theme::ACCENT_WARNING
        } else {
            app.theme().accent
        };
        (format!(" {}", status.text), Style::default().fg(color))
    } else {
        let hints = match app.focus {
            crate::ui::Focus::Search => {
                " Enter search · Tab cycle engine · Esc focus grid".to_string()
            }
            crate::ui::Focus::Grid => {
                " Enter open · a add · e edit · d delete · [ ] move · , settings · ? bangs · q quit"
                    .to_string()
            }
        };
        (hints, Style::default().fg(theme::TEXT_MUTED))
    };

    f.render_widget(Paragraph::new(text).style(style), area);
}
