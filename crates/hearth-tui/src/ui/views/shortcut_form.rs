//! Add/edit modal for a shortcut tile.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::views::centered_rect;
use crate::ui::{theme, App, FormField, FormState};

pub fn render_shortcut_form(f: &mut Frame, app: &App, area: Rect, form: &FormState) {
    let palette = app.theme();
    let title = if form.editing_id.is_some() {
        " Edit App "
    } else {
        " Add App "
    };

    let popup = centered_rect(area, 48, 12);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(title)
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

    let mut lines = Vec::new();
    for field in FormField::ALL {
        let active = field == form.active_field();
        let value = match field {
            FormField::Title => &form.title,
            FormField::Url => &form.url,
            FormField::Icon => &form.icon,
        };
        let placeholder = match field {
            FormField::Title => "Netflix",
            FormField::Url => "https://...",
            FormField::Icon => "Emoji (🍿)",
        };

        let marker = if active { "▌ " } else { "  " };
        let label_style = if active {
            Style::default()
                .fg(theme::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::TEXT_MUTED)
        };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(palette.accent)),
            Span::styled(format!("{:<6}", field.label()), label_style),
        ];
        if value.is_empty() && !active {
            spans.push(Span::styled(
                placeholder,
                Style::default().fg(theme::TEXT_MUTED),
            ));
        } else {
            spans.push(Span::styled(
                value.clone(),
                Style::default().fg(theme::TEXT_PRIMARY),
            ));
            if active {
                spans.push(Span::styled("█", Style::default().fg(palette.accent)));
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            format!("  {error}"),
            Style::default().fg(theme::ACCENT_ERROR),
        )));
    }

    let hint = if form.editing_id.is_some() {
        "  Enter save · Tab next field · Ctrl+D remove · Esc cancel"
    } else {
        "  Enter save · Tab next field · Esc cancel"
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(theme::TEXT_MUTED),
    )));

    f.render_widget(Paragraph::new(lines), inner);
}
