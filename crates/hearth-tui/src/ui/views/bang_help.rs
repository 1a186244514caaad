//! Popover listing every engine that has a bang alias.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::views::centered_rect;
use crate::ui::{theme, App};

pub fn render_bang_help(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme();
    let engines: Vec<_> = app
        .store
        .state()
        .search_engines
        .iter()
        .filter(|e| e.bang.is_some())
        .cloned()
        .collect();

    let popup = centered_rect(area, 36, (engines.len() + 4) as u16);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Available Bangs ")
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
    for engine in &engines {
        let bang = engine.bang.as_deref().unwrap_or_default();
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<14}", engine.label),
                Style::default().fg(theme::TEXT_PRIMARY),
            ),
            Span::styled(format!("!{bang}"), Style::default().fg(palette.accent)),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " any key closes",
        Style::default().fg(theme::TEXT_MUTED),
    )));

    f.render_widget(Paragraph::new(lines), inner);
}
