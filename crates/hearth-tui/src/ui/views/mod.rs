mod bang_help;
mod home;
mod settings;
mod shortcut_form;

pub use bang_help::render_bang_help;
pub use home::render_home;
pub use settings::render_settings;
pub use shortcut_form::render_shortcut_form;

use ratatui::layout::Rect;

/// A fixed-size rect centered in `area`, clamped to fit.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
