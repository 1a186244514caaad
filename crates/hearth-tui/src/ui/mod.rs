pub mod app;
pub mod terminal;
pub mod theme;
pub mod views;

pub use app::{App, Focus, FormField, FormState, Modal, SettingsRow, SettingsState};
pub use terminal::{init as init_terminal, restore as restore_terminal, Tui};
