mod layout;
mod menu;
mod overlay;
mod table;

use crate::tui::app::{AppState, Scene};
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Menu => menu::draw_menu(f, app),
        Scene::Table => table::draw_table(f, app),
    }

    // At most one overlay at a time; name entry wins since it captures input.
    if app.name_entry_active() {
        overlay::draw_name_entry(f, app);
    } else if app.help_open() {
        overlay::draw_help(f);
    } else if app.history_open() {
        overlay::draw_history(f, app);
    }
}
