mod info;
mod quiz;
mod welcome;

use std::time::Instant;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::Screen;

pub use quiz::option_at;

pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen {
        Screen::Menu => welcome::render(frame, area, app),
        Screen::Game => {
            quiz::render(frame, area, app, now);
            if app.is_info_open() {
                info::render(frame, area, app);
            }
        }
    }
}
