mod quiz;
mod result;
mod selection;
mod settings;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::models::AppState;

/// Colors for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
    pub correct: Color,
    pub wrong: Color,
}

impl Palette {
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                highlight: Color::LightCyan,
                correct: Color::LightGreen,
                wrong: Color::LightRed,
            }
        } else {
            Self {
                background: Color::Reset,
                text: Color::Reset,
                muted: Color::DarkGray,
                accent: Color::Blue,
                highlight: Color::Cyan,
                correct: Color::Green,
                wrong: Color::Red,
            }
        }
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let palette = Palette::for_mode(app.settings().dark_mode);
    let area = frame.area();
    frame.render_widget(Block::default().bg(palette.background), area);

    match app.state {
        AppState::Selection => selection::render(frame, area, app, &palette),
        AppState::Quiz => quiz::render(frame, area, app, &palette),
        AppState::Result => result::render(frame, area, app, &palette),
        AppState::Settings => settings::render(frame, area, app, &palette),
    }
}

/// Single centered hint line at the bottom of a screen.
fn render_controls(frame: &mut Frame, area: Rect, text: &str, palette: &Palette) {
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(palette.muted);
    frame.render_widget(widget, area);
}
