use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::{render_controls, Palette};
use crate::app::{App, SettingsField};
use crate::config::Settings;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "SETTINGS",
        Style::default().fg(palette.accent).bold(),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(palette.muted),
    );
    frame.render_widget(title, chunks[0]);

    let lines: Vec<Line> = SettingsField::ALL
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let is_cursor = index == app.settings_cursor();
            let style = if is_cursor {
                Style::default().fg(palette.highlight).bold()
            } else {
                Style::default().fg(palette.text)
            };
            let marker = if is_cursor { ">" } else { " " };

            Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(format!("{:<22}", field.label()), style),
                Span::styled(field_value(app.settings(), *field), style),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::uniform(1)));
    frame.render_widget(widget, chunks[1]);

    render_controls(
        frame,
        chunks[2],
        "j/k navigate  ·  enter change  ·  b save and back  ·  q quit",
        palette,
    );
}

fn on_off(value: bool) -> String {
    let label = if value { "on" } else { "off" };
    label.to_string()
}

fn field_value(settings: &Settings, field: SettingsField) -> String {
    match field {
        SettingsField::QuestionCount => settings.question_count.label(),
        SettingsField::DarkMode => on_off(settings.dark_mode),
        SettingsField::Sound => on_off(settings.sound_enabled),
        SettingsField::Vibration => on_off(settings.vibration_enabled),
    }
}
