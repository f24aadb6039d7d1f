use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::{render_controls, Palette};
use crate::app::App;
use crate::selection::{SelectionFlow, SelectionStep, ALL_CATEGORIES_LABEL};

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let flow = app.selection();
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_title(frame, chunks[0], palette);
    render_step_header(frame, chunks[1], flow, palette);

    if flow.is_loading() {
        let widget = Paragraph::new("Loading questions...")
            .alignment(Alignment::Center)
            .fg(palette.muted);
        frame.render_widget(widget, chunks[2]);
    } else {
        let lines = match flow.step() {
            SelectionStep::Category => category_lines(flow, palette),
            SelectionStep::Version => version_lines(flow, palette),
        };
        let widget =
            Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(2)));
        frame.render_widget(widget, chunks[2]);
    }

    render_notice(frame, chunks[3], app, palette);

    let controls = match flow.step() {
        SelectionStep::Category => {
            "j/k navigate  ·  enter choose  ·  a all questions  ·  s settings  ·  q quit"
        }
        SelectionStep::Version => {
            "j/k navigate  ·  space toggle  ·  enter start  ·  b back  ·  a all questions  ·  q quit"
        }
    };
    render_controls(frame, chunks[4], controls, palette);
}

fn render_title(frame: &mut Frame, area: Rect, palette: &Palette) {
    let widget = Paragraph::new(Line::from(Span::styled(
        "JAVA QUIZ",
        Style::default().fg(palette.accent).bold(),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(palette.muted),
    );
    frame.render_widget(widget, area);
}

fn render_step_header(frame: &mut Frame, area: Rect, flow: &SelectionFlow, palette: &Palette) {
    let text = match flow.step() {
        SelectionStep::Category => "Choose a category".to_string(),
        SelectionStep::Version => format!(
            "Choose versions for {}",
            flow.chosen_category().unwrap_or(ALL_CATEGORIES_LABEL)
        ),
    };
    let widget = Paragraph::new(text).fg(palette.text).bold();
    frame.render_widget(widget, area);
}

fn entry_style(is_cursor: bool, palette: &Palette) -> Style {
    if is_cursor {
        Style::default().fg(palette.highlight).bold()
    } else {
        Style::default().fg(palette.text)
    }
}

fn category_lines<'a>(flow: &'a SelectionFlow, palette: &Palette) -> Vec<Line<'a>> {
    std::iter::once(ALL_CATEGORIES_LABEL)
        .chain(flow.categories().iter().map(String::as_str))
        .enumerate()
        .map(|(index, label)| {
            let is_cursor = index == flow.cursor();
            let style = entry_style(is_cursor, palette);
            let marker = if is_cursor { ">" } else { " " };
            Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(label, style),
            ])
        })
        .collect()
}

fn version_lines<'a>(flow: &'a SelectionFlow, palette: &Palette) -> Vec<Line<'a>> {
    flow.versions()
        .iter()
        .enumerate()
        .map(|(index, version)| {
            let is_cursor = index == flow.cursor();
            let style = entry_style(is_cursor, palette);
            let marker = if is_cursor { ">" } else { " " };
            let check = if flow.is_version_chosen(version) {
                "[x]"
            } else {
                "[ ]"
            };
            Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(format!("{} ", check), style),
                Span::styled(version_label(version), style),
            ])
        })
        .collect()
}

fn version_label(version: &str) -> String {
    if version.chars().all(|c| c.is_ascii_digit()) {
        format!("Java {}", version)
    } else {
        version.to_string()
    }
}

fn render_notice(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let (text, color) = match (app.selection().notice(), app.status()) {
        (Some(notice), _) => (notice, palette.wrong),
        (None, Some(status)) => (status, palette.wrong),
        (None, None) => return,
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .fg(color);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_label() {
        assert_eq!(version_label("17"), "Java 17");
        assert_eq!(version_label("Core"), "Core");
    }
}
