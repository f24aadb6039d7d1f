use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::{render_controls, Palette};
use crate::app::App;
use crate::runner::{QuizRunner, Score};

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(runner) = app.runner() else {
        return;
    };
    let score = runner.score();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], score, palette);
    render_question_breakdown(frame, chunks[2], runner, app.result_scroll(), palette);
    render_controls(
        frame,
        chunks[3],
        "j/k scroll  ·  r restart  ·  q quit",
        palette,
    );
}

fn get_grade_color(percentage: f64, palette: &Palette) -> Color {
    match percentage as u32 {
        90..=100 => palette.correct,
        70..=89 => palette.accent,
        50..=69 => Color::Yellow,
        _ => palette.wrong,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, score: Score, palette: &Palette) {
    let percentage = score.percentage();
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ COMPLETE",
            Style::default().fg(palette.accent).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}  ({:.0}%)", score.correct, score.total, percentage),
            Style::default()
                .fg(get_grade_color(percentage, palette))
                .bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(palette.muted),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(
    frame: &mut Frame,
    area: Rect,
    runner: &QuizRunner,
    scroll: usize,
    palette: &Palette,
) {
    let lines: Vec<Line> = runner
        .answers()
        .iter()
        .zip(runner.questions())
        .enumerate()
        .map(|(index, (answer, question))| {
            let is_correct = answer.is_some_and(|a| question.is_correct(a));
            let (symbol, color) = if is_correct {
                ("+", palette.correct)
            } else {
                ("-", palette.wrong)
            };

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(palette.muted),
                ),
                Span::styled(
                    format!("[{}] ", question.version),
                    Style::default().fg(palette.accent),
                ),
                Span::styled(
                    truncate_question(&question.text),
                    Style::default().fg(palette.text),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_question() {
        assert_eq!(truncate_question("short"), "short");
        let long = "x".repeat(QUESTION_PREVIEW_LENGTH + 5);
        let truncated = truncate_question(&long);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), QUESTION_PREVIEW_LENGTH + 3);
    }

    #[test]
    fn test_grade_color() {
        let palette = Palette::for_mode(false);
        assert_eq!(get_grade_color(95.0, &palette), palette.correct);
        assert_eq!(get_grade_color(10.0, &palette), palette.wrong);
    }
}
