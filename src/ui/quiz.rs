use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::{render_controls, Palette};
use crate::app::App;
use crate::models::OPTION_SLOTS;
use crate::runner::{Phase, QuizRunner};

const OPTION_LABELS: [char; OPTION_SLOTS] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(runner) = app.runner() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(9),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], runner, palette);
    render_question_text(frame, chunks[1], &runner.current().text, palette);
    render_options(frame, chunks[2], runner, app.selected_option(), palette);
    render_feedback(frame, chunks[3], runner, palette);

    let controls = match runner.phase() {
        Phase::AwaitingAnswer if runner.is_unanswerable() => "n skip  ·  b back  ·  q quit",
        Phase::AwaitingAnswer => "j/k navigate  ·  enter select  ·  b back  ·  q quit",
        _ if runner.is_last() => "n results  ·  b back  ·  q quit",
        _ => "n next  ·  b back  ·  q quit",
    };
    render_controls(frame, chunks[4], controls, palette);
}

fn render_progress(frame: &mut Frame, area: Rect, runner: &QuizRunner, palette: &Palette) {
    let question = runner.current();
    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let badge = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", question.version),
            Style::default().fg(palette.background).bg(palette.accent).bold(),
        ),
        Span::styled(format!("  {}", question.category), Style::default().fg(palette.muted)),
    ]));
    frame.render_widget(badge, halves[0]);

    let progress = format!(
        "{}/{}  ·  score {}",
        runner.position(),
        runner.total(),
        runner.score().correct
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(palette.muted);
    frame.render_widget(widget, halves[1]);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str, palette: &Palette) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(palette.text)
        .bold();
    frame.render_widget(widget, area);
}

fn option_style(
    runner: &QuizRunner,
    index: usize,
    cursor: usize,
    palette: &Palette,
) -> (Style, &'static str) {
    if !runner.is_option_available(index) {
        return (Style::default().fg(palette.muted).dim(), " ");
    }

    match runner.phase() {
        Phase::AnswerLocked { selected, correct } => {
            if index == runner.current().correct_index {
                (Style::default().fg(palette.correct).bold(), "+")
            } else if index == selected && !correct {
                (Style::default().fg(palette.wrong).bold(), "-")
            } else {
                (Style::default().fg(palette.muted), " ")
            }
        }
        _ if index == cursor => (Style::default().fg(palette.highlight).bold(), ">"),
        _ => (Style::default().fg(palette.text), " "),
    }
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    runner: &QuizRunner,
    cursor: usize,
    palette: &Palette,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(OPTION_SLOTS * 2);

    for (index, slot) in runner.option_slots().into_iter().enumerate() {
        let (style, marker) = option_style(runner, index, cursor, palette);
        let text = slot.unwrap_or("(unavailable)");

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(text.to_string(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, runner: &QuizRunner, palette: &Palette) {
    let Phase::AnswerLocked { correct, .. } = runner.phase() else {
        return;
    };

    let (verdict, color) = if correct {
        ("Correct!".to_string(), palette.correct)
    } else {
        let answer = runner.current().correct_option().unwrap_or("unknown");
        (format!("Wrong. The answer is: {}", answer), palette.wrong)
    };

    let content = vec![
        Line::from(Span::styled(verdict, Style::default().fg(color).bold())),
        Line::from(""),
        Line::from(Span::styled(
            runner.current().explanation.clone(),
            Style::default().fg(palette.text),
        )),
    ];

    let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(palette.muted)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
