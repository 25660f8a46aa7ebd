use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, OptionView};
use crate::quiz::NUM_OPTIONS;
use crate::session::{LOADING_MESSAGE, OptionEmphasis, Tone, bar_color};

const OPTION_LABELS: [char; NUM_OPTIONS] = ['A', 'B', 'C', 'D'];

struct QuizLayout {
    quote: Rect,
    timer: Rect,
    options: [Rect; NUM_OPTIONS],
    controls: Rect,
}

fn create_layout(area: Rect) -> QuizLayout {
    let chunks = Layout::vertical([
        Constraint::Length(6),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let rows = Layout::vertical([Constraint::Fill(1), Constraint::Fill(1)]).split(chunks[4]);
    let top = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(rows[0]);
    let bottom = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(rows[1]);

    QuizLayout {
        quote: chunks[0],
        timer: chunks[2],
        options: [top[0], top[1], bottom[0], bottom[1]],
        controls: chunks[5],
    }
}

/// Index of the option cell under a terminal cell, if any.
pub fn option_at(area: Rect, column: u16, row: u16) -> Option<usize> {
    create_layout(area).options.iter().position(|cell| {
        column >= cell.x
            && column < cell.x + cell.width
            && row >= cell.y
            && row < cell.y + cell.height
    })
}

pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let layout = create_layout(area);
    let session = app.session();

    let Some(question) = session.question() else {
        render_quote(frame, layout.quote, LOADING_MESSAGE, Color::Yellow);
        render_controls(frame, layout.controls, "entrée réessayer  ·  esc menu  ·  q quitter");
        return;
    };

    render_quote(
        frame,
        layout.quote,
        &format!("« {} »", question.prompt_text),
        Color::White,
    );

    if let Some(fraction) = session.countdown_fraction(now) {
        render_countdown(frame, layout.timer, fraction);
    } else if let Some(message) = session.result_message(now) {
        render_result(frame, layout.timer, message.text, message.tone);
    }

    for (index, view) in app.option_views().iter().enumerate() {
        render_option(frame, layout.options[index], index, view);
    }

    let controls = if session.can_continue(now) {
        "entrée continuer  ·  i détails  ·  esc menu  ·  q quitter"
    } else {
        "1-4 répondre  ·  j/k choisir  ·  entrée valider  ·  esc menu"
    };
    render_controls(frame, layout.controls, controls);
}

fn render_quote(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).italic())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_countdown(frame: &mut Frame, area: Rect, fraction: f64) {
    let (red, green, blue) = bar_color(fraction);
    let width = (f64::from(area.width) * fraction.clamp(0.0, 1.0)).round() as usize;

    let widget = Paragraph::new("█".repeat(width)).fg(Color::Rgb(red, green, blue));
    frame.render_widget(widget, area);
}

fn render_result(frame: &mut Frame, area: Rect, text: &str, tone: Tone) {
    let color = match tone {
        Tone::Correct => Color::Green,
        Tone::Incorrect => Color::Red,
        Tone::Neutral => Color::White,
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(color)
        .bold();
    frame.render_widget(widget, area);
}

fn render_option(frame: &mut Frame, area: Rect, index: usize, view: &OptionView) {
    let (border, border_type, text) = match view.emphasis {
        OptionEmphasis::Correct => (Color::Green, BorderType::Thick, Color::Green),
        OptionEmphasis::Incorrect => (Color::Red, BorderType::Thick, Color::Red),
        // Border only: the name keeps its normal colour.
        OptionEmphasis::CorrectOutline => (Color::Green, BorderType::Thick, Color::White),
        OptionEmphasis::Faded => (Color::DarkGray, BorderType::Plain, Color::DarkGray),
        OptionEmphasis::Neutral if view.selected => (Color::Cyan, BorderType::Plain, Color::Cyan),
        OptionEmphasis::Neutral => (Color::Gray, BorderType::Plain, Color::White),
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(view.name.as_str(), Style::default().fg(text).bold())),
    ];
    if let Some(label) = view.image.label() {
        lines.push(Line::from(Span::styled(
            format!("[{}]", label),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", OPTION_LABELS[index]))
            .title_style(Style::default().fg(border)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
