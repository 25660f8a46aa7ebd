use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(details) = app.quote_details() else {
        return;
    };

    let popup = centered(area, 70, 60);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("« {} »", details.quote),
            Style::default().fg(Color::White).italic(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("— {}", details.author),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        field("Date", &details.date),
        field("Contexte", &details.context),
    ];
    if let Some(link) = &details.link {
        lines.push(field("Source", link));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Cyan)
            .title(" Détails ")
            .title_bottom(Line::from(" une touche pour fermer ").right_aligned())
            .padding(Padding::uniform(1)),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}

fn field<'a>(name: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{} : ", name), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::Gray)),
    ])
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Fill(1),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Fill(1),
    ])
    .split(vertical[1])[1]
}
