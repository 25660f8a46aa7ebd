use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::data::DataStore;
use crate::models::Category;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let store = app.store();
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Fill(1),
    ])
    .split(area);
    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(48),
        Constraint::Fill(1),
    ])
    .areas(chunks[1]);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUI A DIT ÇA ?",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Trouvez l'auteur en 15 secondes".fg(Color::DarkGray)),
        Line::from(""),
    ];
    content.extend(Category::ALL.iter().map(|&category| status_line(store, category)));
    content.push(Line::from(""));

    let start_hint = if Category::ALL.iter().all(|&c| store.is_loaded(c)) && store.is_empty() {
        Span::styled("Aucune citation trouvée", Style::default().fg(Color::Red).bold())
    } else {
        Span::styled("ENTRÉE", Style::default().fg(Color::Green).bold())
    };
    content.push(Line::from(start_hint));
    content.push(Line::from("pour jouer  ·  q pour quitter".fg(Color::DarkGray)));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, column);
}

fn status_line(store: &DataStore, category: Category) -> Line<'static> {
    let (status, color) = category_status(store, category);
    Line::from(vec![
        Span::raw(format!("{:<12}", category_label(category))),
        Span::styled(status, Style::default().fg(color)),
    ])
}

fn category_label(category: Category) -> &'static str {
    match category {
        Category::Politics => "Politique",
        Category::PopCulture => "Pop culture",
    }
}

/// Loading progress for one category, as shown on the menu.
fn category_status(store: &DataStore, category: Category) -> (String, Color) {
    if !store.is_loaded(category) {
        return ("chargement…".to_string(), Color::Yellow);
    }

    match store.quotes(category).len() {
        0 => ("aucune citation".to_string(), Color::Red),
        1 => ("1 citation".to_string(), Color::Green),
        n => (format!("{} citations", n), Color::Green),
    }
}
