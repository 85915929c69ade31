use crate::catalog;
use crate::tui::app::{App, View};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(10),   // Main area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    draw_search_input(f, app, chunks[0]);
    draw_main_area(f, app, chunks[1]);
    draw_status_bar(f, app, chunks[2]);
}

fn draw_search_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.query.as_str())
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search (←/→: category, Tab: samples, F1: help, Esc: quit) "),
        );

    f.render_widget(input, area);

    // Show cursor while typing filters the list
    if app.view == View::Elements {
        f.set_cursor_position((area.x + app.query.chars().count() as u16 + 1, area.y + 1));
    }
}

fn draw_main_area(f: &mut Frame, app: &App, area: Rect) {
    match app.view {
        View::Elements => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(20),     // Category sidebar
                    Constraint::Percentage(35), // Element list
                    Constraint::Min(30),        // Detail panel
                ])
                .split(area);

            draw_category_sidebar(f, app, chunks[0]);
            draw_element_list(f, app, chunks[1]);
            draw_detail(f, app, chunks[2]);
        }
        View::Samples => draw_sample(f, app, area),
        View::Help => draw_help(f, area),
    }
}

fn draw_category_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let total = catalog::entries().len();

    let mut items: Vec<ListItem> = Vec::with_capacity(catalog::categories().len() + 1);
    items.push(sidebar_item("All", total, app.category_index == 0));
    for (i, label) in catalog::categories().iter().enumerate() {
        let count = catalog::entries()
            .iter()
            .filter(|e| e.category == *label)
            .count();
        items.push(sidebar_item(label, count, app.category_index == i + 1));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Categories "),
    );

    f.render_widget(list, area);
}

fn sidebar_item(label: &str, count: usize, selected: bool) -> ListItem<'static> {
    let style = if selected {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::raw(format!("{} ", label)),
        Span::styled(format!("({})", count), Style::default().fg(Color::DarkGray)),
    ]);

    ListItem::new(line).style(style)
}

fn draw_element_list(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Elements ({}) ", app.results.len()));

    // Empty result set is a valid outcome; show a placeholder instead of
    // an empty frame
    if app.results.is_empty() {
        let message = Paragraph::new(format!("No elements match \"{}\"", app.query))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(message, area);
        return;
    }

    let items: Vec<ListItem> = app
        .results
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == app.selected {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let line = Line::from(vec![
                Span::styled(entry.tag, Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::styled(entry.category, Style::default().fg(Color::DarkGray)),
            ]);

            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));

    f.render_widget(list, area);
}

fn draw_detail(f: &mut Frame, app: &App, area: Rect) {
    let (title, content) = match app.selected_entry() {
        Some(entry) => {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled("Category: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(entry.category, Style::default().fg(Color::Magenta)),
                ]),
                Line::raw(""),
                Line::raw(entry.description),
            ];

            if let Some(example) = entry.example {
                lines.push(Line::raw(""));
                lines.push(Line::styled(
                    "Example:",
                    Style::default().fg(Color::DarkGray),
                ));
                lines.push(Line::styled(example, Style::default().fg(Color::Yellow)));
            }

            if !entry.attributes.is_empty() {
                lines.push(Line::raw(""));
                lines.push(Line::styled(
                    "Common attributes:",
                    Style::default().fg(Color::DarkGray),
                ));
                lines.push(Line::styled(
                    entry.attributes.join(", "),
                    Style::default().fg(Color::Green),
                ));
            }

            (format!(" {} ", entry.tag), Text::from(lines))
        }
        None => (" Detail ".to_string(), Text::raw("No element selected")),
    };

    let detail = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });

    f.render_widget(detail, area);
}

fn draw_sample(f: &mut Frame, app: &App, area: Rect) {
    let sample = app.sample();
    let position = app.sample_index + 1;
    let count = catalog::samples().len();

    let title = format!(" {} ({}/{}) ", sample.title, position, count);

    let mut lines = vec![
        Line::styled(sample.subtitle, Style::default().fg(Color::DarkGray)),
        Line::raw(""),
    ];
    lines.extend(sample.content.lines().map(Line::raw));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((app.sample_scroll as u16, 0));

    f.render_widget(paragraph, area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::styled("Element view", Style::default().add_modifier(Modifier::BOLD)),
        Line::raw("  type           filter by tag or description"),
        Line::raw("  Left/Right     cycle category"),
        Line::raw("  Up/Down        select element (also Ctrl+k/Ctrl+j)"),
        Line::raw("  PgUp/PgDn      move selection by ten (also Ctrl+u/Ctrl+d)"),
        Line::raw("  Home/End       first/last element (also Ctrl+a/Ctrl+e)"),
        Line::raw("  Ctrl+w         delete word from search text"),
        Line::raw("  Tab            show code samples"),
        Line::raw("  Esc            clear search text, then quit"),
        Line::raw(""),
        Line::styled("Samples view", Style::default().add_modifier(Modifier::BOLD)),
        Line::raw("  Left/Right     switch sample (also h/l)"),
        Line::raw("  Up/Down        scroll (also j/k, gg/G, Ctrl+u/Ctrl+d)"),
        Line::raw("  Esc, q, Tab    back to elements"),
        Line::raw(""),
        Line::raw("  Ctrl+C or Ctrl+Q quits from anywhere."),
        Line::raw(""),
        Line::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let help = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .wrap(Wrap { trim: false });

    f.render_widget(help, area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status = Paragraph::new(app.status_message.as_str()).style(Style::default().fg(Color::Cyan));

    f.render_widget(status, area);
}
