use cogito_types::LoadStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::app::{App, InputMode};

pub(crate) fn draw(f: &mut Frame, app: &App) {
    match app.session.status() {
        LoadStatus::Ready => draw_browser(f, app),
        LoadStatus::Failed(message) => draw_failure(f, app, message),
        LoadStatus::Idle | LoadStatus::Loading => draw_loading(f, app),
    }
}

fn draw_browser(f: &mut Frame, app: &App) {
    let Some(browser) = app.session.browser() else {
        return;
    };
    let palette = app.theme.palette();
    let labels = app.locale.labels();

    let featured_height = if browser.selection().is_some() { 4 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(featured_height),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.area());

    // Header: title, subtitle, stats.
    let stats = app.locale.stats(
        browser.visible_len(),
        browser.filtered_len(),
        browser.collection_len(),
    );
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            labels.title,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(labels.subtitle, Style::default().fg(palette.muted))),
        Line::from(Span::styled(stats, Style::default().fg(palette.muted))),
    ]);
    f.render_widget(header, chunks[0]);

    draw_controls(f, chunks[1], app, browser);

    if let Some(selected) = browser.selection() {
        let featured = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("\"{}\"", selected.text),
                Style::default().fg(palette.text),
            )),
            Line::from(Span::styled(
                format!("— {}", selected.author),
                Style::default().fg(palette.muted),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent))
                .title(format!(" {} ", labels.featured)),
        );
        f.render_widget(featured, chunks[2]);
    }

    if browser.filtered_len() == 0 {
        let empty = Paragraph::new(labels.no_results)
            .style(Style::default().fg(palette.muted))
            .alignment(Alignment::Center);
        f.render_widget(empty, chunks[3]);
    } else {
        draw_cards(f, chunks[3], app, browser, &palette);
    }

    // Footer: extension status plus key hints.
    let status_line = if browser.is_extending() {
        Line::from(Span::styled(
            labels.loading_more,
            Style::default().fg(palette.accent),
        ))
    } else if !browser.has_more() && browser.filtered_len() > 0 {
        Line::from(Span::styled(
            labels.end_of_list,
            Style::default().fg(palette.muted),
        ))
    } else {
        Line::from("")
    };
    let footer = Paragraph::new(vec![
        status_line,
        Line::from(Span::styled(labels.help, Style::default().fg(palette.muted))),
    ])
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(palette.border)),
    );
    f.render_widget(footer, chunks[4]);
}

fn draw_controls(f: &mut Frame, area: Rect, app: &App, browser: &cogito_engine::Browser) {
    let palette = app.theme.palette();
    let labels = app.locale.labels();

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .split(area);

    let search_style = if app.input_mode == InputMode::Search {
        Style::default().fg(palette.highlight)
    } else {
        Style::default().fg(palette.border)
    };
    let input = browser.search_input();
    let search_text = if input.is_empty() && app.input_mode == InputMode::Browse {
        Span::styled(labels.search_hint, Style::default().fg(palette.muted))
    } else if app.input_mode == InputMode::Search {
        Span::styled(format!("{}█", input), Style::default().fg(palette.text))
    } else {
        Span::styled(input.to_owned(), Style::default().fg(palette.text))
    };
    let search = Paragraph::new(Line::from(search_text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(search_style)
            .title(format!(" {} ", labels.search_title)),
    );
    f.render_widget(search, halves[0]);

    let category_name = match &browser.criteria().category {
        cogito_types::CategoryFilter::All => labels.all_categories.to_owned(),
        cogito_types::CategoryFilter::Named(name) => name.clone(),
    };
    let category = Paragraph::new(Span::styled(
        category_name,
        Style::default().fg(palette.text),
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(format!(" {} ", labels.category_title)),
    );
    f.render_widget(category, halves[1]);
}

fn draw_cards(
    f: &mut Frame,
    area: Rect,
    app: &App,
    browser: &cogito_engine::Browser,
    palette: &super::theme::Palette,
) {
    let items: Vec<ListItem> = browser
        .visible()
        .map(|thought| {
            let marker = if browser.is_selected(&thought.id) {
                "★ "
            } else {
                ""
            };
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!("{}\"{}\"", marker, thought.text),
                    Style::default().fg(palette.text),
                )),
                Line::from(Span::styled(
                    format!("    — {}  [{}]", thought.author, thought.category),
                    Style::default().fg(palette.muted),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::NONE)
                .border_style(Style::default().fg(palette.border)),
        )
        .highlight_style(
            Style::default()
                .fg(palette.highlight)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(Some(app.cursor));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_failure(f: &mut Frame, app: &App, message: &str) {
    let palette = app.theme.palette();
    let labels = app.locale.labels();

    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            labels.load_failed,
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            message.to_owned(),
            Style::default().fg(palette.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            labels.retry_hint,
            Style::default().fg(palette.muted),
        )),
    ])
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(
        Style::default().fg(palette.error),
    ));

    f.render_widget(body, centered(f.area(), 60, 9));
}

fn draw_loading(f: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let loading = Paragraph::new(app.locale.labels().loading)
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center);
    f.render_widget(loading, centered(f.area(), 40, 1));
}

/// Rect of at most `width` x `height`, centered in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
