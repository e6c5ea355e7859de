//! Render functions for the dashboard.
//!
//! Pure functions of the current [`AppState`]: nothing here mutates the
//! store, and the counters are recomputed from the snapshot on every frame.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::app::{AppState, Mode};

const COLOR_TEXT: Color = Color::Rgb(234, 236, 239);
const COLOR_MUTED: Color = Color::Rgb(160, 165, 172);
const COLOR_MUTED_DARK: Color = Color::Rgb(118, 124, 130);
const COLOR_BG_SELECTED: Color = Color::Rgb(52, 56, 60);
const COLOR_INFO: Color = Color::Rgb(116, 198, 219);
const COLOR_ERROR: Color = Color::Rgb(255, 107, 107);
const COLOR_SUCCESS: Color = Color::Rgb(126, 210, 146);
const COLOR_ACCENT: Color = Color::Rgb(122, 170, 255);
const COLOR_BORDER: Color = Color::Rgb(92, 126, 166);

pub fn render(frame: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(frame.size());

    render_header(frame, chunks[0]);
    render_stats(frame, app, chunks[1]);
    render_input(frame, app, chunks[2]);
    render_list(frame, app, chunks[3]);
    render_footer(frame, app, chunks[4]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Task Dashboard",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "a tiny persistent task list",
            Style::default().fg(COLOR_MUTED),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_stats(frame: &mut Frame, app: &AppState, area: Rect) {
    let stats = app.stats();
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ]
            .as_ref(),
        )
        .split(area);

    render_card(frame, cards[0], "Open", stats.open.to_string(), COLOR_INFO);
    render_card(
        frame,
        cards[1],
        "Completed",
        stats.completed.to_string(),
        COLOR_SUCCESS,
    );
    render_card(
        frame,
        cards[2],
        "Done",
        format!("{}%", stats.completion_rate),
        COLOR_ACCENT,
    );
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let widget = Paragraph::new(Line::from(Span::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER))
            .title(Span::styled(title, Style::default().fg(COLOR_MUTED))),
    );
    frame.render_widget(widget, area);
}

fn render_input(frame: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.mode == Mode::Input;
    let border_color = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    let content = if app.input.is_empty() && !focused {
        Span::styled("press a to add a task", Style::default().fg(COLOR_MUTED_DARK))
    } else {
        Span::styled(app.input.as_str(), Style::default().fg(COLOR_TEXT))
    };
    let widget = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled("New task", Style::default().fg(COLOR_MUTED))),
    );
    frame.render_widget(widget, area);

    if focused {
        let cursor_x = area.x + 1 + app.input.chars().count() as u16;
        frame.set_cursor(cursor_x.min(area.right().saturating_sub(2)), area.y + 1);
    }
}

fn render_list(frame: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled("Tasks", Style::default().fg(COLOR_MUTED)));

    if app.tasks().is_empty() {
        let widget = Paragraph::new(Line::from(Span::styled(
            app.placeholder.as_str(),
            Style::default().fg(COLOR_MUTED_DARK),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(widget, area);
        return;
    }

    let visible = area.height.saturating_sub(2) as usize;
    let offset = if visible > 0 && app.selected + 1 > visible {
        app.selected + 1 - visible
    } else {
        0
    };

    let lines: Vec<Line> = app
        .tasks()
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible.max(1))
        .map(|(index, task)| {
            let marker = if task.completed { "[x] " } else { "[ ] " };
            let mut marker_style = Style::default().fg(if task.completed {
                COLOR_SUCCESS
            } else {
                COLOR_MUTED
            });
            let mut text_style = if task.completed {
                Style::default()
                    .fg(COLOR_MUTED_DARK)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(COLOR_TEXT)
            };
            if index == app.selected && app.mode == Mode::List {
                marker_style = marker_style.bg(COLOR_BG_SELECTED);
                text_style = text_style.bg(COLOR_BG_SELECTED).add_modifier(Modifier::BOLD);
            }
            Line::from(vec![
                Span::styled(marker, marker_style),
                Span::styled(task.text.clone(), text_style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_footer(frame: &mut Frame, app: &AppState, area: Rect) {
    let hint = match app.mode {
        Mode::List => "a add   space toggle   d delete   j/k move   q quit",
        Mode::Input => "enter add   esc back",
    };
    let mut lines = vec![Line::from(Span::styled(
        hint,
        Style::default().fg(COLOR_INFO),
    ))];
    if let Some(warning) = app.save_warning() {
        lines.push(Line::from(Span::styled(
            warning.to_string(),
            Style::default()
                .fg(COLOR_ERROR)
                .add_modifier(Modifier::BOLD),
        )));
    }
    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(widget, area);
}
