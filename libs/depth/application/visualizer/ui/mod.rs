//! UI widgets for the visualizer

pub mod panel;
pub mod table;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::infrastructure::feed::FeedStatus;

use super::App;

/// Draw the main UI layout
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    panel::draw(frame, app, chunks[1]);
    draw_footer(frame, app, chunks[2]);
}

fn status_color(status: &FeedStatus) -> Color {
    match status {
        FeedStatus::Connecting => Color::Yellow,
        FeedStatus::Ready => Color::Green,
        FeedStatus::Error(_) => Color::Red,
        FeedStatus::Closed => Color::DarkGray,
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let status = app.feed.status();
    let last_update = app
        .feed
        .last_message_at()
        .map(|t| t.format("%H:%M:%S%.3f").to_string())
        .unwrap_or_else(|| "-".to_string());

    let header_text = format!(
        " Status: {} | Rows: {} | Decode errors: {} | Last update: {}",
        status,
        app.ladder.rows().len(),
        app.feed.decode_errors(),
        last_update
    );

    let header = Paragraph::new(header_text)
        .style(Style::default().fg(status_color(status)))
        .block(Block::default().borders(Borders::ALL).title(" Market Depth "));

    frame.render_widget(header, area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let keys = format!(
        "q=quit t=view {} r=reconnect j/k=scroll",
        app.panel.button_label()
    );

    let footer_text = match app.status_message.as_deref() {
        Some(status) if !status.is_empty() => format!(" {} | {}", keys, status),
        _ => format!(" {}", keys),
    };

    let footer = Paragraph::new(footer_text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}
