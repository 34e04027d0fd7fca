//! Main panel: instructions placeholder or the ladder table

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::table;
use crate::application::visualizer::{App, PanelMode};

pub const INSTRUCTIONS_TEXT: &str = "Market data will be displayed here";

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    match app.panel {
        PanelMode::Instructions => draw_instructions(frame, area),
        PanelMode::Table => table::draw(frame, app, area),
    }
}

fn draw_instructions(frame: &mut Frame, area: Rect) {
    let placeholder = Paragraph::new(INSTRUCTIONS_TEXT)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title(" Market Data "));

    frame.render_widget(placeholder, area);
}
