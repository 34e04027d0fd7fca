//! Ladder table widget: BID/ASK groups with direction cues and change bars

use ratatui::{
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::application::visualizer::App;
use crate::domain::{CellDisplay, ColorTier, Direction};

const SERIAL_WIDTH: u16 = 5;
const QUANTITY_WIDTH: u16 = 20;
const PRICE_WIDTH: u16 = 14;

const BID_BAR_COLOR: Color = Color::Rgb(40, 40, 140);
const ASK_BAR_COLOR: Color = Color::Rgb(140, 40, 40);

/// Arrow colour for a side: only highlighted rows get green/red
pub fn arrow_color(direction: Direction, tier: ColorTier) -> Color {
    match (tier, direction) {
        (ColorTier::Highlighted, Direction::Up) => Color::Green,
        (ColorTier::Highlighted, Direction::Down) => Color::Red,
        _ => Color::Gray,
    }
}

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Market Data ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let bid_span = SERIAL_WIDTH + QUANTITY_WIDTH + PRICE_WIDTH + 2;
    let group = Line::from(vec![
        Span::styled(
            format!("{:<w$}", "BID", w = bid_span as usize),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:>w$}", "ASK", w = (PRICE_WIDTH + QUANTITY_WIDTH + 1) as usize),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(group), chunks[0]);

    let header = Row::new(["S/N", "Quantity", "Price", "Price", "Quantity"])
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .ladder
        .frame()
        .rows
        .iter()
        .skip(app.scroll)
        .map(|row| {
            Row::new(vec![
                Cell::from(row.serial.to_string()),
                Cell::from(bar_line(&row.bid, QUANTITY_WIDTH as usize, BID_BAR_COLOR)),
                Cell::from(price_line(&row.bid)),
                Cell::from(price_line(&row.offer)),
                Cell::from(bar_line(&row.offer, QUANTITY_WIDTH as usize, ASK_BAR_COLOR)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(SERIAL_WIDTH),
        Constraint::Length(QUANTITY_WIDTH),
        Constraint::Length(PRICE_WIDTH),
        Constraint::Length(PRICE_WIDTH),
        Constraint::Length(QUANTITY_WIDTH),
    ];

    let table = Table::new(rows, widths).header(header).column_spacing(1);
    frame.render_widget(table, chunks[1]);
}

fn price_line(cell: &CellDisplay) -> Line<'static> {
    let attributes = &cell.attributes;
    let color = arrow_color(attributes.direction, attributes.color_tier);

    Line::from(vec![
        Span::styled(
            format!("{} ", attributes.direction.glyph()),
            Style::default().fg(color),
        ),
        Span::raw(cell.price_text.clone()),
    ])
}

/// Quantity text with its leading cells tinted in proportion to the bar width
pub fn bar_line(cell: &CellDisplay, width: usize, tint: Color) -> Line<'static> {
    let padded = format!("{:<w$}", cell.quantity_text, w = width);
    let filled = bar_cells(cell.attributes.bar_width_percent, width);

    let split = padded
        .char_indices()
        .nth(filled)
        .map(|(i, _)| i)
        .unwrap_or(padded.len());
    let (bar, rest) = padded.split_at(split);

    Line::from(vec![
        Span::styled(bar.to_string(), Style::default().bg(tint)),
        Span::raw(rest.to_string()),
    ])
}

fn bar_cells(width_percent: f64, width: usize) -> usize {
    let cells = (width_percent.clamp(0.0, 100.0) / 100.0 * width as f64).round() as usize;
    cells.min(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DisplayAttributes;

    fn cell(bar_width_percent: f64) -> CellDisplay {
        CellDisplay {
            attributes: DisplayAttributes {
                direction: Direction::Up,
                color_tier: ColorTier::Highlighted,
                bar_width_percent,
            },
            price_text: "105".to_string(),
            quantity_text: "500".to_string(),
        }
    }

    #[test]
    fn test_arrow_colors() {
        assert_eq!(arrow_color(Direction::Up, ColorTier::Highlighted), Color::Green);
        assert_eq!(arrow_color(Direction::Down, ColorTier::Highlighted), Color::Red);
        assert_eq!(arrow_color(Direction::Flat, ColorTier::Highlighted), Color::Gray);
        assert_eq!(arrow_color(Direction::Up, ColorTier::Muted), Color::Gray);
        assert_eq!(arrow_color(Direction::Down, ColorTier::Muted), Color::Gray);
    }

    #[test]
    fn test_bar_line_splits_at_width() {
        let line = bar_line(&cell(50.0), 10, BID_BAR_COLOR);

        assert_eq!(line.spans[0].content, "500  ");
        assert_eq!(line.spans[0].style.bg, Some(BID_BAR_COLOR));
        assert_eq!(line.spans[1].content, "     ");
    }

    #[test]
    fn test_bar_line_empty_and_full() {
        let empty = bar_line(&cell(0.0), 10, ASK_BAR_COLOR);
        assert_eq!(empty.spans[0].content, "");

        let full = bar_line(&cell(100.0), 10, ASK_BAR_COLOR);
        assert_eq!(full.spans[0].content, "500       ");
        assert_eq!(full.spans[1].content, "");
    }
}
