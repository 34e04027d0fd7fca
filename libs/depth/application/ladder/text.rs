//! Plain-text ladder rendering for non-terminal sinks

use std::fmt::Write;

use crate::domain::{CellDisplay, ColorTier};

use super::pass::LadderFrame;

/// Characters available for a full-width bar
const BAR_CELLS: usize = 10;

/// Render a frame as a fixed-width table.
/// Muted cells print their glyph in parentheses, e.g. `(↑)`.
pub fn render_plain(frame: &LadderFrame) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{:<39}{:>30}", "BID", "ASK");
    let _ = writeln!(
        out,
        "{:>4}  {:<24}  {:>10}  {:>10}  {:<24}",
        "S/N", "Quantity", "Price", "Price", "Quantity"
    );

    for row in &frame.rows {
        let _ = writeln!(
            out,
            "{:>4}  {:<24}  {:>10}  {:>10}  {:<24}",
            row.serial,
            quantity_cell(&row.bid),
            price_cell(&row.bid),
            price_cell(&row.offer),
            quantity_cell(&row.offer),
        );
    }

    out
}

fn price_cell(cell: &CellDisplay) -> String {
    let glyph = cell.attributes.direction.glyph();
    match cell.attributes.color_tier {
        ColorTier::Highlighted => format!("{} {}", glyph, cell.price_text),
        ColorTier::Muted => format!("({}) {}", glyph, cell.price_text),
    }
}

fn quantity_cell(cell: &CellDisplay) -> String {
    format!("{:<w$} {}", bar(cell.attributes.bar_width_percent), cell.quantity_text, w = BAR_CELLS)
}

fn bar(width_percent: f64) -> String {
    let cells = (width_percent.clamp(0.0, 100.0) / 100.0 * BAR_CELLS as f64).round() as usize;
    "#".repeat(cells.min(BAR_CELLS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ladder::{LadderView, RowPresenter};
    use crate::domain::QuoteRecord;

    fn record(bid: f64) -> QuoteRecord {
        QuoteRecord {
            symbol_level: "AAPL-1".to_string(),
            level: 1,
            bid,
            bid_quantity: 500.0,
            offer: 101.0,
            offer_quantity: 400.0,
        }
    }

    #[test]
    fn test_header_and_rows() {
        let mut view = LadderView::new(RowPresenter::default());
        view.rows_mut().upsert(record(100.0));
        view.render_pass(|_| {});
        view.rows_mut().upsert(record(105.0));

        let mut text = String::new();
        view.render_pass(|frame| text = render_plain(frame));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("BID"));
        assert!(lines[0].trim_end().ends_with("ASK"));
        assert!(lines[1].contains("S/N"));
        assert!(lines[2].contains("↑ 105"));
        assert!(lines[2].contains("########## 500"));
        assert!(lines[2].contains("- 101"));
    }

    #[test]
    fn test_bar_cells() {
        assert_eq!(bar(0.0), "");
        assert_eq!(bar(35.0), "####");
        assert_eq!(bar(100.0), "##########");
        assert_eq!(bar(f64::NAN), "");
    }
}
