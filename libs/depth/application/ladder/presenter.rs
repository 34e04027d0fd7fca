//! Pure derivation of display attributes from a row and its change

use crate::domain::{CellDisplay, ColorTier, DisplayAttributes, Row};
use crate::infrastructure::config::DisplayConfig;

use super::tracker::{RowChange, SideChange};

/// Upper bound of a bar width
const MAX_BAR_PERCENT: f64 = 100.0;

/// Presenter tunables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresenterSettings {
    /// Rows with an index below this get highlighted cues
    pub highlight_rows: usize,
    /// Multiplier applied to the clamped percent change
    pub bar_amplification: f64,
}

impl Default for PresenterSettings {
    fn default() -> Self {
        Self::from(&DisplayConfig::default())
    }
}

impl From<&DisplayConfig> for PresenterSettings {
    fn from(config: &DisplayConfig) -> Self {
        Self {
            highlight_rows: config.highlight_rows,
            bar_amplification: config.bar_amplification,
        }
    }
}

/// One rendered ladder row
#[derive(Debug, Clone, PartialEq)]
pub struct RowDisplay {
    /// 1-based position in the ladder
    pub serial: usize,
    pub symbol_level: String,
    pub level: i64,
    pub bid: CellDisplay,
    pub offer: CellDisplay,
}

/// Stateless row presenter
#[derive(Debug, Clone, Copy, Default)]
pub struct RowPresenter {
    settings: PresenterSettings,
}

impl RowPresenter {
    pub fn new(settings: PresenterSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &PresenterSettings {
        &self.settings
    }

    /// Render a row at `index` given its change against the baseline
    pub fn present(&self, row: &Row, index: usize, change: &RowChange) -> RowDisplay {
        let tier = self.color_tier(index);

        RowDisplay {
            serial: index + 1,
            symbol_level: row.symbol_level.clone(),
            level: row.level,
            bid: self.cell(row.bid, row.bid_quantity, &change.bid, tier),
            offer: self.cell(row.offer, row.offer_quantity, &change.offer, tier),
        }
    }

    fn cell(&self, price: f64, quantity: f64, change: &SideChange, tier: ColorTier) -> CellDisplay {
        CellDisplay {
            attributes: DisplayAttributes {
                direction: change.direction,
                color_tier: tier,
                bar_width_percent: self.bar_width(change.percent_change),
            },
            price_text: format_value(price),
            quantity_text: format_value(quantity),
        }
    }

    pub fn color_tier(&self, index: usize) -> ColorTier {
        if index < self.settings.highlight_rows {
            ColorTier::Highlighted
        } else {
            ColorTier::Muted
        }
    }

    /// `|pct|` clamped to 100, amplified, then capped at 100 again
    pub fn bar_width(&self, percent_change: f64) -> f64 {
        if !percent_change.is_finite() {
            return 0.0;
        }

        let magnitude = percent_change.abs().min(MAX_BAR_PERCENT);
        let width = magnitude * self.settings.bar_amplification;
        if width.is_finite() {
            width.clamp(0.0, MAX_BAR_PERCENT)
        } else {
            0.0
        }
    }
}

/// Integral values print without decimals, others in shortest round-trip form
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }

    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}
