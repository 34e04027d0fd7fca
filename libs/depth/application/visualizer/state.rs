//! State management for the visualizer

/// Which view the main panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelMode {
    /// Placeholder text until the user asks for the table
    #[default]
    Instructions,
    Table,
}

impl PanelMode {
    pub fn toggle(self) -> Self {
        match self {
            PanelMode::Instructions => PanelMode::Table,
            PanelMode::Table => PanelMode::Instructions,
        }
    }

    /// Name of the view the toggle switches to
    pub fn button_label(&self) -> &'static str {
        match self {
            PanelMode::Instructions => "design",
            PanelMode::Table => "instructions",
        }
    }

    pub fn shows_table(&self) -> bool {
        matches!(self, PanelMode::Table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mode = PanelMode::default();
        assert_eq!(mode, PanelMode::Instructions);
        assert_eq!(mode.button_label(), "design");

        let mode = mode.toggle();
        assert!(mode.shows_table());
        assert_eq!(mode.button_label(), "instructions");
        assert_eq!(mode.toggle(), PanelMode::Instructions);
    }
}
