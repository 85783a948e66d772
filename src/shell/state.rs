//! Tab and modal state for the UI shell.

use super::cards::CardId;

/// Top-level tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Color-class overview cards.
    #[default]
    Species,
    /// Per-species cards.
    Organisms,
    /// Telemetry readings.
    Sensors,
    /// Environment controls and simulation stats.
    Simulation,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 4] = [Tab::Species, Tab::Organisms, Tab::Sensors, Tab::Simulation];

    /// Tab caption.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Species => "Species",
            Tab::Organisms => "Organisms",
            Tab::Sensors => "Sensors",
            Tab::Simulation => "Simulation",
        }
    }
}

/// Selected tab and the card shown in the modal, if any.
///
/// At most one modal is visible: opening a card replaces the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellState {
    tab: Tab,
    modal: Option<CardId>,
}

impl ShellState {
    /// Creates the initial state: Species tab, no modal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected tab.
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Card currently shown in the modal.
    pub fn modal(&self) -> Option<CardId> {
        self.modal
    }

    /// Switches tab and closes any open modal.
    pub fn select_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            self.tab = tab;
            self.modal = None;
        }
    }

    /// Shows `card` in the modal, replacing whatever was open.
    pub fn open(&mut self, card: CardId) {
        self.modal = Some(card);
    }

    /// Closes the modal.
    pub fn close(&mut self) {
        self.modal = None;
    }
}
