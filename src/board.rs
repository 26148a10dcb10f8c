/// Board view model: column order, card placement and drag state.
///
/// Everything here is pure; the popup renders whatever [`Board::view`]
/// returns and never moves DOM nodes itself.

use crate::extension_data::{ExtensionRecord, status_for_enabled};
use crate::storage::{Categories, ExtensionStates};
use std::cell::RefCell;
use std::collections::HashMap;

/// Drop-zone status for a category label.
///
/// Category identity is case-sensitive but placement compares lower-cased
/// statuses, so "Work" and "work" share a drop-zone status.
pub fn drop_zone_status(category: &str) -> String {
    category.to_lowercase()
}

/// One rendered column and the cards placed in it
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnView {
    pub category: String,
    pub drop_status: String,
    pub cards: Vec<ExtensionRecord>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    columns: Vec<String>,
    extensions: Vec<ExtensionRecord>,
    placements: HashMap<String, String>,
}

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    /// Column labels in display order
    #[cfg(test)]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn extensions(&self) -> &[ExtensionRecord] {
        &self.extensions
    }

    pub fn extension(&self, extension_id: &str) -> Option<&ExtensionRecord> {
        self.extensions.iter().find(|e| e.id == extension_id)
    }

    pub fn has_column(&self, category: &str) -> bool {
        self.columns.iter().any(|c| c == category)
    }

    /// Append a column. Returns false (and warns) if it already exists.
    pub fn add_column(&mut self, category: &str) -> bool {
        if self.has_column(category) {
            log::warn!("Column \"{}\" already exists.", category);
            return false;
        }
        self.columns.push(category.to_string());
        true
    }

    pub fn remove_column(&mut self, category: &str) -> bool {
        let original_len = self.columns.len();
        self.columns.retain(|c| c != category);
        self.columns.len() < original_len
    }

    /// Make the columns match the persisted categories.
    ///
    /// Existing columns keep their current (user-dragged) order, columns for
    /// removed categories are dropped and new categories are appended.
    pub fn sync_columns(&mut self, categories: &Categories) {
        self.columns.retain(|c| categories.contains(c));
        for category in categories.iter() {
            if self.has_column(category) {
                log::warn!("Column \"{}\" already exists.", category);
                continue;
            }
            self.columns.push(category.clone());
        }
    }

    /// Swap the positions of two columns
    pub fn swap_columns(&mut self, dragged: &str, target: &str) -> bool {
        if dragged == target {
            return false;
        }
        let from = self.columns.iter().position(|c| c == dragged);
        let to = self.columns.iter().position(|c| c == target);
        match (from, to) {
            (Some(from), Some(to)) => {
                self.columns.swap(from, to);
                true
            }
            _ => false,
        }
    }

    /// Replace the card set. The host extension is never placed on the board.
    pub fn set_extensions(
        &mut self,
        extensions: Vec<ExtensionRecord>,
        states: &ExtensionStates,
        self_id: &str,
    ) {
        self.extensions = extensions
            .into_iter()
            .filter(|ext| ext.id != self_id)
            .collect();

        self.placements = self
            .extensions
            .iter()
            .map(|ext| (ext.id.clone(), resolve_status(ext, states)))
            .collect();

        for ext in &self.extensions {
            if self.card_column(&ext.id).is_none() {
                log::warn!(
                    "Column with status \"{}\" not found for extension {}",
                    self.placements[&ext.id],
                    ext.name
                );
            }
        }
    }

    /// Current status of a card, if the extension is on the board
    pub fn status_of(&self, extension_id: &str) -> Option<&str> {
        self.placements.get(extension_id).map(String::as_str)
    }

    /// First column whose drop-zone matches the status (case-insensitive)
    pub fn column_for_status(&self, status: &str) -> Option<&str> {
        let wanted = status.to_lowercase();
        self.columns
            .iter()
            .find(|c| drop_zone_status(c) == wanted)
            .map(String::as_str)
    }

    /// Column the card is rendered in, `None` when it is orphaned
    pub fn card_column(&self, extension_id: &str) -> Option<&str> {
        self.status_of(extension_id)
            .and_then(|status| self.column_for_status(status))
    }

    /// Re-place a card. Unknown extension ids are ignored.
    pub fn move_card(&mut self, extension_id: &str, status: &str) -> bool {
        match self.placements.get_mut(extension_id) {
            Some(placement) => {
                *placement = status.to_string();
                true
            }
            None => false,
        }
    }

    /// Record a new enabled flag and move the card to the matching
    /// "enabled"/"disabled" status. The card is hidden if no column has it.
    pub fn set_enabled(&mut self, extension_id: &str, enabled: bool) -> bool {
        match self.extensions.iter_mut().find(|e| e.id == extension_id) {
            Some(ext) => {
                ext.enabled = enabled;
                self.placements
                    .insert(extension_id.to_string(), status_for_enabled(enabled).to_string());
                true
            }
            None => false,
        }
    }

    /// Columns in display order with their cards
    pub fn view(&self) -> Vec<ColumnView> {
        let mut views: Vec<ColumnView> = self
            .columns
            .iter()
            .map(|category| ColumnView {
                category: category.clone(),
                drop_status: drop_zone_status(category),
                cards: Vec::new(),
            })
            .collect();

        for ext in &self.extensions {
            if let Some(column) = self.card_column(&ext.id) {
                if let Some(view) = views.iter_mut().find(|v| v.category == column) {
                    view.cards.push(ext.clone());
                }
            }
        }

        views
    }

    /// Extensions whose status matches no column
    pub fn unassigned(&self) -> Vec<&ExtensionRecord> {
        self.extensions
            .iter()
            .filter(|ext| self.card_column(&ext.id).is_none())
            .collect()
    }
}

/// A single change to the board, applied to whatever board is current
#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    Columns(Categories),
    AddColumn(String),
    RemoveColumn(String),
    SwapColumns {
        dragged: String,
        target: String,
    },
    Extensions {
        extensions: Vec<ExtensionRecord>,
        states: ExtensionStates,
        self_id: String,
    },
    Moved {
        extension_id: String,
        status: String,
    },
    Toggled {
        extension_id: String,
        enabled: bool,
    },
}

impl Board {
    pub fn apply(&mut self, action: BoardAction) {
        match action {
            BoardAction::Columns(categories) => self.sync_columns(&categories),
            BoardAction::AddColumn(category) => {
                self.add_column(&category);
            }
            BoardAction::RemoveColumn(category) => {
                self.remove_column(&category);
            }
            BoardAction::SwapColumns { dragged, target } => {
                self.swap_columns(&dragged, &target);
            }
            BoardAction::Extensions {
                extensions,
                states,
                self_id,
            } => self.set_extensions(extensions, &states, &self_id),
            BoardAction::Moved {
                extension_id,
                status,
            } => {
                self.move_card(&extension_id, &status);
            }
            BoardAction::Toggled {
                extension_id,
                enabled,
            } => {
                self.set_enabled(&extension_id, enabled);
            }
        }
    }
}

/// Where the synchronizer sends board changes.
///
/// Each action lands on the latest board, so actions that finish out of
/// order never overwrite each other.
pub trait BoardSink {
    fn apply(&self, action: BoardAction);

    fn contains_extension(&self, extension_id: &str) -> bool;
}

impl BoardSink for RefCell<Board> {
    fn apply(&self, action: BoardAction) {
        self.borrow_mut().apply(action);
    }

    fn contains_extension(&self, extension_id: &str) -> bool {
        self.borrow().extension(extension_id).is_some()
    }
}

/// Stored status if present, otherwise derived from the enabled flag
pub fn resolve_status(ext: &ExtensionRecord, states: &ExtensionStates) -> String {
    states
        .get(&ext.id)
        .unwrap_or_else(|| ext.default_status())
        .to_string()
}

/// What is currently being dragged, and which drop-zone is hovered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    pub card: Option<String>,
    pub column: Option<String>,
    pub hover_zone: Option<String>,
}

impl DragState {
    pub fn start_card(&mut self, extension_id: &str) {
        self.card = Some(extension_id.to_string());
        self.column = None;
    }

    pub fn start_column(&mut self, category: &str) {
        self.column = Some(category.to_string());
        self.card = None;
    }

    /// Drag end fires whether or not a drop happened
    pub fn end(&mut self) {
        *self = DragState::default();
    }

    pub fn is_dragging_column(&self, category: &str) -> bool {
        self.column.as_deref() == Some(category)
    }
}
