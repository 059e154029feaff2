//! Render-data contract between the game and whatever draws it.

use super::{Board, Status};
use serde::{Deserialize, Serialize};

/// Chronological order of the move list. Purely a view concern.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Caption for the toggle control: names the order it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort Descending",
            Self::Descending => "Sort Ascending",
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub index: usize,
    /// "Go to game start" or "Go to move #N (row, col)".
    pub description: String,
    /// Whether this entry is the displayed move.
    pub is_current: bool,
}

impl MoveEntry {
    /// Text to show: the current entry reads as a position marker instead of a link.
    pub fn label(&self) -> String {
        if self.is_current {
            format!("You are at move #{}", self.index)
        } else {
            self.description.clone()
        }
    }
}

/// Everything a view needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderData {
    /// Board at the current move.
    pub board: Board,
    /// Status line.
    pub status: Status,
    /// Squares to highlight, when a line is complete.
    pub winning_line: Option<[usize; 3]>,
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
    /// Order `moves` is listed in.
    pub sort_order: SortOrder,
}

impl RenderData {
    /// True if `index` is part of the winning line.
    pub fn is_winning_square(&self, index: usize) -> bool {
        self.winning_line
            .is_some_and(|line| line.contains(&index))
    }

    /// Plain-text rendering: status, board, then the move list.
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n\n{}\n\n", self.status, self.board.display());
        for entry in &self.moves {
            out.push_str(&format!("{}. {}\n", entry.index, entry.label()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_sort_order_toggle_and_names() {
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle(), SortOrder::Ascending);
        assert_eq!(SortOrder::Ascending.toggle_label(), "Sort Descending");
        assert_eq!(SortOrder::from_str("descending"), Ok(SortOrder::Descending));
        assert_eq!(SortOrder::Ascending.to_string(), "ascending");
    }

    #[test]
    fn test_current_entry_label() {
        let entry = MoveEntry {
            index: 3,
            description: "Go to move #3 (1, 1)".to_string(),
            is_current: true,
        };
        assert_eq!(entry.label(), "You are at move #3");
        let entry = MoveEntry {
            is_current: false,
            ..entry
        };
        assert_eq!(entry.label(), "Go to move #3 (1, 1)");
    }
}
