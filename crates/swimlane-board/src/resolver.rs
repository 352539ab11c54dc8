//! Drop-target resolution.
//!
//! Turns "what is the dragged card over right now" into a clamped insertion
//! point. Indices in a [`Placement`] always address the destination list
//! *after* the dragged card has been taken out of its source list.

use serde::{Deserialize, Serialize};

use crate::ordering::BoardIndex;
use crate::{CardId, ColumnId};

/// Where the dragged card was when the gesture started.
///
/// Captured once at start and never recomputed mid-drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragOrigin {
    pub card_id: CardId,
    pub column_id: ColumnId,
    /// Index in the source column before any removal.
    pub index: usize,
}

impl DragOrigin {
    pub fn capture(index: &BoardIndex, card_id: CardId) -> Option<Self> {
        let (column_id, position) = index.locate(card_id)?;
        Some(Self {
            card_id,
            column_id,
            index: position,
        })
    }
}

/// What the interaction surface reports under the dragged card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OverTarget {
    /// Hovering a sibling card at `index` in `column_id`.
    Card {
        card_id: CardId,
        column_id: ColumnId,
        index: usize,
    },
    /// Hovering the column container itself rather than one of its cards.
    ColumnTail { column_id: ColumnId },
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub card_id: CardId,
    pub from_column_id: ColumnId,
    pub to_column_id: ColumnId,
    pub to_index: usize,
}

impl Placement {
    pub fn is_same_column(&self) -> bool {
        self.from_column_id == self.to_column_id
    }
}

/// Highest meaningful insertion index in a destination list of `len` cards.
///
/// A same-column list still contains the dragged card, so it loses one slot.
pub fn max_insert_index(same_column: bool, len: usize) -> usize {
    if same_column {
        len.saturating_sub(1)
    } else {
        len
    }
}

/// Pins `index` into `0..=max_index`.
pub fn clamp_index(index: usize, max_index: usize) -> usize {
    index.min(max_index)
}

/// Resolve the placement for `origin` hovering `over`.
///
/// Returns `None` when nothing is under the card or the destination column
/// is not on the board; callers treat that as "clear the preview".
pub fn resolve_drop_target(
    index: &BoardIndex,
    origin: &DragOrigin,
    over: &OverTarget,
) -> Option<Placement> {
    let (to_column_id, base_index) = match *over {
        OverTarget::Card {
            column_id,
            index: over_index,
            ..
        } => {
            let mut to_index = over_index;
            if column_id == origin.column_id && to_index > origin.index {
                // the active card leaves this list first
                to_index -= 1;
            }
            (column_id, to_index)
        }
        OverTarget::ColumnTail { column_id } => {
            let len = index.column_len(column_id);
            let to_index = if column_id == origin.column_id {
                len.saturating_sub(1)
            } else {
                len
            };
            (column_id, to_index)
        }
        OverTarget::None => return None,
    };

    if !index.has_column(to_column_id) {
        tracing::debug!("Drop target column {} is not on the board", to_column_id);
        return None;
    }

    let same_column = to_column_id == origin.column_id;
    let max_index = max_insert_index(same_column, index.column_len(to_column_id));

    Some(Placement {
        card_id: origin.card_id,
        from_column_id: origin.column_id,
        to_column_id,
        to_index: clamp_index(base_index, max_index),
    })
}
