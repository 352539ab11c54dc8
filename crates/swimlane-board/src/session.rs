//! Drag session state machine.
//!
//! A [`DragSession`] drives the resolver through one gesture at a time:
//! `start` captures where the card came from, `over` keeps a preview
//! placement current, and `end` commits at most one move intent. The board
//! index passed to each call must describe the same snapshot for the whole
//! gesture; rebuilding it mid-drag is a caller error.

use serde::{Deserialize, Serialize};
use swimlane_core::AppConfig;

use crate::intent::{IntentSink, MoveCardIntent, ReorderColumnsIntent};
use crate::ordering::{sorted_columns, BoardIndex};
use crate::resolver::{clamp_index, max_insert_index, resolve_drop_target, DragOrigin, OverTarget};
use crate::{BoardState, Card, CardId, ColumnId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Ignore new gestures entirely.
    pub disabled: bool,
}

impl From<&AppConfig> for SessionConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            disabled: config.disabled,
        }
    }
}

/// Where the dragged card would land if dropped now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    pub column_id: ColumnId,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    Dragging {
        origin: DragOrigin,
        preview: Option<Preview>,
    },
}

/// Outcome of an `over` update, so renderers can skip redundant frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewChange {
    Unchanged,
    Updated(Preview),
    Cleared,
}

#[derive(Debug, Clone, Default)]
pub struct DragSession {
    state: SessionState,
    config: SessionConfig,
}

impl DragSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            state: SessionState::Idle,
            config,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SessionState::Dragging { .. })
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Takes effect from the next `start`; a gesture in flight finishes normally.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    pub fn origin(&self) -> Option<&DragOrigin> {
        match &self.state {
            SessionState::Dragging { origin, .. } => Some(origin),
            SessionState::Idle => None,
        }
    }

    pub fn active_card_id(&self) -> Option<CardId> {
        self.origin().map(|o| o.card_id)
    }

    /// The dragged card itself, for drawing a drag overlay.
    pub fn active_card<'a>(&self, index: &'a BoardIndex) -> Option<&'a Card> {
        self.active_card_id().and_then(|id| index.card(id))
    }

    pub fn preview(&self) -> Option<Preview> {
        match self.state {
            SessionState::Dragging { preview, .. } => preview,
            SessionState::Idle => None,
        }
    }

    /// Begin a gesture. Returns `false` if the session ignored the call.
    pub fn start(&mut self, index: &BoardIndex, card_id: CardId) -> bool {
        if self.config.disabled {
            tracing::debug!("Drag start for card {} ignored: session disabled", card_id);
            return false;
        }
        if self.is_dragging() {
            tracing::debug!("Drag start for card {} ignored: already dragging", card_id);
            return false;
        }
        let Some(origin) = DragOrigin::capture(index, card_id) else {
            tracing::debug!("Drag start for unknown card {}", card_id);
            return false;
        };

        self.state = SessionState::Dragging {
            origin,
            preview: None,
        };
        true
    }

    pub fn over(&mut self, index: &BoardIndex, target: &OverTarget) -> PreviewChange {
        let SessionState::Dragging { origin, preview } = &mut self.state else {
            tracing::debug!("Drag over ignored: no gesture in progress");
            return PreviewChange::Unchanged;
        };

        let Some(placement) = resolve_drop_target(index, origin, target) else {
            return match preview.take() {
                Some(_) => PreviewChange::Cleared,
                None => PreviewChange::Unchanged,
            };
        };

        let max_index = max_insert_index(
            placement.is_same_column(),
            index.column_len(placement.to_column_id),
        );
        let next = Preview {
            column_id: placement.to_column_id,
            index: clamp_index(placement.to_index, max_index),
        };

        if *preview == Some(next) {
            PreviewChange::Unchanged
        } else {
            *preview = Some(next);
            PreviewChange::Updated(next)
        }
    }

    /// Finish the gesture and commit at most one move.
    ///
    /// Transient state is cleared before anything else, so the session is
    /// `Idle` afterwards no matter what the drop resolves to.
    pub fn end(
        &mut self,
        index: &BoardIndex,
        target: &OverTarget,
        sink: &mut impl IntentSink,
    ) -> Option<MoveCardIntent> {
        let origin = match std::mem::take(&mut self.state) {
            SessionState::Dragging { origin, .. } => origin,
            SessionState::Idle => {
                tracing::debug!("Drag end ignored: no gesture in progress");
                return None;
            }
        };

        if matches!(*target, OverTarget::Card { card_id, .. } if card_id == origin.card_id) {
            tracing::debug!("Card {} dropped onto itself", origin.card_id);
            return None;
        }
        let placement = resolve_drop_target(index, &origin, target)?;

        // Commit indices sit one below the resolver's insert-before slot.
        // Kept as-is; see the commit index regression tests.
        let to_index = placement.to_index.saturating_sub(1);

        let Some(card) = index.card(placement.card_id) else {
            tracing::debug!("Dropped card {} is no longer on the board", placement.card_id);
            return None;
        };
        if card.column_id == placement.to_column_id
            && index.locate(card.id).map(|(_, i)| i) == Some(to_index)
        {
            tracing::debug!("Card {} dropped where it already is", card.id);
            return None;
        }

        let intent = MoveCardIntent {
            card_id: placement.card_id,
            from_column_id: placement.from_column_id,
            to_column_id: placement.to_column_id,
            to_index,
        };
        tracing::info!(
            "Moving card {} to column {} at index {}",
            intent.card_id,
            intent.to_column_id,
            intent.to_index
        );
        sink.on_move_card(&intent);
        Some(intent)
    }

    /// Abort the gesture without committing anything.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            tracing::debug!("Drag cancelled");
        }
        self.state = SessionState::Idle;
    }
}

/// Result of a committed column reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnReorder {
    pub intent: ReorderColumnsIntent,
    /// Every column with its new dense position, in the new order.
    pub positions: Vec<(ColumnId, i32)>,
}

/// Move `column_id` to `to_index` in column order.
///
/// `to_index` is clamped to the last slot. Emits nothing and returns `None`
/// for an unknown column or when the column would stay where it is.
pub fn reorder_columns(
    board: &BoardState,
    column_id: ColumnId,
    to_index: usize,
    sink: &mut impl IntentSink,
) -> Option<ColumnReorder> {
    let mut order = sorted_columns(&board.columns);
    let Some(from_index) = order.iter().position(|c| c.id == column_id) else {
        tracing::debug!("Reorder of unknown column {}", column_id);
        return None;
    };

    let moved = order.remove(from_index);
    let to_index = to_index.min(order.len());
    if to_index == from_index {
        return None;
    }
    order.insert(to_index, moved);

    let intent = ReorderColumnsIntent {
        column_id,
        to_index,
    };
    tracing::info!("Moving column {} from {} to {}", column_id, from_index, to_index);
    sink.on_reorder_columns(&intent);

    Some(ColumnReorder {
        intent,
        positions: order
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id, i as i32))
            .collect(),
    })
}
