//! Reference owner-side application of intents.
//!
//! The drag session never calls into this module. Owners that keep their
//! board as a [`BoardState`] can use it to turn a committed intent into the
//! next snapshot; every touched column comes out densely renumbered.

use swimlane_core::{SwimlaneError, SwimlaneResult};

use crate::intent::{Intent, MoveCardIntent, ReorderColumnsIntent};
use crate::ordering::{compact_positions, sorted_cards, sorted_columns};
use crate::{BoardState, CardId, ColumnId};

pub fn apply_intent(board: &BoardState, intent: &Intent) -> SwimlaneResult<BoardState> {
    match intent {
        Intent::MoveCard(mv) => apply_move(board, mv),
        Intent::ReorderColumns(reorder) => apply_column_reorder(board, reorder),
    }
}

/// Ids of a column's cards in position order.
fn ordered_card_ids(board: &BoardState, column_id: ColumnId) -> Vec<CardId> {
    sorted_cards(&board.cards)
        .into_iter()
        .filter(|c| c.column_id == column_id)
        .map(|c| c.id)
        .collect()
}

/// Move a card so it sits at `to_index` of its destination column.
///
/// An index past the end appends.
pub fn apply_move(board: &BoardState, intent: &MoveCardIntent) -> SwimlaneResult<BoardState> {
    let source_column = board
        .card(intent.card_id)
        .map(|c| c.column_id)
        .ok_or_else(|| SwimlaneError::card_not_found(intent.card_id))?;
    if board.column(intent.to_column_id).is_none() {
        return Err(SwimlaneError::column_not_found(intent.to_column_id));
    }

    let mut destination = ordered_card_ids(board, intent.to_column_id);
    destination.retain(|id| *id != intent.card_id);
    let to_index = intent.to_index.min(destination.len());
    destination.insert(to_index, intent.card_id);

    let mut next = board.clone();
    for card in next.cards.iter_mut() {
        let Some(position) = destination.iter().position(|id| *id == card.id) else {
            continue;
        };
        let position = position as i32;
        if card.column_id != intent.to_column_id {
            card.move_to_column(intent.to_column_id, position);
        } else if card.position != position {
            card.update_position(position);
        }
    }

    if source_column != intent.to_column_id {
        compact_positions(&mut next.cards, source_column);
    }

    Ok(next)
}

/// Move a column to `to_index` and renumber every column.
pub fn apply_column_reorder(
    board: &BoardState,
    intent: &ReorderColumnsIntent,
) -> SwimlaneResult<BoardState> {
    let mut order: Vec<ColumnId> = sorted_columns(&board.columns)
        .iter()
        .map(|c| c.id)
        .collect();
    let from_index = order
        .iter()
        .position(|id| *id == intent.column_id)
        .ok_or_else(|| SwimlaneError::column_not_found(intent.column_id))?;

    let moved = order.remove(from_index);
    order.insert(intent.to_index.min(order.len()), moved);

    let mut next = board.clone();
    for column in next.columns.iter_mut() {
        if let Some(position) = order.iter().position(|id| *id == column.id) {
            if column.position != position as i32 {
                column.update_position(position as i32);
            }
        }
    }

    Ok(next)
}
