//! Ordered views derived from a [`BoardState`].
//!
//! Everything here is a pure function of the board snapshot. The resulting
//! [`BoardIndex`] is never updated in place; rebuild it whenever the owner
//! hands over a new board.

use std::collections::HashMap;

use crate::resolver::OverTarget;
use crate::{BoardState, Card, CardId, Column, ColumnId};

/// Columns sorted by position. Ties keep input order.
pub fn sorted_columns(columns: &[Column]) -> Vec<&Column> {
    let mut cols: Vec<_> = columns.iter().collect();
    cols.sort_by_key(|c| c.position);
    cols
}

/// Cards sorted by position. Ties keep input order.
pub fn sorted_cards(cards: &[Card]) -> Vec<&Card> {
    let mut sorted: Vec<_> = cards.iter().collect();
    sorted.sort_by_key(|c| c.position);
    sorted
}

/// Renumber one column's cards to 0, 1, 2, ... keeping their current order.
///
/// Only cards whose position actually changes get a fresh `updated_at`.
pub fn compact_positions(cards: &mut [Card], column_id: ColumnId) {
    let mut slots: Vec<usize> = (0..cards.len())
        .filter(|&i| cards[i].column_id == column_id)
        .collect();
    slots.sort_by_key(|&i| cards[i].position);

    for (position, slot) in slots.into_iter().enumerate() {
        let card = &mut cards[slot];
        if card.position != position as i32 {
            card.update_position(position as i32);
        }
    }
}

/// Per-column ordered card lists plus a card lookup table.
#[derive(Debug, Clone, Default)]
pub struct BoardIndex {
    by_column: HashMap<ColumnId, Vec<Card>>,
    cards_by_id: HashMap<CardId, Card>,
}

impl BoardIndex {
    pub fn build(board: &BoardState) -> Self {
        let mut by_column: HashMap<ColumnId, Vec<Card>> = board
            .columns
            .iter()
            .map(|col| (col.id, Vec::new()))
            .collect();

        for card in &board.cards {
            match by_column.get_mut(&card.column_id) {
                Some(cards) => cards.push(card.clone()),
                None => tracing::debug!(
                    "Card {} references unknown column {}, leaving it out",
                    card.id,
                    card.column_id
                ),
            }
        }

        for cards in by_column.values_mut() {
            cards.sort_by_key(|c| c.position);
        }

        let cards_by_id = board.cards.iter().map(|c| (c.id, c.clone())).collect();

        Self {
            by_column,
            cards_by_id,
        }
    }

    /// Ordered cards of a column. Empty for unknown columns.
    pub fn cards_in(&self, column_id: ColumnId) -> &[Card] {
        self.by_column
            .get(&column_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_column(&self, column_id: ColumnId) -> bool {
        self.by_column.contains_key(&column_id)
    }

    pub fn column_len(&self, column_id: ColumnId) -> usize {
        self.cards_in(column_id).len()
    }

    pub fn card(&self, card_id: CardId) -> Option<&Card> {
        self.cards_by_id.get(&card_id)
    }

    /// Column and index of a card within its column's ordered list.
    pub fn locate(&self, card_id: CardId) -> Option<(ColumnId, usize)> {
        let card = self.card(card_id)?;
        let index = self
            .cards_in(card.column_id)
            .iter()
            .position(|c| c.id == card_id)?;
        Some((card.column_id, index))
    }

    /// Builds the "over a card" report an interaction surface would send
    /// while hovering `card_id`.
    pub fn over_card(&self, card_id: CardId) -> OverTarget {
        match self.locate(card_id) {
            Some((column_id, index)) => OverTarget::Card {
                card_id,
                column_id,
                index,
            },
            None => OverTarget::None,
        }
    }

    /// A column's cards with the dragged card taken out, which is what the
    /// board draws while a gesture is in flight.
    pub fn visible_cards(&self, column_id: ColumnId, active: Option<CardId>) -> Vec<&Card> {
        self.cards_in(column_id)
            .iter()
            .filter(|c| Some(c.id) != active)
            .collect()
    }
}
