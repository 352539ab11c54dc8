use anyhow::Context;
use serde::Serialize;
use std::path::Path;
use swimlane_board::{sorted_columns, BoardIndex, BoardState, CardId, ColumnId};

use crate::output::output_success;

#[derive(Serialize)]
struct ColumnView<'a> {
    id: ColumnId,
    title: &'a str,
    position: i32,
    cards: Vec<CardId>,
}

pub fn load_board(path: &Path) -> anyhow::Result<BoardState> {
    BoardState::load(path).with_context(|| format!("Failed to load board {}", path.display()))
}

pub fn handle_validate(path: &Path, pretty: bool) -> anyhow::Result<()> {
    let board = load_board(path)?;
    board.validate()?;

    let index = BoardIndex::build(&board);
    let columns: Vec<ColumnView> = sorted_columns(&board.columns)
        .into_iter()
        .map(|col| ColumnView {
            id: col.id,
            title: &col.title,
            position: col.position,
            cards: index.cards_in(col.id).iter().map(|c| c.id).collect(),
        })
        .collect();

    tracing::info!("Validated board with {} columns", columns.len());
    output_success(columns, pretty)
}
