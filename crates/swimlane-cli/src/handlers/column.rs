use serde::Serialize;
use swimlane_board::{apply_column_reorder, reorder_columns, ColumnReorder, Intent};

use super::board::load_board;
use crate::cli::ReorderColumnArgs;
use crate::output::output_success;

#[derive(Serialize)]
struct ReorderOutput {
    reorder: Option<ColumnReorder>,
    written: bool,
}

pub fn handle_reorder(args: ReorderColumnArgs, pretty: bool) -> anyhow::Result<()> {
    let board = load_board(&args.board)?;
    board.validate()?;
    if board.column(args.column).is_none() {
        anyhow::bail!("Column {} not found", args.column);
    }

    let mut sink: Vec<Intent> = Vec::new();
    let reorder = reorder_columns(&board, args.column, args.to, &mut sink);

    let mut written = false;
    if let (Some(reorder), true) = (&reorder, args.write) {
        let next = apply_column_reorder(&board, &reorder.intent)?;
        next.save(&args.board)?;
        tracing::info!("Wrote reordered board to {}", args.board.display());
        written = true;
    }

    output_success(ReorderOutput { reorder, written }, pretty)
}
