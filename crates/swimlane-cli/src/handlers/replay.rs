use anyhow::Context;
use serde::{Deserialize, Serialize};
use swimlane_board::{
    apply_move, BoardIndex, BoardState, DragSession, Intent, OverTarget, Preview, PreviewChange,
    SessionConfig,
};
use swimlane_core::AppConfig;
use uuid::Uuid;

use super::board::load_board;
use crate::cli::ReplayArgs;
use crate::output::output_success;

/// Hover target in a script: a full report, or a shorthand that is looked
/// up against the current board.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TargetRef {
    Report(OverTarget),
    Card { card: Uuid },
    Column { column: Uuid },
}

impl TargetRef {
    fn resolve(&self, index: &BoardIndex) -> OverTarget {
        match *self {
            TargetRef::Report(target) => target,
            TargetRef::Card { card } => index.over_card(card),
            TargetRef::Column { column } => OverTarget::ColumnTail { column_id: column },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GestureEvent {
    Start { card: Uuid },
    Over { target: TargetRef },
    End { target: TargetRef },
    Cancel,
}

#[derive(Serialize)]
struct Step {
    event: &'static str,
    dragging: bool,
    preview: Option<Preview>,
    preview_changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    intent: Option<Intent>,
}

#[derive(Serialize)]
struct ReplayOutput {
    steps: Vec<Step>,
    intents: Vec<Intent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    board: Option<BoardState>,
}

/// Runs `events` through one session.
///
/// With `apply` set, each committed move is applied and the index rebuilt
/// before the next event, the way an owner re-supplies the board.
fn replay(
    mut board: BoardState,
    events: &[GestureEvent],
    config: SessionConfig,
    apply: bool,
) -> anyhow::Result<(Vec<Step>, Vec<Intent>, BoardState)> {
    let mut session = DragSession::new(config);
    let mut index = BoardIndex::build(&board);
    let mut intents: Vec<Intent> = Vec::new();
    let mut steps = Vec::with_capacity(events.len());

    for event in events {
        let (name, preview_changed, committed) = match event {
            GestureEvent::Start { card } => {
                session.start(&index, *card);
                ("start", false, None)
            }
            GestureEvent::Over { target } => {
                let change = session.over(&index, &target.resolve(&index));
                ("over", change != PreviewChange::Unchanged, None)
            }
            GestureEvent::End { target } => {
                let had_preview = session.preview().is_some();
                let intent = session.end(&index, &target.resolve(&index), &mut intents);
                ("end", had_preview, intent)
            }
            GestureEvent::Cancel => {
                let had_preview = session.preview().is_some();
                session.cancel();
                ("cancel", had_preview, None)
            }
        };

        if let (Some(intent), true) = (committed, apply) {
            board = apply_move(&board, &intent)
                .with_context(|| format!("Failed to apply move of card {}", intent.card_id))?;
            index = BoardIndex::build(&board);
        }

        steps.push(Step {
            event: name,
            dragging: session.is_dragging(),
            preview: session.preview(),
            preview_changed,
            intent: committed.map(Intent::from),
        });
    }

    Ok((steps, intents, board))
}

pub fn handle(args: ReplayArgs, config: &AppConfig, pretty: bool) -> anyhow::Result<()> {
    let board = load_board(&args.board)?;
    board.validate()?;

    let script = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let events: Vec<GestureEvent> =
        serde_json::from_str(&script).context("Failed to parse gesture script")?;

    let mut session_config = SessionConfig::from(config);
    session_config.disabled |= args.disabled;
    let apply = args.apply || args.out.is_some();

    let (steps, intents, board) = replay(board, &events, session_config, apply)?;
    tracing::info!(
        "Replayed {} events, {} intents committed",
        steps.len(),
        intents.len()
    );

    if let Some(out) = &args.out {
        board.save(out)?;
    }

    output_success(
        ReplayOutput {
            steps,
            intents,
            board: apply.then_some(board),
        },
        pretty,
    )
}
