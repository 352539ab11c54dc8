use serde::{Deserialize, Serialize};

use crate::{CardId, ColumnId};

/// Committed request to move a card. Applying it is the owner's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCardIntent {
    pub card_id: CardId,
    pub from_column_id: ColumnId,
    pub to_column_id: ColumnId,
    pub to_index: usize,
}

/// Committed request to move a column to `to_index` in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderColumnsIntent {
    pub column_id: ColumnId,
    pub to_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Intent {
    MoveCard(MoveCardIntent),
    ReorderColumns(ReorderColumnsIntent),
}

impl From<MoveCardIntent> for Intent {
    fn from(intent: MoveCardIntent) -> Self {
        Intent::MoveCard(intent)
    }
}

impl From<ReorderColumnsIntent> for Intent {
    fn from(intent: ReorderColumnsIntent) -> Self {
        Intent::ReorderColumns(intent)
    }
}

/// Receiver of committed intents.
///
/// Each callback fires at most once per committed gesture.
#[cfg_attr(test, mockall::automock)]
pub trait IntentSink {
    fn on_move_card(&mut self, intent: &MoveCardIntent);

    fn on_reorder_columns(&mut self, intent: &ReorderColumnsIntent);
}

/// Records intents in emission order.
impl IntentSink for Vec<Intent> {
    fn on_move_card(&mut self, intent: &MoveCardIntent) {
        self.push((*intent).into());
    }

    fn on_reorder_columns(&mut self, intent: &ReorderColumnsIntent) {
        self.push((*intent).into());
    }
}
