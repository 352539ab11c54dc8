use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;
use swimlane_core::{SwimlaneError, SwimlaneResult};

use crate::{card::Card, column::Column};

/// Snapshot of every column and card on a board.
///
/// Supplied fresh by the owner on each refresh. Nothing in this crate keeps a
/// copy across gestures or mutates one in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardState {
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl BoardState {
    pub fn new(columns: Vec<Column>, cards: Vec<Card>) -> Self {
        Self { columns, cards }
    }

    pub fn column(&self, id: crate::ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn card(&self, id: crate::CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Checks id uniqueness and that every card points at a known column.
    pub fn validate(&self) -> SwimlaneResult<()> {
        let mut column_ids = HashSet::with_capacity(self.columns.len());
        for column in &self.columns {
            if !column_ids.insert(column.id) {
                return Err(SwimlaneError::Validation(format!(
                    "duplicate column id {}",
                    column.id
                )));
            }
        }

        let mut card_ids = HashSet::with_capacity(self.cards.len());
        for card in &self.cards {
            if !card_ids.insert(card.id) {
                return Err(SwimlaneError::Validation(format!(
                    "duplicate card id {}",
                    card.id
                )));
            }
            if !column_ids.contains(&card.column_id) {
                return Err(SwimlaneError::NotFound(format!(
                    "Column {} referenced by card {}",
                    card.column_id, card.id
                )));
            }
        }

        Ok(())
    }

    pub fn from_json_str(data: &str) -> SwimlaneResult<Self> {
        serde_json::from_str(data).map_err(|e| SwimlaneError::Serialization(e.to_string()))
    }

    pub fn to_json_string(&self, pretty: bool) -> SwimlaneResult<String> {
        let result = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        result.map_err(|e| SwimlaneError::Serialization(e.to_string()))
    }

    pub fn load(path: &Path) -> SwimlaneResult<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Writes the board as pretty JSON.
    ///
    /// The data goes to a temp file next to `path` which is then renamed over
    /// it, so a failed write leaves the old board intact.
    pub fn save(&self, path: &Path) -> SwimlaneResult<()> {
        let data = self.to_json_string(true)?;
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(data.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;

        tracing::debug!("Wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }
}
