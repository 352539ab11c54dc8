pub mod apply;
pub mod board;
pub mod card;
pub mod column;
pub mod intent;
pub mod ordering;
pub mod resolver;
pub mod session;

pub use apply::{apply_column_reorder, apply_intent, apply_move};
pub use board::BoardState;
pub use card::{Assignee, Badge, Card, CardId, CardMeta};
pub use column::{Column, ColumnId};
pub use intent::{Intent, IntentSink, MoveCardIntent, ReorderColumnsIntent};
pub use ordering::{compact_positions, sorted_cards, sorted_columns, BoardIndex};
pub use resolver::{resolve_drop_target, DragOrigin, OverTarget, Placement};
pub use session::{
    reorder_columns, ColumnReorder, DragSession, Preview, PreviewChange, SessionConfig,
    SessionState,
};
