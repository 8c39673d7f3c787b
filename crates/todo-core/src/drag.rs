//! Drag Session
//!
//! Lifecycle of one drag gesture: lifted (native drag image being taken),
//! hidden (row removed from the flow), then dropped or cancelled.

use crate::task::TaskId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// Drag started; the row is still laid out so the browser can snapshot it
    Lifted,
    /// Drag image taken; the row is hidden for the rest of the gesture
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub source: TaskId,
    pub phase: DragPhase,
}

impl DragSession {
    pub fn lifted(source: TaskId) -> Self {
        Self {
            source,
            phase: DragPhase::Lifted,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.phase == DragPhase::Hidden
    }
}
