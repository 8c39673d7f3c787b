//! Todo Core
//!
//! Platform-independent heart of the todo widget:
//! - task: Task, TaskId, Filter and Theme
//! - controller: the TaskListController owning all state
//! - persistence: load/save of tasks and theme over a key-value store
//! - render: the ViewRenderer contract the UI implements
//! - drag: explicit drag session state machine

mod config;
mod controller;
mod drag;
mod error;
mod persistence;
mod render;
mod store;
mod task;


pub use config::WidgetConfig;
pub use controller::TaskListController;
pub use drag::{DragPhase, DragSession};
pub use error::{TodoError, TodoResult};
pub use persistence::{JsonPersistence, PersistenceAdapter, StoredTask};
pub use render::{visibility, ViewRenderer};
pub use store::{KeyValueStore, MemoryStore};
pub use task::{Filter, Task, TaskId, Theme};
