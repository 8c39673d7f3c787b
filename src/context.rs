//! Application Context
//!
//! The single controller instance, provided via Leptos Context API.

use leptos::prelude::*;
use todo_core::{Filter, JsonPersistence, TaskId, TaskListController};

use crate::storage::BrowserStorage;
use crate::view::StoreRenderer;

pub type Controller = TaskListController<JsonPersistence<BrowserStorage>, StoreRenderer>;

/// Handle to the controller; every user action goes through here
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<Controller, LocalStorage>,
}

impl AppContext {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
        }
    }

    /// Add a task; false when the text was rejected
    pub fn create(&self, text: &str) -> bool {
        self.controller
            .try_update_value(|c| c.create(text).is_some())
            .unwrap_or(false)
    }

    pub fn toggle(&self, id: TaskId) {
        self.controller.update_value(|c| {
            c.toggle_by_id(id);
        });
    }

    pub fn delete(&self, id: TaskId) {
        self.controller.update_value(|c| {
            c.delete_by_id(id);
        });
    }

    pub fn clear_completed(&self) {
        self.controller.update_value(|c| {
            c.clear_completed();
        });
    }

    pub fn set_filter(&self, filter: Filter) {
        self.controller.update_value(|c| c.set_filter(filter));
    }

    pub fn toggle_theme(&self) {
        self.controller.update_value(|c| {
            c.toggle_theme();
        });
    }

    pub fn begin_drag(&self, id: TaskId) {
        self.controller.update_value(|c| {
            c.begin_drag(id);
        });
    }

    pub fn drag_hidden(&self, id: TaskId) {
        self.controller.update_value(|c| c.drag_hidden(id));
    }

    pub fn drop_on(&self, target: TaskId) {
        self.controller.update_value(|c| {
            c.drop_on(target);
        });
    }

    pub fn end_drag(&self) {
        self.controller.update_value(|c| c.end_drag());
    }
}
