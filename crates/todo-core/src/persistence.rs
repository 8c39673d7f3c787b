//! Persistence Layer
//!
//! Saves and restores the task list and theme preference through a
//! `KeyValueStore`. Nothing here ever fails outward: malformed entries fall
//! back to defaults and write failures are logged.

use serde::{Deserialize, Serialize};

use crate::config::WidgetConfig;
use crate::error::{TodoError, TodoResult};
use crate::store::KeyValueStore;
use crate::task::{Task, Theme};

/// Persisted shape of a task (no identifier)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTask {
    pub text: String,
    pub completed: bool,
}

impl From<&Task> for StoredTask {
    fn from(task: &Task) -> Self {
        Self {
            text: task.text.clone(),
            completed: task.completed,
        }
    }
}

/// Durable home of the task list and theme
pub trait PersistenceAdapter {
    /// Persist both entries; failures are swallowed after logging
    fn save(&mut self, tasks: &[Task], theme: Theme);

    /// Restore both entries, falling back to an empty list and the default
    /// theme on anything absent or unreadable
    fn load(&self) -> (Vec<StoredTask>, Theme);
}

/// JSON encoding over any key-value store
#[derive(Debug, Clone)]
pub struct JsonPersistence<S> {
    store: S,
    config: WidgetConfig,
}

impl<S: KeyValueStore> JsonPersistence<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, WidgetConfig::default())
    }

    pub fn with_config(store: S, config: WidgetConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write both keys, stopping at the first failure
    pub fn try_save(&mut self, tasks: &[Task], theme: Theme) -> TodoResult<()> {
        let stored: Vec<StoredTask> = tasks.iter().map(StoredTask::from).collect();
        let json = serde_json::to_string(&stored)?;
        self.store.set_item(&self.config.tasks_key, &json)?;
        self.store.set_item(&self.config.theme_key, theme.as_str())?;
        Ok(())
    }

    /// Read the task list; `Ok(vec![])` when absent
    pub fn try_load_tasks(&self) -> TodoResult<Vec<StoredTask>> {
        let key = &self.config.tasks_key;
        match self.store.get_item(key)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| TodoError::MalformedState {
                key: key.clone(),
                reason: e.to_string(),
            }),
        }
    }

    /// Read the theme; `Ok(None)` when absent
    pub fn try_load_theme(&self) -> TodoResult<Option<Theme>> {
        let key = &self.config.theme_key;
        match self.store.get_item(key)? {
            None => Ok(None),
            Some(raw) => Theme::parse(&raw).map(Some).ok_or_else(|| TodoError::MalformedState {
                key: key.clone(),
                reason: format!("unrecognized theme '{}'", raw),
            }),
        }
    }
}

impl<S: KeyValueStore> PersistenceAdapter for JsonPersistence<S> {
    fn save(&mut self, tasks: &[Task], theme: Theme) {
        if let Err(e) = self.try_save(tasks, theme) {
            tracing::error!(error = %e, "failed to persist tasks; keeping in-memory state");
        }
    }

    fn load(&self) -> (Vec<StoredTask>, Theme) {
        let tasks = self.try_load_tasks().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "discarding stored tasks");
            Vec::new()
        });
        let theme = match self.try_load_theme() {
            Ok(theme) => theme.unwrap_or(self.config.default_theme),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring stored theme");
                self.config.default_theme
            }
        };
        tracing::debug!(count = tasks.len(), theme = theme.as_str(), "loaded persisted state");
        (tasks, theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::task::TaskId;

    fn task(id: u32, text: &str, completed: bool) -> Task {
        Task {
            id: TaskId(id),
            text: text.to_string(),
            completed,
        }
    }

    #[test]
    fn test_load_empty_store() {
        let persistence = JsonPersistence::new(MemoryStore::new());
        let (tasks, theme) = persistence.load();
        assert!(tasks.is_empty());
        assert_eq!(theme, Theme::Dark);
    }

    #[test]
    fn test_save_then_load() {
        let mut persistence = JsonPersistence::new(MemoryStore::new());
        let tasks = vec![task(1, "Buy milk", true), task(2, "Walk dog", false)];
        persistence.save(&tasks, Theme::Light);

        let (loaded, theme) = persistence.load();
        assert_eq!(theme, Theme::Light);
        assert_eq!(
            loaded,
            vec![
                StoredTask {
                    text: "Buy milk".into(),
                    completed: true,
                },
                StoredTask {
                    text: "Walk dog".into(),
                    completed: false,
                },
            ]
        );
    }

    #[test]
    fn test_stored_format() {
        let mut persistence = JsonPersistence::new(MemoryStore::new());
        persistence.save(&[task(7, "A", false)], Theme::Dark);

        let store = persistence.store();
        assert_eq!(store.get("tasks"), Some(r#"[{"text":"A","completed":false}]"#));
        assert_eq!(store.get("theme"), Some("dark"));
    }

    #[test]
    fn test_malformed_entries_fall_back() {
        let mut store = MemoryStore::new();
        store.set_item("tasks", "{not json").unwrap();
        store.set_item("theme", "sepia").unwrap();
        let persistence = JsonPersistence::new(store);

        assert!(matches!(
            persistence.try_load_tasks(),
            Err(TodoError::MalformedState { .. })
        ));
        let (tasks, theme) = persistence.load();
        assert!(tasks.is_empty());
        assert_eq!(theme, Theme::Dark);
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let mut store = MemoryStore::new();
        store.set_item("tasks", r#"[{"text":"A"}]"#).unwrap();
        let persistence = JsonPersistence::new(store);
        assert!(persistence.load().0.is_empty());
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let mut persistence = JsonPersistence::new(MemoryStore::with_quota(16));
        let tasks = vec![task(1, "a task that does not fit", false)];
        assert!(matches!(
            persistence.try_save(&tasks, Theme::Dark),
            Err(TodoError::StorageWrite { .. })
        ));
        // Adapter variant only logs
        persistence.save(&tasks, Theme::Dark);
        assert_eq!(persistence.store().get("tasks"), None);
    }

    #[test]
    fn test_custom_keys() {
        let config = WidgetConfig {
            tasks_key: "todo.tasks".into(),
            theme_key: "todo.theme".into(),
            default_theme: Theme::Light,
        };
        let mut persistence = JsonPersistence::with_config(MemoryStore::new(), config);
        assert_eq!(persistence.load().1, Theme::Light);

        persistence.save(&[], Theme::Dark);
        assert_eq!(persistence.store().get("todo.theme"), Some("dark"));
        assert_eq!(persistence.store().get("todo.tasks"), Some("[]"));
    }
}
