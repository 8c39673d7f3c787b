//! Widget Configuration

use serde::Deserialize;

use crate::task::Theme;

/// Storage keys and defaults used by the persistence layer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Key holding the serialized task list
    pub tasks_key: String,
    /// Key holding "light" or "dark"
    pub theme_key: String,
    /// Theme used when nothing (or garbage) is stored
    pub default_theme: Theme,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            tasks_key: "tasks".to_string(),
            theme_key: "theme".to_string(),
            default_theme: Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: WidgetConfig =
            serde_json::from_str(r#"{"tasks_key":"todo-tasks"}"#).unwrap();
        assert_eq!(config.tasks_key, "todo-tasks");
        assert_eq!(config.theme_key, "theme");
        assert_eq!(config.default_theme, Theme::Dark);
    }
}
