//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Task status icons
#[derive(Debug, Clone)]
pub struct TaskStatusIcons {
    pub pending: &'static str,
    pub completed: &'static str,
}

/// Sidebar icons
#[derive(Debug, Clone)]
pub struct SidebarIcons {
    pub menu: &'static str,
    pub close: &'static str,
    pub add: &'static str,
    pub user: &'static str,
    pub logout: &'static str,
    pub list: &'static str,
}

/// Row action icons. Always one cell wide so the click targets stay aligned.
#[derive(Debug, Clone)]
pub struct ActionIcons {
    pub edit: &'static str,
    pub delete: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub error: &'static str,
    pub info: &'static str,
    pub due_date: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub task_status: TaskStatusIcons,
    pub sidebar: SidebarIcons,
    pub actions: ActionIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "🔳",
                completed: "✅",
            },
            sidebar: SidebarIcons {
                menu: "☰",
                close: "✕",
                add: "➕",
                user: "👤",
                logout: "🚪",
                list: "📋",
            },
            actions: ActionIcons {
                edit: "✎",
                delete: "✖",
            },
            ui: UiIcons {
                error: "❌",
                info: "💡",
                due_date: "📅",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "□",
                completed: "✓",
            },
            sidebar: SidebarIcons {
                menu: "☰",
                close: "✕",
                add: "+",
                user: "◉",
                logout: "⏻",
                list: "▸",
            },
            actions: ActionIcons {
                edit: "✎",
                delete: "✖",
            },
            ui: UiIcons {
                error: "✗",
                info: "ⓘ",
                due_date: "◷",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "[ ]",
                completed: "[X]",
            },
            sidebar: SidebarIcons {
                menu: "=",
                close: "x",
                add: "+",
                user: "@",
                logout: "<-",
                list: "-",
            },
            actions: ActionIcons {
                edit: "e",
                delete: "x",
            },
            ui: UiIcons {
                error: "X",
                info: "i",
                due_date: "@",
            },
        }
    }

    #[must_use]
    pub fn task_pending(&self) -> &'static str {
        self.icons().task_status.pending
    }

    #[must_use]
    pub fn task_completed(&self) -> &'static str {
        self.icons().task_status.completed
    }

    #[must_use]
    pub fn menu(&self) -> &'static str {
        self.icons().sidebar.menu
    }

    #[must_use]
    pub fn close(&self) -> &'static str {
        self.icons().sidebar.close
    }

    #[must_use]
    pub fn add(&self) -> &'static str {
        self.icons().sidebar.add
    }

    #[must_use]
    pub fn user(&self) -> &'static str {
        self.icons().sidebar.user
    }

    #[must_use]
    pub fn logout(&self) -> &'static str {
        self.icons().sidebar.logout
    }

    #[must_use]
    pub fn list(&self) -> &'static str {
        self.icons().sidebar.list
    }

    #[must_use]
    pub fn edit(&self) -> &'static str {
        self.icons().actions.edit
    }

    #[must_use]
    pub fn delete(&self) -> &'static str {
        self.icons().actions.delete
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn due_date(&self) -> &'static str {
        self.icons().ui.due_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = IconService::default();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_theme_is_kept() {
        let service = IconService::new(IconTheme::Emoji);
        assert_eq!(service.theme(), IconTheme::Emoji);
    }

    #[test]
    fn test_task_status_icons() {
        let service = IconService::new(IconTheme::Unicode);
        assert_eq!(service.task_pending(), "□");
        assert_eq!(service.task_completed(), "✓");
    }

    #[test]
    fn test_action_icons_are_single_char_in_every_theme() {
        for theme in [IconTheme::Ascii, IconTheme::Unicode, IconTheme::Emoji] {
            let service = IconService::new(theme);
            assert_eq!(service.edit().chars().count(), 1, "{:?}", theme);
            assert_eq!(service.delete().chars().count(), 1, "{:?}", theme);
        }
    }
}
