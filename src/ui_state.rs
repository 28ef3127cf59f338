//! UI 状态管理
//!
//! 管理与显示相关的状态：主题、颜色、Toast、列表选中项。

use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::theme::{get_theme_colors, Theme, ThemeColors};

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// UI 状态
#[derive(Debug)]
pub struct UiState {
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 可见列表的选中状态
    pub list_state: ListState,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            toast: None,
            theme,
            colors: get_theme_colors(theme),
            list_state: ListState::default(),
        }
    }

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, Duration::from_secs(2)));
    }

    /// 清除过期的 Toast
    pub fn clear_expired_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    /// 切换到下一个主题
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.colors = get_theme_colors(self.theme);
    }

    /// 列表长度变化后修正选中项
    pub fn clamp_selection(&mut self, len: usize) {
        match (self.list_state.selected(), len) {
            (_, 0) => self.list_state.select(None),
            (None, _) => self.list_state.select(Some(0)),
            (Some(i), len) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    /// 选中下一项（循环）
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    /// 选中上一项（循环）
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_toast() {
        let mut state = UiState::new(Theme::Dark);
        state.show_toast("Added");
        assert_eq!(state.toast.as_ref().unwrap().message, "Added");
    }

    #[test]
    fn test_toast_expiry() {
        let toast = Toast::new("Test", Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(2));
        assert!(toast.is_expired());
    }

    #[test]
    fn test_clear_expired_toast() {
        let mut state = UiState::new(Theme::Dark);
        state.toast = Some(Toast::new("Test", Duration::from_millis(1)));
        std::thread::sleep(Duration::from_millis(2));
        state.clear_expired_toast();
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_selection_wraps() {
        let mut state = UiState::new(Theme::Dark);
        state.clamp_selection(3);
        assert_eq!(state.list_state.selected(), Some(0));

        state.select_previous(3);
        assert_eq!(state.list_state.selected(), Some(2));
        state.select_next(3);
        assert_eq!(state.list_state.selected(), Some(0));
    }

    #[test]
    fn test_clamp_selection_after_shrink() {
        let mut state = UiState::new(Theme::Dark);
        state.list_state.select(Some(4));
        state.clamp_selection(2);
        assert_eq!(state.list_state.selected(), Some(1));
        state.clamp_selection(0);
        assert_eq!(state.list_state.selected(), None);
    }

    #[test]
    fn test_cycle_theme() {
        let mut state = UiState::new(Theme::Dark);
        state.cycle_theme();
        assert_eq!(state.theme, Theme::Light);
    }
}
