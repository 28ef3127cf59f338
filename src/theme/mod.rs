mod colors;

use ratatui::style::Color;

pub use colors::*;

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// 主题显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// 从名称创建主题（用于配置加载）
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            n if n.eq_ignore_ascii_case("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// 主题颜色方案
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// 主背景色
    pub bg: Color,
    /// 次级背景色（选中行等）
    pub bg_secondary: Color,
    /// 高亮色（选中项、快捷键等）
    pub highlight: Color,
    /// 普通文字
    pub text: Color,
    /// 次要文字（灰色）
    pub muted: Color,
    /// 边框颜色
    pub border: Color,
    /// 已完成
    pub done: Color,
    /// 已过期
    pub overdue: Color,
    /// 错误提示
    pub error: Color,
    /// 确认弹窗边框
    pub warning: Color,
    /// Tab 选中前景色
    pub tab_active_fg: Color,
    /// Tab 选中背景色
    pub tab_active_bg: Color,
}

/// 获取指定主题的颜色方案
pub fn get_theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Dark => dark_colors(),
        Theme::Light => light_colors(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("Light"), Theme::Light);
        assert_eq!(Theme::from_name("light"), Theme::Light);
        assert_eq!(Theme::from_name("Dark"), Theme::Dark);
        assert_eq!(Theme::from_name("Dracula"), Theme::Dark);
    }

    #[test]
    fn test_next_cycles() {
        assert_eq!(Theme::Dark.next(), Theme::Light);
        assert_eq!(Theme::Light.next().label(), "Dark");
    }
}
