//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题（默认）
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),           // 深灰背景
        bg_secondary: Color::Rgb(48, 48, 48), // 选中行背景
        highlight: Color::Rgb(0, 255, 136),   // 亮绿色
        text: Color::White,
        muted: Color::Rgb(128, 128, 128),
        border: Color::Rgb(68, 68, 68),
        done: Color::Rgb(100, 100, 100),
        overdue: Color::Rgb(255, 85, 85),
        error: Color::Rgb(255, 85, 85),
        warning: Color::Rgb(255, 165, 0), // 橙色
        tab_active_fg: Color::Black,
        tab_active_bg: Color::Rgb(0, 255, 136),
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),
        bg_secondary: Color::Rgb(230, 230, 230),
        highlight: Color::Rgb(0, 128, 68), // 深绿色
        text: Color::Rgb(30, 30, 30),
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        done: Color::Rgb(160, 160, 160),
        overdue: Color::Rgb(200, 50, 50),
        error: Color::Rgb(200, 50, 50),
        warning: Color::Rgb(200, 120, 0),
        tab_active_fg: Color::White,
        tab_active_bg: Color::Rgb(0, 128, 68),
    }
}
