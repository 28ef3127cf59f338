use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

pub const TITLE: &str = "Todos";

/// Header 总高度：1 (边框) + 1 (标题)
pub const HEADER_HEIGHT: u16 = 2;

const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// 渲染顶部标题栏，有请求未返回时右侧显示 spinner
pub fn render(frame: &mut Frame, area: Rect, syncing: bool, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let left = Span::styled(
        format!(" {}", TITLE),
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD),
    );

    let right = if syncing {
        Span::styled(
            format!("{} syncing ", spinner_frame()),
            Style::default().fg(colors.muted),
        )
    } else {
        Span::raw("")
    };

    // 计算中间填充空格
    let padding_len = (inner_area.width as usize).saturating_sub(left.width() + right.width());
    let line = Line::from(vec![left, Span::raw(" ".repeat(padding_len)), right]);

    frame.render_widget(Paragraph::new(line), inner_area);
}

/// 渲染错误横幅
pub fn render_error(frame: &mut Frame, area: Rect, message: &str, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let banner = Paragraph::new(Line::from(vec![
        Span::styled(
            " ✗ ",
            Style::default()
                .fg(colors.error)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(message.to_string(), Style::default().fg(colors.error)),
    ]))
    .alignment(Alignment::Left)
    .block(block);

    frame.render_widget(banner, area);
}

/// 基于时间选择 spinner 帧，每 100ms 切换
fn spinner_frame() -> char {
    let tick = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
        / 100;
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}
