use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

pub const LOADING_TEXT: &str = "Loading your todos...";
pub const EMPTY_TEXT: &str = "No todos yet!";

/// 渲染首次加载提示（整页只显示这一行）
pub fn render_loading(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let y_offset = area.height.saturating_sub(1) / 2;
    let centered_area = Rect {
        x: area.x,
        y: area.y + y_offset,
        width: area.width,
        height: 1.min(area.height),
    };

    let loading = Paragraph::new(Span::styled(LOADING_TEXT, Style::default().fg(colors.muted)))
        .alignment(Alignment::Center);
    frame.render_widget(loading, centered_area);
}

/// 渲染空列表（带提示文字）
pub fn render(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(EMPTY_TEXT, Style::default().fg(colors.muted))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(colors.text)),
            Span::styled(
                " a ",
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("to add a todo", Style::default().fg(colors.text)),
        ]),
    ];

    // 垂直居中
    let y_offset = inner_area.height.saturating_sub(3) / 2;
    let centered_area = Rect {
        x: inner_area.x,
        y: inner_area.y + y_offset,
        width: inner_area.width,
        height: 3.min(inner_area.height),
    };

    let hint_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(hint_widget, centered_area);
}
