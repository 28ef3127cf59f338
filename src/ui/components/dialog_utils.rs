//! Dialog 组件共享工具函数
//!
//! 提供 dialog 组件常用的渲染工具，减少重复代码

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 计算居中 dialog 区域
pub fn center_dialog(frame_area: Rect, width: u16, height: u16) -> Rect {
    let x = frame_area.x + frame_area.width.saturating_sub(width) / 2;
    let y = frame_area.y + frame_area.height.saturating_sub(height) / 2;
    Rect::new(
        x,
        y,
        width.min(frame_area.width),
        height.min(frame_area.height),
    )
}

/// 渲染 dialog 框架（带标题、边框）并返回内部可用区域
///
/// # Arguments
/// * `frame` - ratatui Frame
/// * `area` - dialog 区域
/// * `title` - 标题文本
/// * `border_color` - 边框颜色
/// * `colors` - 主题颜色
///
/// # Returns
/// 内部可用区域 (已扣除边框)
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    colors: &ThemeColors,
) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// 渲染标准提示行，格式为 [(快捷键, 描述), ...]
pub fn render_hint(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], colors: &ThemeColors) {
    let hint = Paragraph::new(hint_line(hints, colors)).alignment(Alignment::Center);
    frame.render_widget(hint, area);
}

/// 构建提示行
pub fn hint_line(hints: &[(&str, &str)], colors: &ThemeColors) -> Line<'static> {
    let spans: Vec<Span> = hints
        .iter()
        .enumerate()
        .flat_map(|(i, (key, desc))| {
            let mut v = vec![];
            if i > 0 {
                v.push(Span::styled("  ", Style::default().fg(colors.muted)));
            }
            v.push(Span::styled(
                key.to_string(),
                Style::default().fg(colors.highlight),
            ));
            v.push(Span::styled(
                format!(" {}", desc),
                Style::default().fg(colors.muted),
            ));
            v
        })
        .collect();

    Line::from(spans)
}

/// 渲染输入框，聚焦时显示光标
pub fn input_line(
    label: &str,
    value: &str,
    focused: bool,
    colors: &ThemeColors,
) -> Line<'static> {
    let label_style = if focused {
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.muted)
    };

    let mut spans = vec![
        Span::styled(format!("  {}: ", label), label_style),
        Span::styled(value.to_string(), Style::default().fg(colors.text)),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(colors.highlight)));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_dialog_clamps_to_frame() {
        let frame = Rect::new(0, 0, 20, 10);
        let area = center_dialog(frame, 40, 4);
        assert_eq!(area.width, 20);
        assert_eq!(area.y, 3);
    }

    #[test]
    fn test_center_dialog_offsets_by_origin() {
        let frame = Rect::new(10, 5, 40, 20);
        let area = center_dialog(frame, 20, 10);
        assert_eq!((area.x, area.y), (20, 10));
    }
}
