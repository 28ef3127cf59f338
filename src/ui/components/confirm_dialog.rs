//! 删除确认弹窗组件

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

use super::dialog_utils::{center_dialog, render_dialog_frame};

pub const TITLE: &str = " Delete Todo ";
pub const MESSAGE: &str = "Are you sure you want to delete this todo?";

/// 渲染删除确认弹窗
pub fn render(frame: &mut Frame, task_name: Option<&str>, colors: &ThemeColors) {
    let mut message_lines = vec![Line::from(MESSAGE)];
    if let Some(name) = task_name {
        message_lines.push(Line::from(""));
        message_lines.push(Line::from(Span::styled(
            format!("\"{}\"", name),
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        )));
    }

    // 边框 + 上下空行 + 内容 + 提示
    let popup_height = (message_lines.len() as u16) + 5;
    let popup_width = (MESSAGE.len() as u16) + 6;
    let popup_area = center_dialog(frame.area(), popup_width, popup_height);

    let inner_area = render_dialog_frame(frame, popup_area, TITLE, colors.warning, colors);

    let [_, content_area, _, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner_area);

    let content = Paragraph::new(message_lines)
        .style(Style::default().fg(colors.text))
        .alignment(Alignment::Center);
    frame.render_widget(content, content_area);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled(
            "Y",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("/", Style::default().fg(colors.muted)),
        Span::styled("Enter", Style::default().fg(colors.highlight)),
        Span::styled(" confirm  ", Style::default().fg(colors.muted)),
        Span::styled(
            "N",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("/", Style::default().fg(colors.muted)),
        Span::styled("Esc", Style::default().fg(colors.highlight)),
        Span::styled(" cancel", Style::default().fg(colors.muted)),
    ]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}
