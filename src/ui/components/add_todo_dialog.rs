//! Add Todo 弹窗组件

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::dialogs::{AddForm, FormField};
use crate::theme::ThemeColors;

use super::dialog_utils::{center_dialog, input_line, render_dialog_frame, render_hint};

/// 渲染 Add Todo 弹窗
pub fn render(frame: &mut Frame, form: &AddForm, colors: &ThemeColors) {
    let popup_width = 60u16.min(frame.area().width.saturating_sub(4));
    let popup_area = center_dialog(frame.area(), popup_width, 10);

    let inner_area = render_dialog_frame(frame, popup_area, " Add Todo ", colors.highlight, colors);

    // 内部布局: 空行 + 名称 + 空行 + 截止时间 + 格式提示 + 空行 + 提示行
    let [_, name_area, _, deadline_area, format_area, _, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner_area);

    frame.render_widget(
        Paragraph::new(input_line(
            "Task",
            &form.task_name,
            form.focus == FormField::TaskName,
            colors,
        )),
        name_area,
    );
    frame.render_widget(
        Paragraph::new(input_line(
            "Deadline",
            &form.deadline,
            form.focus == FormField::Deadline,
            colors,
        )),
        deadline_area,
    );

    let format_hint = Line::from(Span::styled(
        "  (optional) YYYY-MM-DD HH:MM",
        Style::default().fg(colors.muted),
    ));
    frame.render_widget(Paragraph::new(format_hint), format_area);

    render_hint(
        frame,
        hint_area,
        &[("Enter", "add"), ("Tab", "next field"), ("Esc", "close")],
        colors,
    );
}
