use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::Filter;
use crate::theme::ThemeColors;

use super::dialog_utils::hint_line;
use super::tabs;

/// 渲染列表底栏：左侧剩余数量，右侧过滤按钮
pub fn render(
    frame: &mut Frame,
    area: Rect,
    items_left: &str,
    filter: Filter,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let left = Span::styled(format!(" {}", items_left), Style::default().fg(colors.text));
    let right = tabs::filter_spans(filter, colors);

    let right_width: usize = right.iter().map(|s| s.width()).sum();
    let padding_len = (inner_area.width as usize).saturating_sub(left.width() + right_width + 1);

    let mut spans = vec![left, Span::raw(" ".repeat(padding_len))];
    spans.extend(right);

    frame.render_widget(Paragraph::new(Line::from(spans)), inner_area);
}

/// 渲染底部快捷键提示栏
pub fn render_shortcuts(frame: &mut Frame, area: Rect, has_items: bool, colors: &ThemeColors) {
    let shortcuts: &[(&str, &str)] = if has_items {
        &[
            ("Space", "toggle"),
            ("a", "add"),
            ("d", "delete"),
            ("Tab", "filter"),
            ("?", "help"),
            ("q", "quit"),
        ]
    } else {
        &[("a", "add"), ("?", "help"), ("q", "quit")]
    };

    frame.render_widget(Paragraph::new(hint_line(shortcuts, colors)), area);
}
