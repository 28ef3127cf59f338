use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::model::Filter;
use crate::theme::ThemeColors;

/// 构建过滤按钮，选中项用背景高亮块
pub fn filter_spans(current: Filter, colors: &ThemeColors) -> Vec<Span<'static>> {
    let filters = Filter::all();
    let mut spans = Vec::new();

    for (i, filter) in filters.iter().enumerate() {
        let label = format!(" {} {} ", i + 1, filter.label());

        if *filter == current {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(colors.tab_active_fg)
                    .bg(colors.tab_active_bg)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(label, Style::default().fg(colors.muted)));
        }

        if i < filters.len() - 1 {
            spans.push(Span::raw(" "));
        }
    }

    spans
}
