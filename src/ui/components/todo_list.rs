use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::model::{format_deadline, Todo};
use crate::theme::ThemeColors;

/// 渲染 Todo 列表，每项两行：复选框 + 名称，截止时间
pub fn render(
    frame: &mut Frame,
    area: Rect,
    todos: &[&Todo],
    selected_index: Option<usize>,
    now: DateTime<Utc>,
    colors: &ThemeColors,
) {
    let items: Vec<ListItem> = todos
        .iter()
        .enumerate()
        .map(|(i, todo)| {
            let is_selected = selected_index == Some(i);
            let selector = if is_selected { "❯ " } else { "  " };
            let checkbox = if todo.done { "[x] " } else { "[ ] " };

            let name_style = if todo.done {
                Style::default()
                    .fg(colors.done)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if todo.is_overdue(now) {
                Style::default().fg(colors.overdue)
            } else {
                Style::default().fg(colors.text)
            };

            let deadline_style = if todo.is_overdue(now) {
                Style::default().fg(colors.overdue)
            } else {
                Style::default().fg(colors.muted)
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(selector, Style::default().fg(colors.highlight)),
                    Span::styled(checkbox, name_style),
                    Span::styled(todo.task_name.clone(), name_style),
                ]),
                Line::from(Span::styled(
                    format!("      {}", format_deadline(todo.deadline)),
                    deadline_style,
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(colors.border)),
        )
        .highlight_style(
            Style::default()
                .bg(colors.bg_secondary)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    list_state.select(selected_index);

    frame.render_stateful_widget(list, area, &mut list_state);
}
