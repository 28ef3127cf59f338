use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Borders, Widget},
    Frame,
};

use crate::app::App;

use super::components::{
    add_todo_dialog, confirm_dialog, empty_state, footer, header, help_panel, toast, todo_list,
};

/// 渲染 Todos 页面
pub fn render(frame: &mut Frame, app: &App) {
    render_at(frame, app, Utc::now());
}

fn render_at(frame: &mut Frame, app: &App, now: DateTime<Utc>) {
    let area = frame.area();
    let colors = &app.ui.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    if app.store.is_loading() {
        empty_state::render_loading(frame, area, colors);
        return;
    }

    let error = app.store.error();
    let show_footer = !app.store.is_empty();

    let [header_area, error_area, list_area, footer_area, shortcuts_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Length(if error.is_some() { 1 } else { 0 }),
        Constraint::Fill(1),
        Constraint::Length(if show_footer { 3 } else { 1 }),
        Constraint::Length(1),
    ])
    .areas(area);

    header::render(frame, header_area, app.has_pending_requests(), colors);

    if let Some(message) = error {
        header::render_error(frame, error_area, message, colors);
    }

    let visible = app.visible_todos(now);
    if visible.is_empty() {
        empty_state::render(frame, list_area, colors);
    } else {
        todo_list::render(
            frame,
            list_area,
            &visible,
            app.ui.list_state.selected(),
            now,
            colors,
        );
    }

    if show_footer {
        footer::render(
            frame,
            footer_area,
            &app.items_left_label(now),
            app.filter,
            colors,
        );
    } else {
        // 无数据时只画底边
        Block::default()
            .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
            .border_style(Style::default().fg(colors.border))
            .render(footer_area, frame.buffer_mut());
    }

    footer::render_shortcuts(frame, shortcuts_area, !visible.is_empty(), colors);

    // 弹窗
    if app.dialogs.show_add_dialog {
        add_todo_dialog::render(frame, &app.dialogs.add_form, colors);
    }

    if app.dialogs.delete_confirm.is_pending() {
        confirm_dialog::render(frame, app.pending_delete_name(), colors);
    }

    if app.dialogs.show_help {
        help_panel::render(frame, colors);
    }

    // 弹窗打开时不显示 Toast，避免遮挡
    if let Some(ref toast) = app.ui.toast {
        if !toast.is_expired() && !app.dialogs.has_active_dialog() {
            toast::render(frame, &toast.message, colors);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::api::state::MockStore;
    use crate::model::Filter;
    use crate::sync::testing::InMemoryApi;
    use crate::theme::Theme;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app_with(store: MockStore) -> App {
        let api: Arc<InMemoryApi> = InMemoryApi::new(store);
        App::new(api, Theme::Dark)
    }

    #[test]
    fn test_loading_then_list() {
        let mut app = app_with(MockStore::seeded());
        let text = screen(&app);
        assert!(text.contains(empty_state::LOADING_TEXT));
        assert!(!text.contains("Test Todo 1"));

        app.settle();
        let text = screen(&app);
        assert!(!text.contains(empty_state::LOADING_TEXT));
        assert!(text.contains("Todos"));
        assert!(text.contains("[ ] Test Todo 1"));
        assert!(text.contains("[x] Test Todo 2"));
        assert!(text.contains("No deadline"));
        assert!(text.contains("2 items left."));
    }

    #[test]
    fn test_filtered_footer_count() {
        let mut app = app_with(MockStore::seeded());
        app.settle();
        app.set_filter(Filter::Completed);

        let text = screen(&app);
        assert!(text.contains("1 item left."));
        assert!(!text.contains("Test Todo 1"));
    }

    #[test]
    fn test_empty_list_has_no_footer() {
        let mut app = app_with(MockStore::empty());
        app.settle();

        let text = screen(&app);
        assert!(text.contains(empty_state::EMPTY_TEXT));
        assert!(!text.contains("items left"));
    }

    #[test]
    fn test_filter_empty_keeps_footer() {
        let mut app = app_with(MockStore::new(vec![crate::model::Todo {
            id: 1,
            task_name: "Only".to_string(),
            deadline: None,
            done: false,
        }]));
        app.settle();
        app.set_filter(Filter::Completed);

        let text = screen(&app);
        assert!(text.contains(empty_state::EMPTY_TEXT));
        assert!(text.contains("0 items left."));
    }

    #[test]
    fn test_error_banner() {
        let mut app = app_with(MockStore::seeded());
        app.settle();
        app.store.set_error("Failed to delete todo");

        let text = screen(&app);
        assert!(text.contains("Failed to delete todo"));
    }

    #[test]
    fn test_delete_dialog() {
        let mut app = app_with(MockStore::seeded());
        app.settle();
        app.request_delete(1);

        let text = screen(&app);
        assert!(text.contains("Delete Todo"));
        assert!(text.contains(confirm_dialog::MESSAGE));
        assert!(text.contains("\"Test Todo 1\""));
    }

    #[test]
    fn test_add_dialog() {
        let mut app = app_with(MockStore::seeded());
        app.settle();
        app.open_add_dialog();
        app.dialogs.add_form.task_name = "Buy milk".to_string();

        let text = screen(&app);
        assert!(text.contains("Add Todo"));
        assert!(text.contains("Task: Buy milk"));
    }
}
