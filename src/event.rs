use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;
use crate::model::Filter;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // 优先处理弹窗事件

    // 帮助面板
    if app.dialogs.show_help {
        handle_help_key(app, key);
        return;
    }

    // 删除确认
    if app.dialogs.delete_confirm.is_pending() {
        handle_confirm_dialog_key(app, key);
        return;
    }

    // Add Todo 弹窗
    if app.dialogs.show_add_dialog {
        handle_add_dialog_key(app, key);
        return;
    }

    // 首次加载期间只允许退出
    if app.store.is_loading() {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            app.quit();
        }
        return;
    }

    handle_list_key(app, key);
}

/// 处理列表页的键盘事件
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // 导航
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // 切换完成状态
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),

        // 新增
        KeyCode::Char('a') => app.open_add_dialog(),

        // 删除（先进入确认）
        KeyCode::Char('d') | KeyCode::Char('x') => app.request_delete_selected(),

        // 过滤
        KeyCode::Char('1') => app.set_filter(Filter::All),
        KeyCode::Char('2') => app.set_filter(Filter::Active),
        KeyCode::Char('3') => app.set_filter(Filter::Completed),
        KeyCode::Tab => app.cycle_filter(),

        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Char('?') => app.dialogs.show_help = true,

        _ => {}
    }
}

/// 处理删除确认弹窗
fn handle_confirm_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 确认
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.confirm_delete();
        }

        // 取消
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.cancel_delete();
        }

        _ => {}
    }
}

/// 处理 Add Todo 弹窗
fn handle_add_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_form(),

        // 关闭（保留已输入内容）
        KeyCode::Esc => app.close_add_dialog(),

        KeyCode::Tab | KeyCode::BackTab => app.dialogs.add_form.toggle_focus(),

        KeyCode::Backspace => app.dialogs.add_form.delete_char(),

        KeyCode::Char(c) => app.dialogs.add_form.input_char(c),

        _ => {}
    }
}

fn handle_help_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 关闭帮助面板
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
            app.dialogs.show_help = false;
        }
        _ => {}
    }
}
