use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::dialogs::DialogState;
use crate::model::{filter_todos, items_left_label, parse_deadline_input, Filter, NewTodo, Todo};
use crate::remote::TodoApi;
use crate::store::TaskStore;
use crate::sync::{RemoteSync, SyncResult};
use crate::theme::Theme;
use crate::ui_state::UiState;

/// 表单截止时间无法解析时的提示
pub const INVALID_DEADLINE_MESSAGE: &str = "Invalid deadline: use YYYY-MM-DD HH:MM";

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 客户端 todo 状态
    pub store: TaskStore,
    /// 当前过滤视图
    pub filter: Filter,
    /// 对话框状态
    pub dialogs: DialogState,
    /// UI 状态
    pub ui: UiState,
    /// 远端同步
    sync: RemoteSync,
}

impl App {
    /// 创建应用并立即发起首次拉取
    pub fn new(api: Arc<dyn TodoApi>, theme: Theme) -> Self {
        let mut sync = RemoteSync::new(api);
        sync.fetch_all();

        Self {
            should_quit: false,
            store: TaskStore::new(),
            filter: Filter::All,
            dialogs: DialogState::new(),
            ui: UiState::new(theme),
            sync,
        }
    }

    // ========== Derived view ==========

    /// 当前过滤视图下可见的 todo
    pub fn visible_todos(&self, now: DateTime<Utc>) -> Vec<&Todo> {
        filter_todos(self.store.todos(), self.filter, now)
    }

    /// 过滤后的数量（不是全局未完成数）
    pub fn items_left(&self, now: DateTime<Utc>) -> usize {
        self.visible_todos(now).len()
    }

    pub fn items_left_label(&self, now: DateTime<Utc>) -> String {
        items_left_label(self.items_left(now))
    }

    /// 当前选中的 todo
    pub fn selected_todo(&self, now: DateTime<Utc>) -> Option<&Todo> {
        let index = self.ui.list_state.selected()?;
        self.visible_todos(now).get(index).copied()
    }

    fn clamp_selection(&mut self) {
        self.clamp_selection_at(Utc::now());
    }

    /// 可见列表会随时间变化（todo 过期后离开 Active 视图），每帧都要修正选中项
    fn clamp_selection_at(&mut self, now: DateTime<Utc>) {
        let len = self.items_left(now);
        self.ui.clamp_selection(len);
    }

    // ========== Navigation ==========

    pub fn select_next(&mut self) {
        let len = self.items_left(Utc::now());
        self.ui.select_next(len);
    }

    pub fn select_previous(&mut self) {
        let len = self.items_left(Utc::now());
        self.ui.select_previous(len);
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.clamp_selection();
    }

    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    pub fn cycle_theme(&mut self) {
        self.ui.cycle_theme();
        self.ui
            .show_toast(format!("Theme: {}", self.ui.theme.label()));
    }

    // ========== Add Dialog ==========

    pub fn open_add_dialog(&mut self) {
        self.dialogs.show_add_dialog = true;
    }

    /// 关闭弹窗，保留已输入内容
    pub fn close_add_dialog(&mut self) {
        self.dialogs.show_add_dialog = false;
    }

    /// 提交新增表单
    ///
    /// 名称为空时什么都不做；截止时间无法解析时只设置错误。
    /// 表单内容在服务端确认创建后才清空。
    pub fn submit_form(&mut self) {
        let task_name = self.dialogs.add_form.task_name.trim().to_string();
        if task_name.is_empty() {
            return;
        }

        self.store.begin_action();

        let deadline = match parse_deadline_input(&self.dialogs.add_form.deadline) {
            Ok(deadline) => deadline,
            Err(reason) => {
                tracing::debug!(%reason, "rejected deadline input");
                self.store.set_error(INVALID_DEADLINE_MESSAGE);
                return;
            }
        };

        self.close_add_dialog();
        self.sync.create(NewTodo {
            task_name,
            deadline,
        });
    }

    // ========== Toggle ==========

    /// 切换 done；等服务端返回后才更新列表
    pub fn toggle_done(&mut self, id: i64) {
        let Some(todo) = self.store.find(id) else {
            return;
        };
        let updated = todo.toggled();

        self.store.begin_action();
        self.sync.update(updated);
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_todo(Utc::now()).map(|t| t.id) {
            self.toggle_done(id);
        }
    }

    // ========== Delete Confirmation ==========

    /// 进入待确认状态，不发请求
    pub fn request_delete(&mut self, id: i64) {
        self.dialogs.delete_confirm.request(id);
    }

    pub fn request_delete_selected(&mut self) {
        if let Some(id) = self.selected_todo(Utc::now()).map(|t| t.id) {
            self.request_delete(id);
        }
    }

    /// 确认删除：立即回到 Idle，然后发出 DELETE
    pub fn confirm_delete(&mut self) {
        let Some(id) = self.dialogs.delete_confirm.take() else {
            return;
        };

        self.store.begin_action();
        self.sync.delete(id);
    }

    pub fn cancel_delete(&mut self) {
        self.dialogs.delete_confirm.cancel();
    }

    /// 待删除 todo 的名称（用于确认弹窗）
    pub fn pending_delete_name(&self) -> Option<&str> {
        let id = self.dialogs.delete_confirm.pending_id()?;
        self.store.find(id).map(|t| t.task_name.as_str())
    }

    // ========== Sync ==========

    /// 应用所有已完成的后台请求结果
    pub fn poll_sync(&mut self) {
        for result in self.sync.poll() {
            self.apply_sync_result(result);
        }
        self.clamp_selection();
    }

    /// 把一个请求结果合并进 Task Store（按到达顺序，后到者生效）
    pub fn apply_sync_result(&mut self, result: SyncResult) {
        let op = result.op();
        match result {
            SyncResult::Loaded(result) => {
                if let Err(ref e) = result {
                    tracing::warn!(op = op.label(), error = %e, "request failed");
                }
                if let Ok(ref todos) = result {
                    tracing::info!(count = todos.len(), "loaded todos");
                }
                self.store.apply_loaded(result);
            }
            SyncResult::Created(Ok(todo)) => {
                self.ui.show_toast(format!("Added: {}", todo.task_name));
                self.store.add(todo);
                self.dialogs.add_form.clear();
            }
            SyncResult::Updated { id, result: Ok(record) } => {
                if !self.store.update(id, record) {
                    tracing::debug!(id, "update result for a todo no longer in the list");
                }
            }
            SyncResult::Deleted { id, result: Ok(()) } => {
                self.store.remove(id);
                self.ui.show_toast("Todo deleted");
            }
            SyncResult::Created(Err(e))
            | SyncResult::Updated { result: Err(e), .. }
            | SyncResult::Deleted { result: Err(e), .. } => {
                tracing::warn!(op = op.label(), error = %e, "request failed");
                self.store.record_failure(op, &e);
            }
        }
        self.clamp_selection();
    }

    /// 是否还有未返回的请求
    pub fn has_pending_requests(&self) -> bool {
        self.sync.in_flight() > 0
    }

    /// 更新 Toast 状态（清理过期的 Toast）
    pub fn update_toast(&mut self) {
        self.ui.clear_expired_toast();
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// 等待所有后台请求返回并应用（测试用）
    #[cfg(test)]
    pub fn settle(&mut self) {
        while self.sync.in_flight() > 0 {
            match self.sync.recv_timeout(std::time::Duration::from_secs(5)) {
                Some(result) => self.apply_sync_result(result),
                None => panic!("timed out waiting for request"),
            }
        }
    }
}
