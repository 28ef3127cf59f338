//! Task Store
//!
//! 客户端内存中的 todo 列表，以及 loading 标记和单一的 error slot。
//! 所有修改都只在服务端确认之后发生，这里不做乐观更新。

use crate::error::{SyncOp, TodoError};
use crate::model::Todo;

/// 客户端 todo 状态
#[derive(Debug)]
pub struct TaskStore {
    /// 服务端顺序的 todo 列表
    todos: Vec<Todo>,
    /// 首次拉取完成前为 true
    loading: bool,
    /// 当前显示的错误（last-write-wins）
    error: Option<String>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// 初始状态：等待首次拉取
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn find(&self, id: i64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// 新的用户操作开始时清空 error slot
    pub fn begin_action(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// 记录一次同步失败，返回显示给用户的文案
    pub fn record_failure(&mut self, op: SyncOp, err: &TodoError) -> String {
        let message = op.user_message(err);
        self.error = Some(message.clone());
        message
    }

    /// 首次拉取结果：成功整体替换，失败清空列表并设置错误
    pub fn apply_loaded(&mut self, result: Result<Vec<Todo>, TodoError>) {
        match result {
            Ok(todos) => self.todos = todos,
            Err(err) => {
                self.todos.clear();
                self.record_failure(SyncOp::Fetch, &err);
            }
        }
        self.loading = false;
    }

    /// 服务端确认创建后追加到末尾
    pub fn add(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// 用服务端返回的记录替换同 id 的项；找不到时返回 false
    pub fn update(&mut self, id: i64, record: Todo) -> bool {
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// 服务端确认删除后移除；找不到时返回 false
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        self.todos.len() != before
    }
}
