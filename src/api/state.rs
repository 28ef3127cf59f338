//! Mock 服务端状态
//!
//! 显式的内存 todo 集合，由 axum `State` 共享。测试之间通过 `reset()`
//! 恢复种子数据，不使用任何全局变量。

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{TimeZone, Utc};

use crate::model::{NewTodo, Todo, TodoPatch};

/// 默认种子数据：一个未完成无截止时间，一个已完成且截止时间已过
pub fn seed_todos() -> Vec<Todo> {
    vec![
        Todo {
            id: 1,
            task_name: "Test Todo 1".to_string(),
            deadline: None,
            done: false,
        },
        Todo {
            id: 2,
            task_name: "Test Todo 2".to_string(),
            deadline: Utc.with_ymd_and_hms(2025, 12, 15, 10, 0, 0).single(),
            done: true,
        },
    ]
}

#[derive(Debug)]
struct Inner {
    todos: Vec<Todo>,
    seed: Vec<Todo>,
    last_id: i64,
}

/// 可克隆的 mock 存储句柄
#[derive(Debug, Clone)]
pub struct MockStore {
    inner: Arc<RwLock<Inner>>,
}

impl Default for MockStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl MockStore {
    /// 使用指定种子创建
    pub fn new(seed: Vec<Todo>) -> Self {
        let last_id = seed.iter().map(|t| t.id).max().unwrap_or(0);
        Self {
            inner: Arc::new(RwLock::new(Inner {
                todos: seed.clone(),
                seed,
                last_id,
            })),
        }
    }

    /// 使用默认种子创建
    pub fn seeded() -> Self {
        Self::new(seed_todos())
    }

    /// 空集合
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    // 锁中毒时继续使用内部数据：mock 数据不存在半写入状态
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    /// 恢复到种子数据
    pub fn reset(&self) {
        let mut inner = self.write();
        inner.todos = inner.seed.clone();
    }

    pub fn list(&self) -> Vec<Todo> {
        self.read().todos.clone()
    }

    /// 创建 todo，id 取当前毫秒时间戳并保证严格递增
    pub fn create(&self, req: NewTodo) -> Todo {
        let mut inner = self.write();
        let id = Utc::now().timestamp_millis().max(inner.last_id + 1);
        inner.last_id = id;

        let todo = Todo {
            id,
            task_name: req.task_name,
            deadline: req.deadline,
            done: false,
        };
        inner.todos.push(todo.clone());
        todo
    }

    /// 合并字段；id 不存在返回 None
    pub fn update(&self, id: i64, patch: TodoPatch) -> Option<Todo> {
        let mut inner = self.write();
        let todo = inner.todos.iter_mut().find(|t| t.id == id)?;
        todo.apply_patch(patch);
        Some(todo.clone())
    }

    /// 删除；id 不存在返回 false
    pub fn delete(&self, id: i64) -> bool {
        let mut inner = self.write();
        let Some(index) = inner.todos.iter().position(|t| t.id == id) else {
            return false;
        };
        inner.todos.remove(index);
        true
    }
}
