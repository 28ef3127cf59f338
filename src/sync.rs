//! Remote Sync
//!
//! 每个请求在独立后台线程里执行，结果通过 mpsc 通道交回 UI 主循环，
//! 由主循环逐个应用到 Task Store。没有取消、没有重试，也没有请求序号：
//! 同一 todo 的两个并发更新，谁的响应后到谁生效。

use std::sync::{mpsc, Arc};
use std::thread;

use crate::error::{Result, SyncOp};
use crate::model::{NewTodo, Todo};
use crate::remote::TodoApi;

/// 后台请求结果
#[derive(Debug)]
pub enum SyncResult {
    Loaded(Result<Vec<Todo>>),
    Created(Result<Todo>),
    Updated { id: i64, result: Result<Todo> },
    Deleted { id: i64, result: Result<()> },
}

impl SyncResult {
    pub fn op(&self) -> SyncOp {
        match self {
            SyncResult::Loaded(_) => SyncOp::Fetch,
            SyncResult::Created(_) => SyncOp::Create,
            SyncResult::Updated { .. } => SyncOp::Update,
            SyncResult::Deleted { .. } => SyncOp::Delete,
        }
    }
}

/// 请求分发器
pub struct RemoteSync {
    api: Arc<dyn TodoApi>,
    result_tx: mpsc::Sender<SyncResult>,
    result_rx: mpsc::Receiver<SyncResult>,
    /// 尚未被 poll 取走的请求数
    in_flight: usize,
}

impl RemoteSync {
    pub fn new(api: Arc<dyn TodoApi>) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        Self {
            api,
            result_tx,
            result_rx,
            in_flight: 0,
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    fn spawn<F>(&mut self, name: &str, job: F)
    where
        F: FnOnce(&dyn TodoApi) -> SyncResult + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let tx = self.result_tx.clone();
        self.in_flight += 1;
        tracing::debug!(request = name, in_flight = self.in_flight, "dispatching request");

        let spawned = thread::Builder::new()
            .name(format!("todo-{}", name))
            .spawn(move || {
                let result = job(api.as_ref());
                // 接收端已丢弃（应用退出）时静默忽略
                let _ = tx.send(result);
            });

        if let Err(e) = spawned {
            tracing::error!(request = name, error = %e, "failed to spawn request thread");
            self.in_flight -= 1;
        }
    }

    /// GET /todos
    pub fn fetch_all(&mut self) {
        self.spawn("fetch", |api| SyncResult::Loaded(api.list()));
    }

    /// POST /todos
    pub fn create(&mut self, req: NewTodo) {
        self.spawn("create", move |api| SyncResult::Created(api.create(&req)));
    }

    /// PUT /todos/{id}，请求体为完整对象
    pub fn update(&mut self, todo: Todo) {
        self.spawn("update", move |api| SyncResult::Updated {
            id: todo.id,
            result: api.update(&todo),
        });
    }

    /// DELETE /todos/{id}
    pub fn delete(&mut self, id: i64) {
        self.spawn("delete", move |api| SyncResult::Deleted {
            id,
            result: api.delete(id),
        });
    }

    /// 非阻塞地取出所有已完成的结果（按到达顺序）
    pub fn poll(&mut self) -> Vec<SyncResult> {
        let results: Vec<SyncResult> = self.result_rx.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(results.len());
        results
    }

    /// 阻塞等待下一个结果（测试用）
    #[cfg(test)]
    pub fn recv_timeout(&mut self, timeout: std::time::Duration) -> Option<SyncResult> {
        let result = self.result_rx.recv_timeout(timeout).ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(result)
    }
}
