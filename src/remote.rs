//! Todo REST 客户端
//!
//! `TodoApi` 是同步层与传输层之间的接缝；`HttpTodoApi` 基于 ureq 的阻塞实现，
//! 由 `sync` 模块放在后台线程里调用，不会阻塞 UI。

use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, TodoError};
use crate::model::{NewTodo, Todo};

/// 后端四个端点
pub trait TodoApi: Send + Sync {
    /// GET /todos
    fn list(&self) -> Result<Vec<Todo>>;
    /// POST /todos
    fn create(&self, req: &NewTodo) -> Result<Todo>;
    /// PUT /todos/{id}
    fn update(&self, todo: &Todo) -> Result<Todo>;
    /// DELETE /todos/{id}
    fn delete(&self, id: i64) -> Result<()>;
}

/// 非 2xx 响应中的错误体
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP 实现
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpTodoApi {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("grove-todo/", env!("CARGO_PKG_VERSION")))
            .build();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }
}

/// 读取非 2xx 响应体中的 `{message}`
///
/// 响应体不是 JSON 时返回 Err；是 JSON 但没有 `message` 字段时返回 Ok(None)。
fn error_message(response: ureq::Response) -> std::result::Result<Option<String>, String> {
    let body = response.into_string().map_err(|e| e.to_string())?;
    serde_json::from_str::<ErrorBody>(&body)
        .map(|body| body.message)
        .map_err(|e| e.to_string())
}

/// ureq 错误转换：状态码错误尝试读取 `{message}`
fn map_ureq_error(err: ureq::Error) -> TodoError {
    match err {
        ureq::Error::Status(status, response) => TodoError::Status {
            status,
            message: error_message(response).ok().flatten(),
        },
        ureq::Error::Transport(transport) => TodoError::transport(transport.to_string()),
    }
}

/// POST 失败时响应体必须是 JSON，否则按网络层错误处理
fn map_create_error(err: ureq::Error) -> TodoError {
    match err {
        ureq::Error::Status(status, response) => match error_message(response) {
            Ok(message) => TodoError::Status { status, message },
            Err(e) => TodoError::transport(format!("HTTP {} with unreadable body: {}", status, e)),
        },
        other => map_ureq_error(other),
    }
}

fn decode<T: serde::de::DeserializeOwned>(response: ureq::Response) -> Result<T> {
    response
        .into_json::<T>()
        .map_err(|e| TodoError::transport(format!("invalid response body: {}", e)))
}

impl TodoApi for HttpTodoApi {
    fn list(&self) -> Result<Vec<Todo>> {
        let response = self
            .agent
            .get(&self.collection_url())
            .call()
            .map_err(map_ureq_error)?;
        decode(response)
    }

    fn create(&self, req: &NewTodo) -> Result<Todo> {
        let response = self
            .agent
            .post(&self.collection_url())
            .send_json(req)
            .map_err(map_create_error)?;
        decode(response)
    }

    fn update(&self, todo: &Todo) -> Result<Todo> {
        let response = self
            .agent
            .put(&self.item_url(todo.id))
            .send_json(todo)
            .map_err(map_ureq_error)?;
        decode(response)
    }

    fn delete(&self, id: i64) -> Result<()> {
        self.agent
            .delete(&self.item_url(id))
            .call()
            .map_err(map_ureq_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{self, state::MockStore};

    fn client(store: MockStore) -> HttpTodoApi {
        let base_url = api::spawn_test_server(store);
        HttpTodoApi::new(&base_url, Duration::from_secs(5))
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let api = HttpTodoApi::new("http://localhost:3001/", Duration::from_secs(1));
        assert_eq!(api.base_url(), "http://localhost:3001");
        assert_eq!(api.item_url(7), "http://localhost:3001/todos/7");
    }

    #[test]
    fn test_list_returns_seed() {
        let api = client(MockStore::seeded());
        let todos = api.list().unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].task_name, "Test Todo 1");
        assert_eq!(todos[1].task_name, "Test Todo 2");
    }

    #[test]
    fn test_create_update_delete_roundtrip_against_server() {
        let store = MockStore::empty();
        let api = client(store.clone());

        let created = api
            .create(&NewTodo {
                task_name: "Write report".to_string(),
                deadline: None,
            })
            .unwrap();
        assert_eq!(created.task_name, "Write report");
        assert!(!created.done);

        let updated = api.update(&created.toggled()).unwrap();
        assert!(updated.done);
        assert!(store.list()[0].done);

        api.delete(created.id).unwrap();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_create_error_carries_server_message() {
        let api = client(MockStore::empty());
        let err = api
            .create(&NewTodo {
                task_name: "  ".to_string(),
                deadline: None,
            })
            .unwrap_err();
        match err {
            TodoError::Status { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message.as_deref(), Some("Task name is required"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    fn status_error(status: u16, body: &str) -> ureq::Error {
        ureq::Error::Status(status, ureq::Response::new(status, "Error", body).unwrap())
    }

    #[test]
    fn test_create_error_with_non_json_body_is_transport() {
        let err = map_create_error(status_error(500, "<html>Internal Server Error</html>"));
        assert!(matches!(err, TodoError::Transport(_)));
        assert_eq!(
            crate::error::SyncOp::Create.user_message(&err),
            "An unexpected error occurred while creating the todo."
        );
    }

    #[test]
    fn test_create_error_json_without_message() {
        let err = map_create_error(status_error(500, r#"{"error":"boom"}"#));
        assert!(matches!(err, TodoError::Status { status: 500, message: None }));
        assert_eq!(
            crate::error::SyncOp::Create.user_message(&err),
            "Failed to create todo"
        );

        let err = map_create_error(status_error(422, r#"{"message":"Too long"}"#));
        assert!(matches!(
            err,
            TodoError::Status { status: 422, message: Some(ref m) } if m == "Too long"
        ));
    }

    #[test]
    fn test_unknown_id_is_status_404() {
        let api = client(MockStore::seeded());
        let err = api.delete(999).unwrap_err();
        assert!(matches!(err, TodoError::Status { status: 404, .. }));

        let ghost = Todo {
            id: 999,
            task_name: "ghost".to_string(),
            deadline: None,
            done: true,
        };
        let err = api.update(&ghost).unwrap_err();
        assert!(matches!(err, TodoError::Status { status: 404, message: None }));
    }

    #[test]
    fn test_unreachable_server_is_transport_error() {
        // 绑定后立即释放端口，保证连接被拒绝
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let api = HttpTodoApi::new(
            &format!("http://127.0.0.1:{}", port),
            Duration::from_secs(2),
        );
        assert!(matches!(api.list(), Err(TodoError::Transport(_))));
    }
}
