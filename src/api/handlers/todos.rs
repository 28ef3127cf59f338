//! Todo API handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::api::state::MockStore;
use crate::model::{NewTodo, Todo, TodoPatch};

/// 错误响应体 `{message}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            message: message.into(),
        }),
    )
        .into_response()
}

/// 路径中的 id 不是数字时按不存在处理
fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// GET /todos
pub async fn list_todos(State(store): State<MockStore>) -> Json<Vec<Todo>> {
    Json(store.list())
}

/// POST /todos
pub async fn create_todo(
    State(store): State<MockStore>,
    body: Result<Json<NewTodo>, JsonRejection>,
) -> Response {
    let Json(mut req) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    req.task_name = req.task_name.trim().to_string();
    if req.task_name.is_empty() {
        return bad_request("Task name is required");
    }

    let todo = store.create(req);
    tracing::debug!(id = todo.id, "created todo");
    Json(todo).into_response()
}

/// PUT /todos/{id}
pub async fn update_todo(
    State(store): State<MockStore>,
    Path(id): Path<String>,
    body: Result<Json<TodoPatch>, JsonRejection>,
) -> Response {
    let Json(patch) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    match parse_id(&id).and_then(|id| store.update(id, patch)) {
        Some(todo) => {
            tracing::debug!(id = todo.id, done = todo.done, "updated todo");
            Json(todo).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// DELETE /todos/{id}
pub async fn delete_todo(State(store): State<MockStore>, Path(id): Path<String>) -> StatusCode {
    match parse_id(&id) {
        Some(id) if store.delete(id) => {
            tracing::debug!(id, "deleted todo");
            StatusCode::OK
        }
        _ => StatusCode::NOT_FOUND,
    }
}

/// POST /__reset
pub async fn reset_todos(State(store): State<MockStore>) -> StatusCode {
    store.reset();
    StatusCode::NO_CONTENT
}
