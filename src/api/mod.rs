//! Mock REST backend
//!
//! 实现客户端依赖的四个端点，供本地开发和测试使用。

pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use state::MockStore;

/// Create the todo router over the given store
pub fn create_router(store: MockStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/todos",
            get(handlers::todos::list_todos).post(handlers::todos::create_todo),
        )
        .route(
            "/todos/{id}",
            put(handlers::todos::update_todo).delete(handlers::todos::delete_todo),
        )
        .route("/__reset", post(handlers::todos::reset_todos))
        .with_state(store)
        .layer(cors)
}

/// Serve the router on an already-bound listener until the future is dropped
pub async fn serve(listener: tokio::net::TcpListener, store: MockStore) -> std::io::Result<()> {
    let app = create_router(store);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Start the mock server on `host:port`
pub async fn start_server(host: &str, port: u16, store: MockStore) -> std::io::Result<()> {
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(%addr, todos = store.list().len(), "mock todo server listening");
    println!("Todo mock API: http://{}/todos", addr);

    serve(listener, store).await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // 无法安装信号处理时一直运行
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down mock server");
}

/// 在独立线程上启动 mock 服务（测试用），返回 base URL
#[cfg(test)]
pub fn spawn_test_server(store: MockStore) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    listener
        .set_nonblocking(true)
        .expect("set listener non-blocking");
    let addr = listener.local_addr().expect("listener address");

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("build test runtime");
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("tokio listener");
            let _ = axum::serve(listener, create_router(store)).await;
        });
    });

    format!("http://{}", addr)
}
