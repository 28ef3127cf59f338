//! Mock backend CLI command

use crate::api;
use crate::api::state::MockStore;

/// Default port for the mock server
pub const DEFAULT_PORT: u16 = 3001;

/// Default bind address
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Run the mock server until Ctrl+C
pub async fn execute(host: &str, port: u16, empty: bool) {
    let store = if empty {
        MockStore::empty()
    } else {
        MockStore::seeded()
    };

    println!("\nPress Ctrl+C to stop");

    if let Err(e) = api::start_server(host, port, store).await {
        tracing::error!(error = %e, "mock server failed");
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
