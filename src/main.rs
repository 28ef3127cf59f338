mod api;
mod app;
mod cli;
mod dialogs;
mod error;
mod event;
mod logging;
mod model;
mod remote;
mod storage;
mod store;
mod sync;
mod theme;
mod ui;
mod ui_state;

use std::io;
use std::panic;
use std::sync::Arc;

use clap::Parser;
use ratatui::DefaultTerminal;

use app::App;
use cli::{Cli, Commands};
use remote::HttpTodoApi;
use storage::config::{self, API_URL_ENV};
use theme::Theme;

/// 启动 TUI 界面
fn run_tui(api_url: Option<String>) -> io::Result<()> {
    match logging::init_file() {
        Ok(path) => tracing::debug!(path = %path.display(), "logging to file"),
        Err(e) => eprintln!("Logging disabled: {}", e),
    }

    let config = config::load_config();

    // 环境变量只在启动时读取一次
    let env_url = std::env::var(API_URL_ENV).ok();
    let base_url = match config::resolve_base_url(api_url.as_deref(), env_url.as_deref(), &config)
    {
        Ok(url) => url,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let api = Arc::new(HttpTodoApi::new(&base_url, config.api.timeout()));
    tracing::info!(base_url = api.base_url(), "starting todo client");

    // 初始化终端
    let mut terminal = ratatui::init();

    // 创建应用（立即发起首次拉取）
    let mut app = App::new(api, Theme::from_name(&config.theme.name));

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    ratatui::restore();

    result
}

fn main() -> io::Result<()> {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 解析命令行参数
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_else(Commands::default_command);

    match command {
        Commands::Tui { api_url } => {
            run_tui(api_url)?;
        }
        Commands::Serve { port, host, empty } => {
            logging::init_stderr();
            tokio::runtime::Runtime::new()?.block_on(async {
                cli::serve::execute(&host, port, empty).await;
            });
        }
        Commands::Init { force } => {
            cli::init::execute(force);
        }
    }

    Ok(())
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 应用已返回的请求结果
        app.poll_sync();

        // 渲染界面
        terminal.draw(|frame| ui::todos::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
