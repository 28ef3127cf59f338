//! CLI 模块

pub mod init;
pub mod serve;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "todo")]
#[command(version)]
#[command(about = "Terminal to-do list backed by a REST API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the terminal client (default)
    Tui {
        /// Backend base URL (overrides TODO_API_URL and the config file)
        #[arg(long)]
        api_url: Option<String>,
    },
    /// Run the mock REST backend
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = serve::DEFAULT_PORT)]
        port: u16,
        /// Address to bind
        #[arg(long, default_value = serve::DEFAULT_HOST)]
        host: String,
        /// Start with no todos instead of the seed fixture
        #[arg(long)]
        empty: bool,
    },
    /// Write the default config file to ~/.todo/config.toml
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

impl Commands {
    /// 无子命令时的默认行为
    pub fn default_command() -> Self {
        Commands::Tui { api_url: None }
    }
}
