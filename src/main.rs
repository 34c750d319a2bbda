use anyhow::Result;
use config::Config;
use shell::run_shell;

pub mod action;
pub mod action_handling;
pub mod app;
pub mod catalog;
pub mod challenge;
pub mod config;
pub mod daily_action;
pub mod database;
pub mod decision;
pub mod response;
pub mod shell;
pub mod simulation;
pub mod state;
pub mod stats;
pub mod streak;
pub mod tip;

fn main() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();
    let config = Config::from_env()?;
    run_shell(config)
}
