use clap::Parser;

use linkshelf::cli::Cli;
use linkshelf::config::init_config;
use linkshelf::interfaces::cli::run_cli_command;
use linkshelf::system::logging::init_logging;

// 单线程事件循环：唯一的挂起点是跳转计时器
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = init_config(cli.config.as_deref());
    let _guard = init_logging(&config);

    if let Err(e) = run_cli_command(cli.command).await {
        eprintln!("{}", e.format_colored());
        std::process::exit(1);
    }

    Ok(())
}
