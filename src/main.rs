//! kkrjij 可执行入口

use clap::Parser;
use kkrjij::cli::Cli;
use kkrjij::{commands, utils};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&error_chain(&e));
        std::process::exit(1);
    }
}

/// `-v` 时默认 debug，否则只显示警告；RUST_LOG 优先
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// 错误信息加上底层原因
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut msg = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        msg.push_str(&format!("\nCaused by: {}", cause));
        source = cause.source();
    }
    msg
}
