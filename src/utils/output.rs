//! # 终端状态输出
//!
//! kkrjij 的 stdout 只放结果：平均值模式下是一个数，表格模式下是表格。
//! 其余状态行（晶格、Tc、警告、导出文件路径、错误）都经由这里写到 stderr，
//! 带彩色前缀，便于 `kkrjij Fe.out 1 2 > jij.txt` 这样的重定向。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `main.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 导出文件成功
pub fn print_success(msg: &str) {
    eprintln!("{} {}", "[OK]".green().bold(), msg);
}

/// 致命错误（随后以非零状态退出）
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 不影响结果的异常，如多个 Jij 块、单位换算不一致
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 报告附带信息：晶格、Tc、行数
pub fn print_info(msg: &str) {
    eprintln!("{} {}", "[*]".blue().bold(), msg);
}

/// 表格模式开头的文件名标题
pub fn print_header(title: &str) {
    let rule = "─".repeat(60);
    eprintln!("\n{}", rule.dimmed());
    eprintln!("  {}", title.bold());
    eprintln!("{}\n", rule.dimmed());
}
