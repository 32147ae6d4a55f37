//! # 诊断输出工具
//!
//! 提供统一的终端诊断样式。stdout 只承载数据，所有诊断都写到 stderr。
//!
//! ## 依赖关系
//! - 被 `main.rs`、`commands/` 和 `batch/runner.rs` 使用
//! - 使用 `colored` crate

use crate::cli::ColorMode;
use colored::Colorize;

/// 按全局 `--color` 设置着色策略
pub fn configure_color(mode: ColorMode) {
    match mode {
        ColorMode::Auto => colored::control::unset_override(),
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
    }
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印即将执行的命令行 (xargs -t)
pub fn print_trace(cmdline: &str) {
    eprintln!("{}", cmdline.dimmed());
}
