//! # bashutils - 常用 shell 文本工具集
//!
//! 把一组常用的文本处理命令统一成单一可执行文件，另附批量执行引擎 `xargs`。
//!
//! ## 子命令
//! - 文本过滤: `echo`, `cat`, `head`, `tail`, `wc`, `cut`, `sort`, `uniq`,
//!   `grep`, `tr`, `paste`, `split`
//! - 批量执行: `xargs`
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── batch/     (xargs 执行引擎)
//!   ├── utils/      (输入、glob 展开、诊断输出)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod utils;

use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let cli = Cli::from_argv(&argv).unwrap_or_else(|e| e.exit());
    utils::output::configure_color(cli.color);

    if let Err(e) = commands::run(cli.command) {
        if e.is_broken_pipe() {
            std::process::exit(0);
        }
        if !e.is_silent() {
            utils::output::print_error(&e.to_string());
        }
        std::process::exit(e.exit_code());
    }
}
