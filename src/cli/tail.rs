//! # tail 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/tail.rs`

use clap::Args;

/// tail 子命令参数
#[derive(Args, Debug)]
pub struct TailArgs {
    /// Number of lines to show from the end
    #[arg(short = 'n', long, default_value_t = 10)]
    pub lines: usize,

    /// Input files (glob patterns allowed, none for stdin)
    pub files: Vec<String>,
}
