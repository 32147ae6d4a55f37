//! # head 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/head.rs`

use clap::Args;

/// head 子命令参数
#[derive(Args, Debug)]
pub struct HeadArgs {
    /// Number of lines to show from the start
    #[arg(short = 'n', long, default_value_t = 10)]
    pub lines: usize,

    /// Input files (glob patterns allowed, none for stdin)
    pub files: Vec<String>,
}
