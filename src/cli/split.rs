//! # split 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/split.rs`

use clap::Args;

/// split 子命令参数
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Put N lines per output file (default 1000)
    #[arg(short = 'l', long, conflicts_with = "bytes")]
    pub lines: Option<u64>,

    /// Put SIZE bytes per output file (suffixes K, M, G)
    #[arg(short = 'b', long, value_name = "SIZE")]
    pub bytes: Option<String>,

    /// Use numeric suffixes instead of alphabetic
    #[arg(short = 'd', long, default_value_t = false)]
    pub numeric_suffixes: bool,

    /// File to split ('-' for stdin)
    pub file: String,

    /// Output file name prefix
    #[arg(default_value = "x")]
    pub prefix: String,
}
