//! # sort 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/sort.rs`

use clap::Args;

/// sort 子命令参数
#[derive(Args, Debug)]
pub struct SortArgs {
    /// Sort in reverse order
    #[arg(short = 'r', long, default_value_t = false)]
    pub reverse: bool,

    /// Compare according to string numerical value
    #[arg(short = 'n', long = "numeric-sort", default_value_t = false)]
    pub numeric: bool,

    /// Output only the first of an equal run
    #[arg(short = 'u', long, default_value_t = false)]
    pub unique: bool,

    /// Input files (glob patterns allowed, none for stdin)
    pub files: Vec<String>,
}
