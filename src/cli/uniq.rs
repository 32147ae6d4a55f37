//! # uniq 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/uniq.rs`

use clap::Args;

/// uniq 子命令参数
#[derive(Args, Debug)]
pub struct UniqArgs {
    /// Prefix lines with the number of occurrences
    #[arg(short = 'c', long, default_value_t = false)]
    pub count: bool,

    /// Only print duplicate lines
    #[arg(short = 'd', long, default_value_t = false)]
    pub repeated: bool,

    /// Only print lines that are not repeated
    #[arg(short = 'u', long, default_value_t = false)]
    pub unique: bool,

    /// Input files (glob patterns allowed, none for stdin)
    pub files: Vec<String>,
}
