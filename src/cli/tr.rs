//! # tr 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/tr.rs`

use clap::Args;

/// tr 子命令参数
#[derive(Args, Debug)]
pub struct TrArgs {
    /// Delete characters in SET1
    #[arg(short = 'd', long, default_value_t = false)]
    pub delete: bool,

    /// Use the complement of SET1
    #[arg(short = 'c', long, default_value_t = false)]
    pub complement: bool,

    /// Characters to translate from (ranges like a-z allowed)
    pub set1: String,

    /// Characters to translate to
    pub set2: Option<String>,
}
