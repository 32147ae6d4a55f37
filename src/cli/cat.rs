//! # cat 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/cat.rs`

use clap::Args;

/// cat 子命令参数
#[derive(Args, Debug)]
pub struct CatArgs {
    /// Files to concatenate (glob patterns allowed, '-' or none for stdin)
    pub files: Vec<String>,
}
