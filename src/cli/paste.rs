//! # paste 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/paste.rs`

use clap::Args;

/// paste 子命令参数
#[derive(Args, Debug)]
pub struct PasteArgs {
    /// Use characters from LIST instead of TAB, cycling through them
    #[arg(short = 'd', long, value_name = "LIST")]
    pub delimiters: Option<String>,

    /// Paste one file at a time instead of in parallel
    #[arg(short = 's', long, default_value_t = false)]
    pub serial: bool,

    /// Input files (glob patterns allowed)
    #[arg(required = true)]
    pub files: Vec<String>,
}
