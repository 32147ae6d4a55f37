//! # wc 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/wc.rs`

use clap::Args;

/// wc 子命令参数
#[derive(Args, Debug)]
pub struct WcArgs {
    /// Print the newline count
    #[arg(short = 'l', long, default_value_t = false)]
    pub lines: bool,

    /// Print the word count
    #[arg(short = 'w', long, default_value_t = false)]
    pub words: bool,

    /// Print the byte count
    #[arg(short = 'c', long, default_value_t = false)]
    pub bytes: bool,

    /// Input files (glob patterns allowed, none for stdin)
    pub files: Vec<String>,
}
