//! # cut 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/cut.rs`

use clap::Args;

/// cut 子命令参数
#[derive(Args, Debug)]
pub struct CutArgs {
    /// Select fields by delimiter (e.g. '1,3' or '2-4')
    #[arg(short = 'f', long)]
    pub fields: Option<String>,

    /// Field delimiter
    #[arg(short = 'd', long, default_value_t = '\t')]
    pub delimiter: char,

    /// Select character positions (e.g. '1-5,7')
    #[arg(short = 'c', long)]
    pub characters: Option<String>,

    /// Input files (glob patterns allowed, none for stdin)
    pub files: Vec<String>,
}
