//! # grep 子命令 CLI 定义
//!
//! 给出 `-e` 时，所有位置参数都视为文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/grep.rs`

use clap::Args;

/// grep 子命令参数
#[derive(Args, Debug)]
pub struct GrepArgs {
    /// Ignore case distinctions
    #[arg(short = 'i', long, default_value_t = false)]
    pub ignore_case: bool,

    /// Select non-matching lines
    #[arg(short = 'v', long, default_value_t = false)]
    pub invert_match: bool,

    /// Prefix each line with its line number
    #[arg(short = 'n', long, default_value_t = false)]
    pub line_number: bool,

    /// Use PATTERN as the regular expression
    #[arg(short = 'e', long = "regexp", value_name = "PATTERN")]
    pub regexp: Option<String>,

    /// Pattern followed by input files (glob patterns allowed, none for stdin)
    #[arg(value_name = "PATTERN | FILE")]
    pub args: Vec<String>,
}
