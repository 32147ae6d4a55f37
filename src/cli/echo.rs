//! # echo 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/echo.rs`

use clap::Args;

/// echo 子命令参数
#[derive(Args, Debug)]
pub struct EchoArgs {
    /// Do not output the trailing newline
    #[arg(short = 'n', long = "no-newline", default_value_t = false)]
    pub no_newline: bool,

    /// Enable interpretation of backslash escapes (\n, \t, \\)
    #[arg(short = 'e', long, default_value_t = false)]
    pub escape: bool,

    /// Expand environment variables ($VAR and %VAR%)
    #[arg(short = 'E', long, default_value_t = false)]
    pub expand_env: bool,

    /// Strings to print
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub strings: Vec<String>,
}
