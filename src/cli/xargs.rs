//! # xargs 子命令 CLI 定义
//!
//! 不使用 clap 的选项解析：命令本身可能以 `-` 开头，
//! 原始参数交给 `batch/options.rs` 的扫描器区分。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/xargs.rs`

use clap::Args;

/// xargs 子命令参数
#[derive(Args, Debug)]
pub struct XargsArgs {
    /// xargs options followed by the command and its initial arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}
