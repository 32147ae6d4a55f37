//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - 文本过滤: `echo`, `cat`, `head`, `tail`, `wc`, `cut`, `sort`, `uniq`,
//!   `grep`, `tr`, `paste`, `split`
//! - 批量执行: `xargs`（自行扫描参数，不经过 clap 的选项解析）
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `commands/xargs.rs`（进程内自调用）使用
//! - 子模块: 每个子命令一个

pub mod cat;
pub mod cut;
pub mod echo;
pub mod grep;
pub mod head;
pub mod paste;
pub mod sort;
pub mod split;
pub mod tail;
pub mod tr;
pub mod uniq;
pub mod wc;
pub mod xargs;

use clap::{Parser, Subcommand, ValueEnum};

/// bashutils - 常用 shell 文本工具集
#[derive(Parser, Debug)]
#[command(name = "bashutils")]
#[command(version)]
#[command(about = "Common shell text utilities and a batched command executor", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// When to colorize diagnostics
    #[arg(long, global = true, value_enum, default_value = "auto", env = "BASHUTILS_COLOR")]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// 从完整 argv（含程序名）解析
    ///
    /// clap 会吞掉位置参数前的第一个 `--`，
    /// xargs 的参数因此改用 `xargs` 之后的原始 token。
    pub fn from_argv(argv: &[String]) -> Result<Self, clap::Error> {
        let mut cli = Self::try_parse_from(argv)?;
        if let Commands::Xargs(args) = &mut cli.command {
            // 子命令之前只可能是全局选项，其取值不会是 `xargs`
            if let Some(pos) = argv.iter().skip(1).position(|a| a == "xargs") {
                args.args = argv[pos + 2..].to_vec();
            }
        }
        Ok(cli)
    }
}

/// 诊断着色策略
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ColorMode {
    /// Colorize when the terminal supports it
    Auto,
    /// Always colorize
    Always,
    /// Never colorize
    Never,
}

/// 可用的子命令
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Echo arguments to standard output
    Echo(echo::EchoArgs),

    /// Concatenate and display files
    Cat(cat::CatArgs),

    /// Output the first part of files
    Head(head::HeadArgs),

    /// Output the last part of files
    Tail(tail::TailArgs),

    /// Print newline, word, and byte counts for each file
    Wc(wc::WcArgs),

    /// Extract specific fields or character positions from lines
    Cut(cut::CutArgs),

    /// Sort lines of text files
    Sort(sort::SortArgs),

    /// Filter out adjacent repeated lines
    Uniq(uniq::UniqArgs),

    /// Print lines matching a pattern
    Grep(grep::GrepArgs),

    /// Translate or delete characters
    Tr(tr::TrArgs),

    /// Merge lines of files
    Paste(paste::PasteArgs),

    /// Split a file into pieces
    Split(split::SplitArgs),

    /// Build and execute command lines from standard input
    #[command(disable_help_flag = true, disable_version_flag = true)]
    Xargs(xargs::XargsArgs),
}
