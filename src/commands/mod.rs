//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用，`xargs` 进程内自调用时也会调用
//! - 使用 `cli/`, `batch/`, `utils/`

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

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Echo(args) => echo::execute(args),
        Commands::Cat(args) => cat::execute(args),
        Commands::Head(args) => head::execute(args),
        Commands::Tail(args) => tail::execute(args),
        Commands::Wc(args) => wc::execute(args),
        Commands::Cut(args) => cut::execute(args),
        Commands::Sort(args) => sort::execute(args),
        Commands::Uniq(args) => uniq::execute(args),
        Commands::Grep(args) => grep::execute(args),
        Commands::Tr(args) => tr::execute(args),
        Commands::Paste(args) => paste::execute(args),
        Commands::Split(args) => split::execute(args),
        Commands::Xargs(args) => xargs::execute(args),
    }
}
