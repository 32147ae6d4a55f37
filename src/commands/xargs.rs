//! # xargs 命令实现
//!
//! 从标准输入读取条目，分批追加到命令模板后执行。
//!
//! ## 功能
//! - 未给出命令时默认执行 `bashutils echo`
//! - 模板程序名为 `bashutils` 时在进程内分派，不再启动新进程
//! - 任一调用失败立即停止，退出码取自失败的调用
//!
//! ## 依赖关系
//! - 使用 `cli/xargs.rs` 定义的参数
//! - 使用 `batch/` 执行引擎
//! - 进程内分派时回调 `commands::run`

use crate::batch::{
    run_engine, scan, BatchRunner, Builtin, CommandTemplate, StderrReporter, SystemResolver,
};
use crate::cli::xargs::XargsArgs;
use crate::cli::Cli;
use crate::error::Result;
use crate::utils::output;

use std::io;

/// 本程序的名字，也是默认命令的程序名
const SELF_PROGRAM: &str = env!("CARGO_PKG_NAME");

const USAGE: &str = "\
Build and execute command lines from standard input

Usage: bashutils xargs [OPTIONS] [COMMAND [INITIAL-ARGS]...]

Options:
  -n, --max-args <N>         Use at most N items per command line (0 = unlimited)
  -I, --replace <STR>        Replace STR in the initial arguments with each item
  -0, --null                 Items are separated by a null byte
  -d, --delimiter <CHAR>     Items are separated by CHAR (\\n, \\t, \\r, \\0 accepted)
  -r, --no-run-if-empty      Do not run the command if the input is empty
  -t, --verbose              Print each command line to stderr before running it
  -h, --help                 Print help
      --                     End of options; everything after is the command

The command defaults to 'bashutils echo'.
";

/// 进程内执行 `bashutils <子命令> ...`
struct SelfDispatch;

impl Builtin for SelfDispatch {
    fn run(&self, argv: &[String]) -> i32 {
        let cli = match Cli::from_argv(argv) {
            Ok(cli) => cli,
            Err(e) => {
                // --help / --version 也走这里，退出码为 0
                let _ = e.print();
                return e.exit_code();
            }
        };

        match super::run(cli.command) {
            Ok(()) => 0,
            Err(e) if e.is_broken_pipe() => 0,
            Err(e) => {
                if !e.is_silent() {
                    output::print_error(&e.to_string());
                }
                e.exit_code()
            }
        }
    }
}

/// 执行 xargs 命令
pub fn execute(args: XargsArgs) -> Result<()> {
    let scanned = scan(&args.args)?;
    if scanned.help {
        print!("{USAGE}");
        return Ok(());
    }

    let template = CommandTemplate::new(scanned.command)
        .unwrap_or_else(default_template);

    let resolver = SystemResolver::new().with_builtin(SELF_PROGRAM, Box::new(SelfDispatch));
    let mut runner = BatchRunner::new(&resolver, StderrReporter, scanned.config.verbose);

    run_engine(&scanned.config, &template, io::stdin().lock(), &mut runner)?;
    Ok(())
}

fn default_template() -> CommandTemplate {
    CommandTemplate::from_program(SELF_PROGRAM, &["echo"])
}
