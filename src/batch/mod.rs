//! # 批量执行模块 (xargs 引擎)
//!
//! 从输入流读取条目，分批后代入命令模板，逐个启动子进程。
//!
//! ## 流程
//! ```text
//! ItemCollector ──> partition ──> build_invocations ──> BatchRunner
//!   (切分条目)       (分批)          (构造 argv)          (顺序执行)
//! ```
//! 单线程顺序执行：上一个子进程结束后才构造并启动下一个。
//! 任一失败立即中止，后续批次不会被构造 (fail-fast)。
//!
//! ## 依赖关系
//! - 被 `commands/xargs.rs` 调用
//! - 子模块: collector, batcher, invocation, options, runner

pub mod batcher;
pub mod collector;
pub mod invocation;
pub mod options;
pub mod runner;

pub use invocation::CommandTemplate;
pub use options::{scan, XargsConfig};
pub use runner::{BatchRunner, Builtin, Reporter, Resolver, StderrReporter, SystemResolver};

use batcher::partition;
use collector::ItemCollector;
use invocation::build_invocations;

use crate::error::Result;
use std::io::Read;

/// 读取输入并执行全部调用，返回调用次数
pub fn run_engine<I, R, P>(
    config: &XargsConfig,
    template: &CommandTemplate,
    input: I,
    runner: &mut BatchRunner<'_, R, P>,
) -> Result<usize>
where
    I: Read,
    R: Resolver,
    P: Reporter,
{
    let items = ItemCollector::new(config.delimiter).collect(input)?;
    let placeholder = config.placeholder.as_deref();

    if items.is_empty() {
        // 占位符模式没有可代入的条目
        if config.no_run_if_empty || placeholder.is_some() {
            return Ok(0);
        }
        runner.run(&template.with_trailing(&[]))?;
        return Ok(runner.launched());
    }

    // 占位符模式每个条目单独调用，批量上限不起作用
    let max_args = if placeholder.is_some() {
        None
    } else {
        config.max_args
    };

    for batch in partition(items, max_args) {
        for invocation in build_invocations(template, &batch, placeholder) {
            runner.run(&invocation)?;
        }
    }

    Ok(runner.launched())
}
