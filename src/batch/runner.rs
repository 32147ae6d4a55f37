//! # 调用执行器
//!
//! 顺序执行每个 `Invocation`，阻塞等待子进程结束后再执行下一个。
//!
//! ## 功能
//! - 通过 `Resolver` 决定程序是外部进程还是进程内实现
//! - 子进程继承 stdin/stdout/stderr，不做缓冲或重定向
//! - 启动失败 -> `Launch`，非零退出 -> `ChildExit`
//! - verbose 模式下执行前通过 `Reporter` 报告 argv
//!
//! ## 依赖关系
//! - 被 `batch/mod.rs` 和 `commands/xargs.rs` 使用
//! - 使用 `utils/output.rs` 输出 verbose 信息

use super::invocation::Invocation;
use crate::error::{BashutilsError, Result};
use crate::utils::output;

use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

/// 进程内实现的程序
pub trait Builtin {
    /// 以完整 argv（含程序名）运行，返回退出码
    fn run(&self, argv: &[String]) -> i32;
}

/// 解析结果
pub enum Runnable<'a> {
    /// 作为操作系统进程启动
    External(&'a str),
    /// 在当前进程内运行
    Builtin(&'a dyn Builtin),
}

/// 程序解析策略
pub trait Resolver {
    fn resolve<'a>(&'a self, program: &'a str) -> Runnable<'a>;
}

/// 默认解析器：已注册名称走进程内实现，其余启动外部进程
#[derive(Default)]
pub struct SystemResolver {
    builtins: Vec<(String, Box<dyn Builtin>)>,
}

impl SystemResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册进程内实现
    pub fn with_builtin(mut self, name: &str, builtin: Box<dyn Builtin>) -> Self {
        self.builtins.push((name.to_string(), builtin));
        self
    }
}

impl Resolver for SystemResolver {
    fn resolve<'a>(&'a self, program: &'a str) -> Runnable<'a> {
        self.builtins
            .iter()
            .find(|(name, _)| name == program)
            .map(|(_, builtin)| Runnable::Builtin(builtin.as_ref()))
            .unwrap_or(Runnable::External(program))
    }
}

/// argv 报告接收端
pub trait Reporter {
    fn report(&mut self, invocation: &Invocation);
}

/// 写到 stderr 的报告器
pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn report(&mut self, invocation: &Invocation) {
        output::print_trace(&invocation.to_string());
    }
}

/// 批量执行器
pub struct BatchRunner<'r, R: Resolver, P: Reporter> {
    resolver: &'r R,
    reporter: P,
    verbose: bool,
    /// 已启动的调用数
    launched: usize,
}

impl<'r, R: Resolver, P: Reporter> BatchRunner<'r, R, P> {
    /// 创建新的批量执行器
    pub fn new(resolver: &'r R, reporter: P, verbose: bool) -> Self {
        Self {
            resolver,
            reporter,
            verbose,
            launched: 0,
        }
    }

    pub fn launched(&self) -> usize {
        self.launched
    }

    #[cfg(test)]
    pub fn reporter(&self) -> &P {
        &self.reporter
    }

    /// 执行一次调用并等待结束
    pub fn run(&mut self, invocation: &Invocation) -> Result<()> {
        if self.verbose {
            self.reporter.report(invocation);
        }
        self.launched += 1;

        let code = match self.resolver.resolve(invocation.program()) {
            Runnable::External(program) => spawn_and_wait(program, invocation)?,
            Runnable::Builtin(builtin) => {
                let code = builtin.run(invocation.argv());
                // 进程内输出与后续子进程共享 fd 1，先刷新
                io::stdout().flush()?;
                code
            }
        };

        if code != 0 {
            return Err(BashutilsError::ChildExit {
                argv: invocation.to_string(),
                code,
            });
        }
        Ok(())
    }
}

/// 启动外部进程并阻塞等待
fn spawn_and_wait(program: &str, invocation: &Invocation) -> Result<i32> {
    let status = Command::new(program)
        .args(invocation.args())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| BashutilsError::Launch {
            program: program.to_string(),
            argv: invocation.to_string(),
            source,
        })?;

    Ok(exit_code(status))
}

/// 被信号终止时按 shell 惯例映射为 128 + 信号值
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

#[cfg(test)]
pub(crate) mod testing {
    //! 测试用解析器：记录每次调用，按脚本返回退出码

    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    pub struct Recorder {
        pub calls: RefCell<Vec<Vec<String>>>,
        /// 第 N 次调用（从 0 开始）返回的退出码
        pub fail_at: Option<(usize, i32)>,
    }

    impl Recorder {
        pub fn failing_at(index: usize, code: i32) -> Self {
            Self {
                calls: RefCell::default(),
                fail_at: Some((index, code)),
            }
        }

        pub fn calls(&self) -> Vec<Vec<String>> {
            self.calls.borrow().clone()
        }
    }

    impl Builtin for Recorder {
        fn run(&self, argv: &[String]) -> i32 {
            let mut calls = self.calls.borrow_mut();
            let index = calls.len();
            calls.push(argv.to_vec());
            match self.fail_at {
                Some((at, code)) if at == index => code,
                _ => 0,
            }
        }
    }

    /// 所有程序名都解析为同一个记录器
    pub struct RecordingResolver {
        pub recorder: Recorder,
    }

    impl RecordingResolver {
        pub fn new(recorder: Recorder) -> Self {
            Self { recorder }
        }

        pub fn calls(&self) -> Vec<Vec<String>> {
            self.recorder.calls()
        }
    }

    impl Resolver for RecordingResolver {
        fn resolve<'a>(&'a self, _program: &'a str) -> Runnable<'a> {
            Runnable::Builtin(&self.recorder)
        }
    }

    #[derive(Default)]
    pub struct VecReporter {
        pub lines: Vec<String>,
    }

    impl Reporter for VecReporter {
        fn report(&mut self, invocation: &Invocation) {
            self.lines.push(invocation.to_string());
        }
    }
}
