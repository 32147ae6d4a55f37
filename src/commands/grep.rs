//! # grep 命令实现
//!
//! 输出匹配正则的行。
//!
//! ## 功能
//! - `-i` 忽略大小写，`-v` 反向选择，`-n` 显示行号
//! - 多个输入时每个输入前加 `==> name <==` 标题
//! - 没有选中任何行时退出码为 1
//!
//! ## 依赖关系
//! - 使用 `cli/grep.rs` 定义的参数
//! - 使用 `utils/input.rs`，分节格式与 `commands/head.rs` 共用
//! - 使用 `regex` crate

use crate::cli::grep::GrepArgs;
use crate::commands::head::write_sections;
use crate::error::{BashutilsError, Result};
use crate::utils::input::{open_inputs, NamedInput};

use regex::{Regex, RegexBuilder};
use std::io::{self, BufWriter, Write};

/// 行匹配器
struct Matcher {
    regex: Regex,
    invert: bool,
    line_number: bool,
}

impl Matcher {
    fn new(pattern: &str, ignore_case: bool, invert: bool, line_number: bool) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(ignore_case)
            .build()?;
        Ok(Self {
            regex,
            invert,
            line_number,
        })
    }

    fn selects(&self, line: &str) -> bool {
        self.regex.is_match(line) != self.invert
    }

    /// 过滤一个输入，返回选中的行数
    fn filter<W: Write>(&self, input: NamedInput, out: &mut W) -> Result<usize> {
        let mut selected = 0;
        for (idx, line) in input.lines().enumerate() {
            let line = line?;
            if !self.selects(&line) {
                continue;
            }
            selected += 1;
            if self.line_number {
                writeln!(out, "{}:{}", idx + 1, line)?;
            } else {
                writeln!(out, "{}", line)?;
            }
        }
        Ok(selected)
    }
}

/// 执行 grep 命令
pub fn execute(args: GrepArgs) -> Result<()> {
    let (pattern, files) = match args.regexp {
        Some(pattern) => (pattern, args.args),
        None => {
            let mut rest = args.args.into_iter();
            let pattern = rest.next().ok_or_else(|| {
                BashutilsError::InvalidArgument("grep: missing pattern".to_string())
            })?;
            (pattern, rest.collect())
        }
    };

    let matcher = Matcher::new(&pattern, args.ignore_case, args.invert_match, args.line_number)?;
    let inputs = open_inputs(&files, "grep")?;

    let mut total = 0;
    let mut out = BufWriter::new(io::stdout().lock());
    write_sections(inputs, &mut out, |input, out| {
        total += matcher.filter(input, out)?;
        Ok(())
    })?;
    out.flush()?;

    if total == 0 {
        return Err(BashutilsError::NoMatch);
    }
    Ok(())
}
