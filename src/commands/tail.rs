//! # tail 命令实现
//!
//! 输出每个输入的最后 N 行，使用环形缓冲只保留 N 行。
//!
//! ## 依赖关系
//! - 使用 `cli/tail.rs` 定义的参数
//! - 使用 `utils/input.rs`，分节格式与 `commands/head.rs` 共用

use crate::cli::tail::TailArgs;
use crate::commands::head::write_sections;
use crate::error::Result;
use crate::utils::input::{open_inputs, NamedInput};

use std::collections::VecDeque;
use std::io::{self, BufWriter, Write};

/// 执行 tail 命令
pub fn execute(args: TailArgs) -> Result<()> {
    let inputs = open_inputs(&args.files, "tail")?;
    let mut out = BufWriter::new(io::stdout().lock());
    write_sections(inputs, &mut out, |input, out| {
        for line in last_lines(input, args.lines)? {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    })?;
    out.flush()?;
    Ok(())
}

/// 收集最后 `n` 行
fn last_lines(input: NamedInput, n: usize) -> Result<VecDeque<String>> {
    let mut ring = VecDeque::with_capacity(n);
    if n == 0 {
        return Ok(ring);
    }
    for line in input.lines() {
        if ring.len() == n {
            ring.pop_front();
        }
        ring.push_back(line?);
    }
    Ok(ring)
}
