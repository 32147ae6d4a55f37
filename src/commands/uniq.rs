//! # uniq 命令实现
//!
//! 相邻重复行的游程去重，不预先排序。
//!
//! ## 依赖关系
//! - 使用 `cli/uniq.rs` 定义的参数
//! - 使用 `utils/input.rs`

use crate::cli::uniq::UniqArgs;
use crate::error::Result;
use crate::utils::input::read_all_lines;

use std::io::{self, BufWriter, Write};

/// 执行 uniq 命令
pub fn execute(args: UniqArgs) -> Result<()> {
    let lines = read_all_lines(&args.files, "uniq")?;

    let mut out = BufWriter::new(io::stdout().lock());
    for (count, line) in runs(&lines) {
        if let Some(rendered) = render(count, line, &args) {
            writeln!(out, "{}", rendered)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// 相邻相同行合并为 (次数, 行)
fn runs(lines: &[String]) -> Vec<(usize, &str)> {
    let mut runs: Vec<(usize, &str)> = Vec::new();
    for line in lines {
        if let Some((count, last)) = runs.last_mut() {
            if *last == line.as_str() {
                *count += 1;
                continue;
            }
        }
        runs.push((1, line.as_str()));
    }
    runs
}

fn render(count: usize, line: &str, args: &UniqArgs) -> Option<String> {
    if args.repeated && count == 1 {
        return None;
    }
    if args.unique && count > 1 {
        return None;
    }

    if args.count {
        Some(format!("{} {}", count, line))
    } else {
        Some(line.to_string())
    }
}
