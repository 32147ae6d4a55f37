//! # sort 命令实现
//!
//! 读取全部行后排序输出。
//!
//! ## 依赖关系
//! - 使用 `cli/sort.rs` 定义的参数
//! - 使用 `utils/input.rs`

use crate::cli::sort::SortArgs;
use crate::error::Result;
use crate::utils::input::read_all_lines;

use std::cmp::Ordering;
use std::io::{self, BufWriter, Write};

/// 执行 sort 命令
pub fn execute(args: SortArgs) -> Result<()> {
    let mut lines = read_all_lines(&args.files, "sort")?;
    sort_lines(&mut lines, args.numeric, args.reverse, args.unique);

    let mut out = BufWriter::new(io::stdout().lock());
    for line in &lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}

/// 排序；`unique` 在排序（和反转）之后去掉相邻重复行
fn sort_lines(lines: &mut Vec<String>, numeric: bool, reverse: bool, unique: bool) {
    if numeric {
        lines.sort_by(|a, b| numeric_cmp(a, b));
    } else {
        lines.sort();
    }

    if reverse {
        lines.reverse();
    }
    if unique {
        lines.dedup();
    }
}

/// 数值比较：非数值行排在数值行之后，彼此按字典序
fn numeric_cmp(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
