//! # wc 命令实现
//!
//! 统计换行数、单词数、字节数。
//!
//! ## 依赖关系
//! - 使用 `cli/wc.rs` 定义的参数
//! - 使用 `utils/input.rs`

use crate::cli::wc::WcArgs;
use crate::error::Result;
use crate::utils::input::open_inputs;

use std::io::{self, BufWriter, Read, Write};
use std::ops::AddAssign;

/// 单个输入的统计结果
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Counts {
    lines: usize,
    words: usize,
    bytes: usize,
}

impl Counts {
    fn of(data: &[u8]) -> Self {
        Self {
            lines: data.iter().filter(|b| **b == b'\n').count(),
            words: String::from_utf8_lossy(data).split_whitespace().count(),
            bytes: data.len(),
        }
    }

    /// 按选择输出；未选择任何项时输出全部三项
    fn render(&self, args: &WcArgs) -> String {
        let all = !(args.lines || args.words || args.bytes);
        let mut fields = Vec::new();
        if all || args.lines {
            fields.push(self.lines.to_string());
        }
        if all || args.words {
            fields.push(self.words.to_string());
        }
        if all || args.bytes {
            fields.push(self.bytes.to_string());
        }
        fields.join(" ")
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, other: Self) {
        self.lines += other.lines;
        self.words += other.words;
        self.bytes += other.bytes;
    }
}

/// 执行 wc 命令
pub fn execute(args: WcArgs) -> Result<()> {
    let inputs = open_inputs(&args.files, "wc")?;
    let count = inputs.len();
    let mut total = Counts::default();
    let mut out = BufWriter::new(io::stdout().lock());

    for mut input in inputs {
        let mut data = Vec::new();
        input.reader.read_to_end(&mut data)?;
        let counts = Counts::of(&data);
        total += counts;

        if input.is_stdin() {
            writeln!(out, "{}", counts.render(&args))?;
        } else {
            writeln!(out, "{} {}", counts.render(&args), input.name)?;
        }
    }

    if count > 1 {
        writeln!(out, "{} total", total.render(&args))?;
    }

    out.flush()?;
    Ok(())
}
