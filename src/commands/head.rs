//! # head 命令实现
//!
//! 输出每个输入的前 N 行；多个输入时加 `==> name <==` 标题。
//!
//! ## 依赖关系
//! - 使用 `cli/head.rs` 定义的参数
//! - 使用 `utils/input.rs`

use crate::cli::head::HeadArgs;
use crate::error::Result;
use crate::utils::input::{open_inputs, NamedInput};

use std::io::{self, BufWriter, Write};

/// 执行 head 命令
pub fn execute(args: HeadArgs) -> Result<()> {
    let inputs = open_inputs(&args.files, "head")?;
    let mut out = BufWriter::new(io::stdout().lock());
    write_sections(inputs, &mut out, |input, out| {
        write_head(input, args.lines, out)
    })?;
    out.flush()?;
    Ok(())
}

/// 输出前 `n` 行
fn write_head<W: Write>(input: NamedInput, n: usize, out: &mut W) -> Result<()> {
    for line in input.lines().take(n) {
        writeln!(out, "{}", line?)?;
    }
    Ok(())
}

/// 逐个输入输出；多于一个时加标题并以空行分隔
///
/// `tail` 共用同样的分节格式。
pub fn write_sections<W, F>(inputs: Vec<NamedInput>, out: &mut W, mut body: F) -> Result<()>
where
    W: Write,
    F: FnMut(NamedInput, &mut W) -> Result<()>,
{
    let count = inputs.len();
    for (i, input) in inputs.into_iter().enumerate() {
        if count > 1 {
            writeln!(out, "==> {} <==", input.name)?;
        }
        body(input, out)?;
        if count > 1 && i + 1 < count {
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, content: &'static str) -> NamedInput {
        NamedInput {
            name: name.to_string(),
            reader: Box::new(content.as_bytes()),
        }
    }

    #[test]
    fn test_head_single() {
        let mut out = Vec::new();
        write_sections(vec![named("a", "1\n2\n3\n")], &mut out, |i, o| {
            write_head(i, 2, o)
        })
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n");
    }

    #[test]
    fn test_head_multiple_sections() {
        let mut out = Vec::new();
        let inputs = vec![named("a", "1\n2\n"), named("b", "x")];
        write_sections(inputs, &mut out, |i, o| write_head(i, 1, o)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "==> a <==\n1\n\n==> b <==\nx\n"
        );
    }
}
