//! # paste 命令实现
//!
//! 并行模式：各文件对应行用分隔符合并为一行，较短的文件以空串补齐。
//! 串行模式 (`-s`)：每个文件的所有行合并为一行。
//! 分隔符列表循环使用。
//!
//! ## 依赖关系
//! - 使用 `cli/paste.rs` 定义的参数
//! - 使用 `utils/input.rs`

use crate::cli::paste::PasteArgs;
use crate::error::Result;
use crate::utils::input::open_inputs;

use std::io::{self, BufWriter, Write};

/// 执行 paste 命令
pub fn execute(args: PasteArgs) -> Result<()> {
    let delimiters = parse_delimiters(args.delimiters.as_deref());
    let sources: Vec<_> = open_inputs(&args.files, "paste")?
        .into_iter()
        .map(|input| input.lines())
        .collect();

    let mut out = BufWriter::new(io::stdout().lock());
    if args.serial {
        paste_serial(sources, &delimiters, &mut out)?;
    } else {
        paste_parallel(sources, &delimiters, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

/// 解析分隔符列表；缺省或为空时使用 TAB
fn parse_delimiters(list: Option<&str>) -> Vec<char> {
    let mut delimiters = Vec::new();
    let mut chars = list.unwrap_or_default().chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            delimiters.push(c);
            continue;
        }
        match chars.next() {
            Some('t') | None => delimiters.push('\t'),
            Some('n') => delimiters.push('\n'),
            Some(other) => delimiters.push(other),
        }
    }

    if delimiters.is_empty() {
        delimiters.push('\t');
    }
    delimiters
}

/// 用循环分隔符连接
fn join_cycling(parts: &[String], delimiters: &[char]) -> String {
    let mut line = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            line.push(delimiters[(i - 1) % delimiters.len()]);
        }
        line.push_str(part);
    }
    line
}

fn paste_parallel<I, W>(mut sources: Vec<I>, delimiters: &[char], out: &mut W) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    loop {
        let mut row = Vec::with_capacity(sources.len());
        let mut more = false;
        for source in sources.iter_mut() {
            match source.next().transpose()? {
                Some(line) => {
                    more = true;
                    row.push(line);
                }
                None => row.push(String::new()),
            }
        }
        if !more {
            return Ok(());
        }
        writeln!(out, "{}", join_cycling(&row, delimiters))?;
    }
}

fn paste_serial<I, W>(sources: Vec<I>, delimiters: &[char], out: &mut W) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    for source in sources {
        let lines = source.collect::<io::Result<Vec<_>>>()?;
        writeln!(out, "{}", join_cycling(&lines, delimiters))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::input::lines;

    fn sources(contents: &[&'static str]) -> Vec<impl Iterator<Item = io::Result<String>>> {
        contents.iter().copied().map(|c| lines(c.as_bytes())).collect()
    }

    #[test]
    fn test_parse_delimiters() {
        assert_eq!(parse_delimiters(None), ['\t']);
        assert_eq!(parse_delimiters(Some("")), ['\t']);
        assert_eq!(parse_delimiters(Some(",;")), [',', ';']);
        assert_eq!(parse_delimiters(Some("\\t\\n")), ['\t', '\n']);
    }

    #[test]
    fn test_parallel_pads_short_files() {
        let mut out = Vec::new();
        paste_parallel(sources(&["1\n2\n3\n", "a\nb\n"]), &['\t'], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1\ta\n2\tb\n3\t\n");
    }

    #[test]
    fn test_parallel_cycles_delimiters() {
        let mut out = Vec::new();
        paste_parallel(sources(&["a\n", "b\n", "c\n", "d\n"]), &[',', ';'], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a,b;c,d\n");
    }

    #[test]
    fn test_serial() {
        let mut out = Vec::new();
        paste_serial(sources(&["1\n2\n3\n", "x\n"]), &[','], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1,2,3\nx\n");
    }
}
