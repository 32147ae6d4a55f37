//! # cut 命令实现
//!
//! 按字段或字符位置截取每一行。
//!
//! ## 位置列表格式
//! ```text
//! 1,3      单个位置
//! 2-4      闭区间
//! 3-       从第 3 个到行尾
//! -2       从行首到第 2 个
//! ```
//! 位置从 1 开始，按列表顺序输出，超出范围的位置忽略。
//!
//! ## 依赖关系
//! - 使用 `cli/cut.rs` 定义的参数
//! - 使用 `utils/input.rs`

use crate::cli::cut::CutArgs;
use crate::error::{BashutilsError, Result};
use crate::utils::input::open_inputs;

use std::io::{self, BufWriter, Write};

/// 位置区间（1 起始，闭区间；`end` 为 `None` 表示到行尾）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    end: Option<usize>,
}

/// 截取方式
enum Selector {
    Fields(Vec<Span>),
    Characters(Vec<Span>),
}

/// 执行 cut 命令
pub fn execute(args: CutArgs) -> Result<()> {
    let selector = match (&args.fields, &args.characters) {
        (Some(list), None) => Selector::Fields(parse_list(list)?),
        (None, Some(list)) => Selector::Characters(parse_list(list)?),
        _ => {
            return Err(BashutilsError::InvalidArgument(
                "cut: specify either --fields or --characters".to_string(),
            ))
        }
    };

    let mut out = BufWriter::new(io::stdout().lock());
    for input in open_inputs(&args.files, "cut")? {
        for line in input.lines() {
            let line = line?;
            let selected = match &selector {
                Selector::Fields(spans) => cut_fields(&line, args.delimiter, spans),
                Selector::Characters(spans) => cut_characters(&line, spans),
            };
            writeln!(out, "{}", selected)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// 解析位置列表
fn parse_list(list: &str) -> Result<Vec<Span>> {
    let invalid = |reason: &str| BashutilsError::InvalidRange(format!("'{list}': {reason}"));
    let position = |s: &str| -> Result<usize> {
        let n: usize = s.trim().parse().map_err(|_| invalid("not a number"))?;
        if n == 0 {
            return Err(invalid("positions are numbered from 1"));
        }
        Ok(n)
    };

    list.split(',')
        .map(|part| match part.split_once('-') {
            None => {
                let n = position(part)?;
                Ok(Span { start: n, end: Some(n) })
            }
            Some(("", "")) => Err(invalid("invalid range with no endpoint")),
            Some(("", end)) => Ok(Span { start: 1, end: Some(position(end)?) }),
            Some((start, "")) => Ok(Span { start: position(start)?, end: None }),
            Some((start, end)) => {
                let (start, end) = (position(start)?, position(end)?);
                if start > end {
                    return Err(invalid("decreasing range"));
                }
                Ok(Span { start, end: Some(end) })
            }
        })
        .collect()
}

/// 按列表顺序挑选元素
fn select<'a, T: Copy>(parts: &'a [T], spans: &'a [Span]) -> impl Iterator<Item = T> + 'a {
    spans.iter().flat_map(move |span| {
        let end = span.end.unwrap_or(parts.len()).min(parts.len());
        let start = span.start.min(end + 1);
        parts[start - 1..end].iter().copied()
    })
}

fn cut_fields(line: &str, delimiter: char, spans: &[Span]) -> String {
    let separator = delimiter.to_string();
    let parts: Vec<&str> = line.split(delimiter).collect();
    select(&parts, spans)
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

fn cut_characters(line: &str, spans: &[Span]) -> String {
    let chars: Vec<char> = line.chars().collect();
    select(&chars, spans).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(list: &str) -> Vec<Span> {
        parse_list(list).unwrap()
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(
            spans("1,3-4,5-,-2"),
            [
                Span { start: 1, end: Some(1) },
                Span { start: 3, end: Some(4) },
                Span { start: 5, end: None },
                Span { start: 1, end: Some(2) },
            ]
        );
        assert!(parse_list("0").is_err());
        assert!(parse_list("a").is_err());
        assert!(parse_list("4-2").is_err());
        assert!(parse_list("-").is_err());
        assert!(parse_list("1,,2").is_err());
    }

    #[test]
    fn test_cut_fields() {
        assert_eq!(cut_fields("a:b:c:d", ':', &spans("1,3")), "a:c");
        assert_eq!(cut_fields("a:b:c:d", ':', &spans("2-")), "b:c:d");
        // 列表顺序，越界忽略
        assert_eq!(cut_fields("a:b:c", ':', &spans("3,1,9")), "c:a");
        assert_eq!(cut_fields("a\tb", '\t', &spans("2")), "b");
        assert_eq!(cut_fields("plain", ':', &spans("1")), "plain");
        assert_eq!(cut_fields("plain", ':', &spans("2")), "");
    }

    #[test]
    fn test_cut_characters() {
        assert_eq!(cut_characters("hello", &spans("1-3")), "hel");
        assert_eq!(cut_characters("héllo", &spans("2,5")), "éo");
        assert_eq!(cut_characters("hi", &spans("3-")), "");
        assert_eq!(cut_characters("hello", &spans("-2,4-")), "helo");
    }
}
