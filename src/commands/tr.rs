//! # tr 命令实现
//!
//! 从标准输入读取，逐字符翻译或删除后写到标准输出。
//!
//! ## 字符集语法
//! - 区间 `a-z`（逆序区间 `z-a` 按升序展开）
//! - 转义 `\n`、`\t`、`\\`
//!
//! ## 依赖关系
//! - 使用 `cli/tr.rs` 定义的参数

use crate::cli::tr::TrArgs;
use crate::error::{BashutilsError, Result};

use std::io::{self, BufWriter, Read, Write};

/// 字符翻译器
#[derive(Debug)]
struct Translator {
    delete: bool,
    complement: bool,
    set1: Vec<char>,
    set2: Vec<char>,
}

impl Translator {
    fn new(args: &TrArgs) -> Result<Self> {
        if args.delete {
            if let Some(extra) = &args.set2 {
                return Err(BashutilsError::InvalidArgument(format!(
                    "tr: extra operand '{extra}'"
                )));
            }
        } else if args.set2.is_none() {
            return Err(BashutilsError::InvalidArgument(format!(
                "tr: missing operand after '{}'",
                args.set1
            )));
        }

        Ok(Self {
            delete: args.delete,
            complement: args.complement,
            set1: expand_set(&args.set1),
            set2: args.set2.as_deref().map(expand_set).unwrap_or_default(),
        })
    }

    /// 处理单个字符；`None` 表示删除
    fn apply(&self, c: char) -> Option<char> {
        let position = self.set1.iter().position(|x| *x == c);

        if self.delete {
            let in_set = position.is_some() != self.complement;
            return (!in_set).then_some(c);
        }

        match (self.complement, position) {
            // 补集模式：不在 SET1 中的字符映射到 SET2 最后一个字符
            (true, Some(_)) => Some(c),
            (true, None) => self.set2.last().copied(),
            (false, None) => Some(c),
            (false, Some(idx)) => self.set2.get(idx).or(self.set2.last()).copied(),
        }
    }

    fn translate(&self, input: &str) -> String {
        input.chars().filter_map(|c| self.apply(c)).collect()
    }
}

/// 执行 tr 命令
pub fn execute(args: TrArgs) -> Result<()> {
    let translator = Translator::new(&args)?;

    let mut data = Vec::new();
    io::stdin().lock().read_to_end(&mut data)?;
    let output = translator.translate(&String::from_utf8_lossy(&data));

    let mut out = BufWriter::new(io::stdout().lock());
    out.write_all(output.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// 展开字符集
fn expand_set(set: &str) -> Vec<char> {
    let chars = unescape(set);
    let mut expanded = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if i + 2 < chars.len() && chars[i + 1] == '-' {
            let (mut start, mut end) = (chars[i], chars[i + 2]);
            if start > end {
                std::mem::swap(&mut start, &mut end);
            }
            expanded.extend(start..=end);
            i += 3;
        } else {
            expanded.push(chars[i]);
            i += 1;
        }
    }
    expanded
}

fn unescape(set: &str) -> Vec<char> {
    let mut out = Vec::new();
    let mut chars = set.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator(delete: bool, complement: bool, set1: &str, set2: Option<&str>) -> Translator {
        Translator::new(&TrArgs {
            delete,
            complement,
            set1: set1.to_string(),
            set2: set2.map(str::to_string),
        })
        .unwrap()
    }

    #[test]
    fn test_expand_set() {
        assert_eq!(expand_set("a-e"), ['a', 'b', 'c', 'd', 'e']);
        assert_eq!(expand_set("c-a"), ['a', 'b', 'c']);
        assert_eq!(expand_set("x-"), ['x', '-']);
        assert_eq!(expand_set("\\n\\t"), ['\n', '\t']);
    }

    #[test]
    fn test_translate() {
        let t = translator(false, false, "a-z", Some("A-Z"));
        assert_eq!(t.translate("Hello, world!"), "HELLO, WORLD!");
    }

    #[test]
    fn test_short_set2_repeats_last() {
        let t = translator(false, false, "abc", Some("x"));
        assert_eq!(t.translate("aabbcd"), "xxxxxd");
    }

    #[test]
    fn test_delete_and_complement() {
        assert_eq!(translator(true, false, "0-9", None).translate("a1b22c"), "abc");
        assert_eq!(translator(true, true, "0-9\\n", None).translate("a1b2\n"), "12\n");
        assert_eq!(translator(false, true, "a-z", Some("_")).translate("ab 1c"), "ab__c");
    }

    #[test]
    fn test_operand_validation() {
        let args = |delete, set2: Option<&str>| TrArgs {
            delete,
            complement: false,
            set1: "a".to_string(),
            set2: set2.map(str::to_string),
        };
        assert!(Translator::new(&args(true, Some("b"))).is_err());
        assert!(Translator::new(&args(false, None)).is_err());
    }
}
