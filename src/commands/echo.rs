//! # echo 命令实现
//!
//! 以空格连接参数输出，可选转义解释和环境变量展开。
//!
//! ## 依赖关系
//! - 使用 `cli/echo.rs` 定义的参数
//! - 使用 `regex` 匹配环境变量引用

use crate::cli::echo::EchoArgs;
use crate::error::Result;

use regex::{Captures, Regex};
use std::env;
use std::io::{self, Write};
use std::sync::LazyLock;

static UNIX_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([A-Za-z_][A-Za-z0-9_]*)").unwrap());
static WINDOWS_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%([A-Za-z_][A-Za-z0-9_]*)%").unwrap());

/// 执行 echo 命令
pub fn execute(args: EchoArgs) -> Result<()> {
    let text = render(&args.strings, args.escape, args.expand_env, |name| {
        env::var(name).ok()
    });

    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())?;
    if !args.no_newline {
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

/// 生成输出文本（不含结尾换行）
fn render<F>(strings: &[String], escape: bool, expand_env: bool, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = strings.join(" ");

    if expand_env {
        out = expand_variables(&out, &lookup);
    }
    if escape {
        out = interpret_escapes(&out);
    }
    out
}

/// 展开 `$VAR` 和 `%VAR%`；未设置或为空的变量保持原样
fn expand_variables<F>(input: &str, lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let unix = UNIX_VAR.replace_all(input, |caps: &Captures| substitute(caps, lookup));
    WINDOWS_VAR
        .replace_all(&unix, |caps: &Captures| substitute(caps, lookup))
        .into_owned()
}

fn substitute<F>(caps: &Captures, lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(&caps[1]) {
        Some(value) if !value.is_empty() => value,
        _ => caps[0].to_string(),
    }
}

/// 解释 `\n`、`\t`、`\\`
fn interpret_escapes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_join_with_spaces() {
        assert_eq!(render(&strings(&["a", "b  c"]), false, false, no_env), "a b  c");
        assert_eq!(render(&[], false, false, no_env), "");
    }

    #[test]
    fn test_escapes() {
        assert_eq!(render(&strings(&["a\\tb\\nc"]), true, false, no_env), "a\tb\nc");
        assert_eq!(render(&strings(&["x\\\\n"]), true, false, no_env), "x\\n");
        // 未启用时原样输出
        assert_eq!(render(&strings(&["a\\tb"]), false, false, no_env), "a\\tb");
    }

    #[test]
    fn test_expand_env() {
        let lookup = |name: &str| match name {
            "HOME" => Some("/home/me".to_string()),
            "EMPTY" => Some(String::new()),
            _ => None,
        };
        assert_eq!(
            render(&strings(&["$HOME", "%HOME%", "$NOPE", "$EMPTY"]), false, true, lookup),
            "/home/me /home/me $NOPE $EMPTY"
        );
    }
}
