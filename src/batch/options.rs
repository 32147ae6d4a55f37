//! # xargs 选项扫描
//!
//! 从左到右扫描原始参数，区分"引擎选项"与"要执行的命令"。
//!
//! ## 状态机
//! ```text
//! Options ──(未识别 token / `--`)──> PassThrough
//! ```
//! 进入 `PassThrough` 后不可返回，其后全部 token 都属于命令模板。
//! 命令本身可以以 `-` 开头。
//!
//! ## 依赖关系
//! - 被 `commands/xargs.rs` 调用
//! - 使用 `batch/collector.rs` 的 `DelimiterPolicy`

use super::collector::DelimiterPolicy;
use crate::error::{BashutilsError, Result};

/// 引擎配置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XargsConfig {
    /// 每次调用最多条目数（`None` 表示不限）
    pub max_args: Option<usize>,
    /// 占位符；设置后每个条目单独调用
    pub placeholder: Option<String>,
    /// 输入分隔策略
    pub delimiter: DelimiterPolicy,
    /// 输入为空时不运行命令
    pub no_run_if_empty: bool,
    /// 执行前把 argv 打印到 stderr
    pub verbose: bool,
}

/// 扫描结果
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScannedArgs {
    pub config: XargsConfig,
    /// 命令模板 token（可能为空，由调用方决定默认命令）
    pub command: Vec<String>,
    /// 是否请求了帮助
    pub help: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Options,
    PassThrough,
}

/// 识别出的选项
enum Flag {
    MaxArgs,
    Replace,
    Null,
    Delimiter,
    NoRunIfEmpty,
    Verbose,
    Help,
    EndOfOptions,
}

impl Flag {
    fn lookup(name: &str) -> Option<Flag> {
        let flag = match name {
            "-n" | "--max-args" => Flag::MaxArgs,
            "-I" | "--replace" => Flag::Replace,
            "-0" | "--null" => Flag::Null,
            "-d" | "--delimiter" => Flag::Delimiter,
            "-r" | "--no-run-if-empty" => Flag::NoRunIfEmpty,
            "-t" | "--verbose" => Flag::Verbose,
            "-h" | "--help" => Flag::Help,
            "--" => Flag::EndOfOptions,
            _ => return None,
        };
        Some(flag)
    }

    fn takes_value(&self) -> bool {
        matches!(self, Flag::MaxArgs | Flag::Replace | Flag::Delimiter)
    }
}

/// 扫描参数列表
pub fn scan(args: &[String]) -> Result<ScannedArgs> {
    let mut scanned = ScannedArgs::default();
    let mut state = ScanState::Options;
    let mut null = false;
    let mut custom: Option<DelimiterPolicy> = None;
    let mut tokens = args.iter();

    while let Some(token) = tokens.next() {
        if state == ScanState::PassThrough {
            scanned.command.push(token.clone());
            continue;
        }

        // 支持 `--long=value` 形式
        let (name, inline) = match token.split_once('=') {
            Some((name, value)) if name.starts_with("--") => (name, Some(value.to_string())),
            _ => (token.as_str(), None),
        };

        let Some(flag) = Flag::lookup(name) else {
            state = ScanState::PassThrough;
            scanned.command.push(token.clone());
            continue;
        };

        let value = if flag.takes_value() {
            match inline {
                Some(v) => Some(v),
                None => Some(tokens.next().cloned().ok_or_else(|| {
                    BashutilsError::InvalidArgument(format!("xargs: option '{name}' requires a value"))
                })?),
            }
        } else {
            None
        };
        let value = value.unwrap_or_default();

        match flag {
            Flag::MaxArgs => {
                let n: usize = value.trim().parse().map_err(|_| {
                    BashutilsError::InvalidArgument(format!("xargs: invalid number for {name}: '{value}'"))
                })?;
                scanned.config.max_args = (n > 0).then_some(n);
            }
            Flag::Replace => {
                if value.is_empty() {
                    return Err(BashutilsError::InvalidArgument(
                        "xargs: replace string must not be empty".to_string(),
                    ));
                }
                scanned.config.placeholder = Some(value);
            }
            Flag::Null => null = true,
            Flag::Delimiter => custom = Some(parse_delimiter(&value)?),
            Flag::NoRunIfEmpty => scanned.config.no_run_if_empty = true,
            Flag::Verbose => scanned.config.verbose = true,
            Flag::Help => scanned.help = true,
            Flag::EndOfOptions => state = ScanState::PassThrough,
        }
    }

    scanned.config.delimiter = match (null, custom) {
        (true, Some(_)) => {
            return Err(BashutilsError::InvalidArgument(
                "xargs: --null and --delimiter are mutually exclusive".to_string(),
            ))
        }
        (true, None) => DelimiterPolicy::NullByte,
        (false, Some(policy)) => policy,
        (false, None) => DelimiterPolicy::Whitespace,
    };

    Ok(scanned)
}

/// 解析 `-d` 的值：单字节，支持少量转义
fn parse_delimiter(value: &str) -> Result<DelimiterPolicy> {
    let byte = match value {
        "\\n" => b'\n',
        "\\t" => b'\t',
        "\\r" => b'\r',
        "\\0" => 0,
        "\\\\" => b'\\',
        v if v.len() == 1 => v.as_bytes()[0],
        v => {
            return Err(BashutilsError::InvalidArgument(format!(
                "xargs: delimiter must be a single byte, got '{v}'"
            )))
        }
    };

    Ok(if byte == 0 {
        DelimiterPolicy::NullByte
    } else {
        DelimiterPolicy::CustomByte(byte)
    })
}
