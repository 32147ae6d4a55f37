//! # 条目收集器
//!
//! 将输入字节流切分为有序的条目 (item) 列表。
//!
//! ## 功能
//! - 三种分隔策略：空白、NUL 字节、自定义单字节
//! - 三种策略共用同一个切分算法，仅分隔符判定不同
//! - 先有损解码为 UTF-8 再按字符切分，空白按 Unicode 定义
//! - 每个条目去除首尾空白，空条目丢弃
//!
//! ## 依赖关系
//! - 被 `batch/mod.rs` 调用
//! - 无外部 crate 依赖

use crate::error::{BashutilsError, Result};
use std::io::Read;

/// 输入分隔策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DelimiterPolicy {
    /// 任意 Unicode 空白（含 `\v`、NBSP）等价
    #[default]
    Whitespace,
    /// `\0` 分隔 (`-0`)
    NullByte,
    /// 自定义单字节分隔 (`-d`)
    CustomByte(u8),
}

impl DelimiterPolicy {
    /// 判断字符是否为分隔符
    pub fn is_separator(&self, c: char) -> bool {
        match self {
            DelimiterPolicy::Whitespace => c.is_whitespace(),
            DelimiterPolicy::NullByte => c == '\0',
            DelimiterPolicy::CustomByte(b) => c == char::from(*b),
        }
    }
}

/// 条目收集器
pub struct ItemCollector {
    policy: DelimiterPolicy,
}

impl ItemCollector {
    /// 创建新的条目收集器
    pub fn new(policy: DelimiterPolicy) -> Self {
        Self { policy }
    }

    /// 读取完整输入并切分
    ///
    /// 读取失败时整个运行中止，不返回部分结果。
    pub fn collect<R: Read>(&self, mut reader: R) -> Result<Vec<String>> {
        let mut buf = Vec::new();
        reader
            .read_to_end(&mut buf)
            .map_err(|source| BashutilsError::InputRead { source })?;

        Ok(self.split(&buf))
    }

    /// 按当前策略切分字节
    ///
    /// 自定义分隔符只接受 ASCII，解码不会改变它。
    pub fn split(&self, bytes: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(bytes)
            .split(|c: char| self.policy.is_separator(c))
            .map(|run| run.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect()
    }
}
