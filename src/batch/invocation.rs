//! # 命令行构造
//!
//! 由命令模板和批次生成实际执行的 argv。
//!
//! ## 两种模式
//! - 追加模式：模板 + 批次条目作为尾随参数，每批一次调用
//! - 占位符模式：模板中每个 token 内的占位符替换为单个条目，每条目一次调用
//!
//! ## 依赖关系
//! - 被 `batch/mod.rs` 调用
//! - 使用 `batch/batcher.rs` 的 `Batch`

use super::batcher::Batch;
use std::fmt;

/// 命令模板：程序名 + 固定参数，运行期间不可变
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    tokens: Vec<String>,
}

impl CommandTemplate {
    /// 创建命令模板；空 token 列表返回 `None`
    pub fn new(tokens: Vec<String>) -> Option<Self> {
        if tokens.is_empty() {
            None
        } else {
            Some(Self { tokens })
        }
    }

    /// 由程序名和初始参数创建，总是非空
    pub fn from_program(program: &str, args: &[&str]) -> Self {
        let mut tokens = vec![program.to_string()];
        tokens.extend(args.iter().map(|s| s.to_string()));
        Self { tokens }
    }

    #[cfg(test)]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// 追加模式：模板后接批次全部条目
    pub fn with_trailing(&self, items: &[String]) -> Invocation {
        let mut argv = self.tokens.clone();
        argv.extend_from_slice(items);
        Invocation { argv }
    }

    /// 占位符模式：替换每个 token 中出现的全部占位符
    pub fn with_substitution(&self, placeholder: &str, item: &str) -> Invocation {
        let argv = self
            .tokens
            .iter()
            .map(|token| token.replace(placeholder, item))
            .collect();
        Invocation { argv }
    }
}

/// 一次实际执行的命令行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    argv: Vec<String>,
}

impl Invocation {
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// 程序名（argv[0]）
    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    /// 程序参数
    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv.join(" "))
    }
}

/// 为一个批次构造全部调用
pub fn build_invocations(
    template: &CommandTemplate,
    batch: &Batch,
    placeholder: Option<&str>,
) -> Vec<Invocation> {
    match placeholder {
        Some(token) => batch
            .items
            .iter()
            .map(|item| template.with_substitution(token, item))
            .collect(),
        None => vec![template.with_trailing(&batch.items)],
    }
}
