//! # 统一错误处理模块
//!
//! 定义 bashutils 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use std::io;
use thiserror::Error;

/// bashutils 统一错误类型
#[derive(Error, Debug)]
pub enum BashutilsError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ─────────────────────────────────────────────────────────────
    // 批量执行引擎错误 (xargs)
    // ─────────────────────────────────────────────────────────────
    #[error("error reading input: {source}")]
    InputRead {
        #[source]
        source: io::Error,
    },

    #[error("{program}: cannot run '{argv}': {source}")]
    Launch {
        program: String,
        argv: String,
        #[source]
        source: io::Error,
    },

    #[error("'{argv}' exited with status {code}")]
    ChildExit { argv: String, code: i32 },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range format: {0}")]
    InvalidRange(String),

    #[error("Invalid glob pattern '{pattern}': {source}")]
    GlobPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Invalid regex pattern: {0}")]
    Regex(#[from] regex::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    /// grep 未选中任何行；只影响退出码，不打印
    #[error("no lines selected")]
    NoMatch,
}

impl BashutilsError {
    /// 进程退出码
    pub fn exit_code(&self) -> i32 {
        match self {
            BashutilsError::ChildExit { code, .. } => *code,
            BashutilsError::Launch { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                127
            }
            BashutilsError::Launch { .. } => 126,
            _ => 1,
        }
    }

    /// 是否需要向用户打印错误信息
    pub fn is_silent(&self) -> bool {
        matches!(self, BashutilsError::NoMatch) || self.is_broken_pipe()
    }

    /// 下游读端已关闭（如 `| head`），按成功处理
    pub fn is_broken_pipe(&self) -> bool {
        let source = match self {
            BashutilsError::Io(e) => e,
            BashutilsError::FileWriteError { source, .. } => source,
            _ => return false,
        };
        source.kind() == io::ErrorKind::BrokenPipe
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, BashutilsError>;
