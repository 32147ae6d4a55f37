//! # 工具函数模块
//!
//! 提供诊断输出、glob 展开、输入读取等工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `batch/` 模块使用
//! - 子模块: output, glob, input

pub mod glob;
pub mod input;
pub mod output;
