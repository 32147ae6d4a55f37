//! # 分批器
//!
//! 按最大批量把条目序列切分为若干批次。纯函数，无错误路径。
//!
//! ## 依赖关系
//! - 被 `batch/mod.rs` 调用

/// 一个批次：有序条目，使用一次后丢弃
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub items: Vec<String>,
}

impl Batch {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// 切分条目序列
///
/// `max_size` 为 `None` 或 `Some(0)` 时不限制批量（恰好一批）；
/// 空序列不产生任何批次。
pub fn partition(items: Vec<String>, max_size: Option<usize>) -> Vec<Batch> {
    if items.is_empty() {
        return Vec::new();
    }

    match max_size {
        Some(k) if k > 0 => items.chunks(k).map(|c| Batch::new(c.to_vec())).collect(),
        _ => vec![Batch::new(items)],
    }
}
