//! # glob 展开
//!
//! 展开文件参数中的通配符，模拟 shell 行为：
//! - 含 `*`、`?`、`[` 的参数按 glob 展开，结果排序
//! - 无匹配时保留原始参数
//!
//! ## 依赖关系
//! - 被 `utils/input.rs` 和 `commands/split.rs` 使用
//! - 使用 `glob` crate

use crate::error::{BashutilsError, Result};
use crate::utils::output;
use std::path::Path;

/// 检查是否包含 glob 字符
fn contains_glob_chars(s: &str) -> bool {
    s.contains(|c: char| matches!(c, '*' | '?' | '['))
}

/// 展开 glob 模式
pub fn expand_globs(args: &[String]) -> Result<Vec<String>> {
    let mut expanded = Vec::new();

    for arg in args {
        if !contains_glob_chars(arg) {
            expanded.push(arg.clone());
            continue;
        }

        let paths = glob::glob(arg).map_err(|source| BashutilsError::GlobPattern {
            pattern: arg.clone(),
            source,
        })?;

        let mut matches: Vec<String> = paths
            .filter_map(|p| p.ok())
            .map(|p| p.display().to_string())
            .collect();

        if matches.is_empty() {
            expanded.push(arg.clone());
        } else {
            matches.sort();
            expanded.extend(matches);
        }
    }

    Ok(expanded)
}

/// 展开 glob 并跳过不存在的文件（给出警告）
///
/// `-` 表示标准输入，原样保留。
pub fn expand_globs_for_reading(args: &[String], tool: &str) -> Result<Vec<String>> {
    let expanded = expand_globs(args)?;

    Ok(expanded
        .into_iter()
        .filter(|path| {
            let keep = path == "-" || Path::new(path).exists();
            if !keep {
                output::print_warning(&format!("{tool}: {path}: No such file or directory"));
            }
            keep
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_plain_args_untouched() {
        let args = vec!["a.txt".to_string(), "b".to_string()];
        assert_eq!(expand_globs(&args).unwrap(), args);
    }

    #[test]
    fn test_glob_sorted_and_literal_fallback() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.log", "a.log", "c.txt"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        let base = dir.path().display().to_string();

        let got = expand_globs(&[format!("{base}/*.log")]).unwrap();
        assert_eq!(got, [format!("{base}/a.log"), format!("{base}/b.log")]);

        let missing = format!("{base}/*.csv");
        assert_eq!(expand_globs(&[missing.clone()]).unwrap(), [missing]);
    }

    #[test]
    fn test_for_reading_skips_missing() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("here.txt");
        fs::write(&present, "x").unwrap();

        let args = vec![
            present.display().to_string(),
            dir.path().join("gone.txt").display().to_string(),
            "-".to_string(),
        ];
        let got = expand_globs_for_reading(&args, "cat").unwrap();
        assert_eq!(got, [present.display().to_string(), "-".to_string()]);
    }

    #[test]
    fn test_bad_pattern() {
        assert!(matches!(
            expand_globs(&["[".to_string()]),
            Err(BashutilsError::GlobPattern { .. })
        ));
    }
}
