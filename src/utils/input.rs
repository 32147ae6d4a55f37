//! # 输入读取工具
//!
//! 打开文件参数（或标准输入），按行读取。
//!
//! ## 功能
//! - 无文件参数或参数为 `-` 时读标准输入
//! - 文件参数先经过 glob 展开
//! - 按行读取时非 UTF-8 字节做有损替换，去掉行尾 `\n` / `\r\n`
//!
//! ## 依赖关系
//! - 被各文本过滤命令使用
//! - 使用 `utils/glob.rs`

use crate::error::{BashutilsError, Result};
use crate::utils::glob::expand_globs_for_reading;

use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// 一个已打开的输入源
pub struct NamedInput {
    /// 显示用名称，标准输入为 `-`
    pub name: String,
    pub reader: Box<dyn BufRead>,
}

impl NamedInput {
    pub fn stdin() -> Self {
        Self {
            name: "-".to_string(),
            reader: Box::new(BufReader::new(io::stdin())),
        }
    }

    pub fn is_stdin(&self) -> bool {
        self.name == "-"
    }

    /// 打开文件
    pub fn open(path: &str) -> Result<Self> {
        if path == "-" {
            return Ok(Self::stdin());
        }
        let file = File::open(path).map_err(|e| BashutilsError::FileReadError {
            path: path.to_string(),
            source: e,
        })?;
        Ok(Self {
            name: path.to_string(),
            reader: Box::new(BufReader::new(file)),
        })
    }

    /// 逐行迭代
    pub fn lines(self) -> LossyLines<Box<dyn BufRead>> {
        lines(self.reader)
    }
}

/// 打开全部输入；没有文件参数时返回标准输入
pub fn open_inputs(files: &[String], tool: &str) -> Result<Vec<NamedInput>> {
    if files.is_empty() {
        return Ok(vec![NamedInput::stdin()]);
    }

    expand_globs_for_reading(files, tool)?
        .iter()
        .map(|path| NamedInput::open(path))
        .collect()
}

/// 读取全部输入的所有行
pub fn read_all_lines(files: &[String], tool: &str) -> Result<Vec<String>> {
    let mut all = Vec::new();
    for input in open_inputs(files, tool)? {
        for line in input.lines() {
            all.push(line?);
        }
    }
    Ok(all)
}

/// 有损按行迭代器
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

/// 创建按行迭代器
pub fn lines<R: BufRead>(reader: R) -> LossyLines<R> {
    LossyLines {
        reader,
        buf: Vec::new(),
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.ends_with(b"\n") {
                    self.buf.pop();
                    if self.buf.ends_with(b"\r") {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &[u8]) -> Vec<String> {
        lines(input).collect::<io::Result<_>>().unwrap()
    }

    #[test]
    fn test_lines_strip_terminators() {
        assert_eq!(collect(b"a\nb\r\nc"), ["a", "b", "c"]);
        assert_eq!(collect(b"\n\nx\n"), ["", "", "x"]);
        assert!(collect(b"").is_empty());
    }

    #[test]
    fn test_lines_lossy() {
        let got = collect(b"ok\n\xffbad\n");
        assert_eq!(got[0], "ok");
        assert!(got[1].ends_with("bad"));
    }

    #[test]
    fn test_read_all_lines_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        std::fs::write(&a, "1\n2\n").unwrap();
        std::fs::write(&b, "3\n").unwrap();

        let files = vec![a.display().to_string(), b.display().to_string()];
        assert_eq!(read_all_lines(&files, "test").unwrap(), ["1", "2", "3"]);
    }
}
