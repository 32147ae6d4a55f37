//! # split 命令实现
//!
//! 按行数或字节数把文件切成若干片，输出到输入文件所在目录。
//!
//! ## 功能
//! - 文件名为 前缀 + 后缀：`a..z, aa, ab, ...` 或 `-d` 时 `00, 01, ...`
//! - 字节大小支持 `K`、`M`、`G`（1024 进制）
//! - 不产生空的尾部分片
//!
//! ## 依赖关系
//! - 使用 `cli/split.rs` 定义的参数
//! - 使用 `utils/glob.rs`, `utils/input.rs`

use crate::cli::split::SplitArgs;
use crate::error::{BashutilsError, Result};
use crate::utils::glob::expand_globs_for_reading;
use crate::utils::input::NamedInput;

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

const DEFAULT_LINES: u64 = 1000;

/// 切分方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chunking {
    Lines(u64),
    Bytes(u64),
}

/// 分片文件命名器
struct PieceNamer {
    dir: PathBuf,
    prefix: String,
    numeric: bool,
    index: usize,
}

impl PieceNamer {
    fn next_path(&mut self) -> PathBuf {
        let name = format!("{}{}", self.prefix, suffix(self.index, self.numeric));
        self.index += 1;
        self.dir.join(name)
    }

    fn create(&mut self) -> Result<(PathBuf, BufWriter<File>)> {
        let path = self.next_path();
        let file = File::create(&path).map_err(|e| BashutilsError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok((path, BufWriter::new(file)))
    }
}

/// 执行 split 命令
pub fn execute(args: SplitArgs) -> Result<()> {
    let chunking = match (args.lines, &args.bytes) {
        (Some(_), Some(_)) => {
            return Err(BashutilsError::InvalidArgument(
                "split: cannot split by lines and bytes simultaneously".to_string(),
            ))
        }
        (_, Some(size)) => Chunking::Bytes(parse_size(size)?),
        (Some(n), None) => Chunking::Lines(n),
        (None, None) => Chunking::Lines(DEFAULT_LINES),
    };
    if matches!(chunking, Chunking::Lines(0) | Chunking::Bytes(0)) {
        return Err(BashutilsError::InvalidArgument(
            "split: chunk size must be greater than zero".to_string(),
        ));
    }

    // 多个匹配时只处理第一个
    let path = expand_globs_for_reading(std::slice::from_ref(&args.file), "split")?
        .into_iter()
        .next()
        .ok_or_else(|| BashutilsError::InvalidArgument("split: no matching files found".to_string()))?;
    let input = NamedInput::open(&path)?;

    let dir = if input.is_stdin() {
        PathBuf::from(".")
    } else {
        Path::new(&path).parent().map(Path::to_path_buf).unwrap_or_default()
    };
    let mut namer = PieceNamer {
        dir,
        prefix: args.prefix,
        numeric: args.numeric_suffixes,
        index: 0,
    };

    split_into(input.reader, &input.name, chunking, &mut namer)?;
    Ok(())
}

/// 切分并返回生成的文件列表
///
/// 读取错误归到输入 `input_name`，写入错误归到分片文件。
fn split_into<R: BufRead>(
    mut reader: R,
    input_name: &str,
    chunking: Chunking,
    namer: &mut PieceNamer,
) -> Result<Vec<PathBuf>> {
    let read_err = |e: io::Error| BashutilsError::FileReadError {
        path: input_name.to_string(),
        source: e,
    };
    let mut pieces = Vec::new();

    loop {
        // 没有剩余数据时不再创建文件
        if reader.fill_buf().map_err(read_err)?.is_empty() {
            return Ok(pieces);
        }

        let (path, mut writer) = namer.create()?;
        let write_err = |e: io::Error| BashutilsError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        };

        match chunking {
            Chunking::Bytes(size) => {
                let mut remaining = size;
                while remaining > 0 {
                    let buf = reader.fill_buf().map_err(read_err)?;
                    if buf.is_empty() {
                        break;
                    }
                    let n = buf.len().min(usize::try_from(remaining).unwrap_or(usize::MAX));
                    writer.write_all(&buf[..n]).map_err(write_err)?;
                    reader.consume(n);
                    remaining -= n as u64;
                }
            }
            Chunking::Lines(count) => {
                let mut line = Vec::new();
                for _ in 0..count {
                    line.clear();
                    if reader.read_until(b'\n', &mut line).map_err(read_err)? == 0 {
                        break;
                    }
                    writer.write_all(&line).map_err(write_err)?;
                }
            }
        }

        writer.flush().map_err(write_err)?;
        pieces.push(path);
    }
}

/// 分片后缀：字母模式为双射 26 进制 (a..z, aa, ab, ...)
fn suffix(index: usize, numeric: bool) -> String {
    if numeric {
        return format!("{:02}", index);
    }

    let mut n = index;
    let mut letters = Vec::new();
    loop {
        letters.push(b'a' + (n % 26) as u8);
        n /= 26;
        if n == 0 {
            break;
        }
        n -= 1;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

/// 解析字节大小，如 `512`、`1K`、`2M`
fn parse_size(text: &str) -> Result<u64> {
    let text = text.trim();
    let invalid = || BashutilsError::InvalidArgument(format!("split: invalid byte size format: {text}"));

    let (digits, multiplier) = match text.chars().last() {
        Some('k' | 'K') => (&text[..text.len() - 1], 1024),
        Some('m' | 'M') => (&text[..text.len() - 1], 1024 * 1024),
        Some('g' | 'G') => (&text[..text.len() - 1], 1024 * 1024 * 1024),
        _ => (text, 1),
    };

    let value: u64 = digits.parse().map_err(|_| invalid())?;
    value.checked_mul(multiplier).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn namer(dir: &Path, numeric: bool) -> PieceNamer {
        PieceNamer {
            dir: dir.to_path_buf(),
            prefix: "x".to_string(),
            numeric,
            index: 0,
        }
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_suffix() {
        assert_eq!(suffix(0, false), "a");
        assert_eq!(suffix(25, false), "z");
        assert_eq!(suffix(26, false), "aa");
        assert_eq!(suffix(27, false), "ab");
        assert_eq!(suffix(0, true), "00");
        assert_eq!(suffix(12, true), "12");
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("512").unwrap(), 512);
        assert_eq!(parse_size("2K").unwrap(), 2048);
        assert_eq!(parse_size("1m").unwrap(), 1024 * 1024);
        assert!(parse_size("K").is_err());
        assert!(parse_size("abc").is_err());
    }

    #[test]
    fn test_split_by_lines() {
        let dir = tempfile::tempdir().unwrap();
        let pieces = split_into(
            "1\n2\n3\n4\n5\n".as_bytes(),
            "in.txt",
            Chunking::Lines(2),
            &mut namer(dir.path(), false),
        )
        .unwrap();

        assert_eq!(names(&pieces), ["xa", "xb", "xc"]);
        assert_eq!(fs::read_to_string(&pieces[0]).unwrap(), "1\n2\n");
        assert_eq!(fs::read_to_string(&pieces[2]).unwrap(), "5\n");
    }

    #[test]
    fn test_split_by_bytes_no_empty_tail() {
        let dir = tempfile::tempdir().unwrap();
        let pieces = split_into(
            "abcdef".as_bytes(),
            "in.txt",
            Chunking::Bytes(3),
            &mut namer(dir.path(), true),
        )
        .unwrap();

        assert_eq!(names(&pieces), ["x00", "x01"]);
        assert_eq!(fs::read_to_string(&pieces[1]).unwrap(), "def");
    }

    struct BrokenInput {
        sent: bool,
    }

    impl std::io::Read for BrokenInput {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.sent {
                return Err(io::Error::new(io::ErrorKind::Other, "device gone"));
            }
            self.sent = true;
            buf[..4].copy_from_slice(b"abcd");
            Ok(4)
        }
    }

    #[test]
    fn test_read_failure_names_input() {
        let dir = tempfile::tempdir().unwrap();
        let reader = io::BufReader::with_capacity(4, BrokenInput { sent: false });
        let err = split_into(reader, "in.txt", Chunking::Bytes(8), &mut namer(dir.path(), false))
            .unwrap_err();

        match err {
            BashutilsError::FileReadError { path, .. } => assert_eq!(path, "in.txt"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let pieces = split_into("".as_bytes(), "in.txt", Chunking::Lines(10), &mut namer(dir.path(), false)).unwrap();
        assert!(pieces.is_empty());
    }
}
