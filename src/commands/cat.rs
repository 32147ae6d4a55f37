//! # cat 命令实现
//!
//! 按字节拼接文件到标准输出。
//!
//! ## 依赖关系
//! - 使用 `cli/cat.rs` 定义的参数
//! - 使用 `utils/input.rs`

use crate::cli::cat::CatArgs;
use crate::error::Result;
use crate::utils::input::open_inputs;

use std::io::{self, BufWriter, Write};

/// 执行 cat 命令
pub fn execute(args: CatArgs) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());

    for mut input in open_inputs(&args.files, "cat")? {
        io::copy(&mut input.reader, &mut out)?;
    }

    out.flush()?;
    Ok(())
}
