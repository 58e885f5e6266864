//! # Jij 表格提取器
//!
//! 从表头标记的下一行开始逐行读取，直到空行或首个 token 不是整数的行
//! （例如 `Tc (in mean field approximation) = ...`）。
//! 结束判断在解析之前进行，触发结束的那一行被消费掉，不进入表格。
//!
//! ## 依赖关系
//! - 被 `parsers/akaikkr.rs` 使用
//! - 使用 `parsers/jij_line.rs`, `models/jij.rs`

use super::jij_line::parse_jij_line;
use crate::error::Result;
use crate::models::JijTable;
use log::{debug, trace};

/// 从一组已经定位在表头之后的行中提取 Jij 表
pub fn extract_jij_table<I, S>(lines: I) -> Result<JijTable>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extract_jij_table_from_stream(lines.into_iter().map(Ok))
}

/// 同上，但行来自可能失败的流（如 `BufRead::lines`）
///
/// 任何一行解析失败都会使整个提取失败，不返回部分结果。
pub fn extract_jij_table_from_stream<I, S>(lines: I) -> Result<JijTable>
where
    I: Iterator<Item = Result<S>>,
    S: AsRef<str>,
{
    let mut table = JijTable::new();

    for line in lines {
        let line = line?;
        let line = line.as_ref();

        if is_end_of_table(line) {
            debug!("Jij block ended after {} rows at: {:?}", table.len(), line.trim());
            return Ok(table);
        }

        let record = parse_jij_line(line)?;
        trace!("Jij row: {:?}", record);
        table.push(record);
    }

    debug!("Jij block ended at end of input after {} rows", table.len());
    Ok(table)
}

/// 空行，或首个 token 不是整数
pub fn is_end_of_table(line: &str) -> bool {
    match line.split_whitespace().next() {
        None => true,
        Some(first) => first.parse::<i64>().is_err(),
    }
}
