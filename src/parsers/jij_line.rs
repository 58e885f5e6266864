//! # Jij 数据行解析器
//!
//! 把 Jij 块中的一行固定列文本解析为 `JijRecord`。
//!
//! ## 行格式
//! ```text
//! index  siteA siteB  compA compB  cell_x cell_y cell_z  distance  J_ij(Ry)  J_ij(meV)  dgn
//!   3       1  1        14 14      0.0000 -1.0000 1.0000  1.414214  -0.000032 -0.431873   12
//! ```
//! 第 12 列之后的内容被忽略。
//!
//! ## 依赖关系
//! - 被 `parsers/jij_table.rs` 使用
//! - 使用 `models/jij.rs`

use crate::error::{KkrError, Result};
use crate::models::JijRecord;
use std::str::FromStr;

/// 一行至少需要的 token 数
pub const JIJ_LINE_TOKENS: usize = 12;

/// 解析一行 Jij 数据
pub fn parse_jij_line(line: &str) -> Result<JijRecord> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.len() < JIJ_LINE_TOKENS {
        return Err(parse_error(
            line,
            parts.len(),
            format!(
                "expected at least {} tokens, found {}",
                JIJ_LINE_TOKENS,
                parts.len()
            ),
        ));
    }

    Ok(JijRecord {
        index: parse_token(line, &parts, 0, "index")?,
        site: [
            parse_token(line, &parts, 1, "site A")?,
            parse_token(line, &parts, 2, "site B")?,
        ],
        comp: [
            parse_token(line, &parts, 3, "comp A")?,
            parse_token(line, &parts, 4, "comp B")?,
        ],
        cell: [
            parse_token(line, &parts, 5, "cell x")?,
            parse_token(line, &parts, 6, "cell y")?,
            parse_token(line, &parts, 7, "cell z")?,
        ],
        distance: parse_token(line, &parts, 8, "distance")?,
        jij_ryd: parse_token(line, &parts, 9, "J_ij (Ry)")?,
        jij_mev: parse_token(line, &parts, 10, "J_ij (meV)")?,
        dgn: parse_token(line, &parts, 11, "dgn")?,
    })
}

/// 把第 `i` 个 token 解析为目标类型
fn parse_token<T: FromStr>(line: &str, parts: &[&str], i: usize, name: &str) -> Result<T> {
    parts[i].parse::<T>().map_err(|_| {
        parse_error(
            line,
            parts.len(),
            format!(
                "cannot parse {} from token {} ('{}')",
                name,
                i + 1,
                parts[i]
            ),
        )
    })
}

fn parse_error(line: &str, tokens: usize, reason: String) -> KkrError {
    KkrError::ParseError {
        line_number: None,
        line: line.trim_end().to_string(),
        tokens,
        reason,
    }
}
