//! # 统一错误处理模块
//!
//! 定义 kkrjij 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// kkrjij 统一错误类型
#[derive(Error, Debug)]
pub enum KkrError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("No Jij table found in {path}: header marker '{marker}' never appears")]
    MarkerNotFound { path: String, marker: String },

    #[error("Malformed Jij line{}: '{line}' ({tokens} tokens)\nReason: {reason}", line_suffix(.line_number))]
    ParseError {
        line_number: Option<usize>,
        line: String,
        tokens: usize,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 选择 / 聚合错误
    // ─────────────────────────────────────────────────────────────
    #[error("No Jij rows match the requested indices: {indices:?}")]
    EmptySelection { indices: Vec<i64> },

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to draw plot: {0}")]
    PlotError(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl KkrError {
    /// 为解析错误补上文件行号（表格提取器本身不知道绝对行号）
    pub fn at_line(self, number: usize) -> Self {
        match self {
            KkrError::ParseError {
                line_number: None,
                line,
                tokens,
                reason,
            } => KkrError::ParseError {
                line_number: Some(number),
                line,
                tokens,
                reason,
            },
            other => other,
        }
    }
}

fn line_suffix(line_number: &Option<usize>) -> String {
    match line_number {
        Some(n) => format!(" at line {}", n),
        None => String::new(),
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, KkrError>;
