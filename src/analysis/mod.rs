//! # 分析模块
//!
//! 对提取出的 Jij 表进行筛选和统计。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 子模块: aggregate

pub mod aggregate;

pub use aggregate::{
    average_column, average_mev, index_set, select, summarize_by_index, IndexSummary,
};
