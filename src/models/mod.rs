//! # 数据模型模块
//!
//! 定义 Jij 表和整个 AkaiKKR 输出报告的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `analysis/`, `commands/` 使用
//! - 子模块: jij, report

pub mod jij;
pub mod report;

pub use jij::{JijColumn, JijRecord, JijTable};
pub use report::{KkrReport, LatticeInfo};
