//! # kkrjij - AkaiKKR Jij 提取工具
//!
//! 从 AkaiKKR j 模式输出中提取交换耦合常数 Jij 表，
//! 并可按编号筛选、求平均、导出。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (输出文件解析: 报告 -> 表格块 -> 单行)
//!   │     ├── analysis/  (筛选与平均)
//!   │     ├── export/    (CSV 与绘图)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (输出样式与常量)
//!   └── error.rs    (错误处理)
//! ```

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod error;
pub mod export;
pub mod models;
pub mod parsers;
pub mod utils;

pub use error::{KkrError, Result};
pub use models::{JijRecord, JijTable, KkrReport};
