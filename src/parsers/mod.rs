//! # 解析器模块
//!
//! 提供 AkaiKKR j 模式输出的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: akaikkr (整个输出文件), jij_table (表格块), jij_line (单行)

pub mod akaikkr;
pub mod jij_line;
pub mod jij_table;

pub use akaikkr::parse_kkr_output_file;
pub use jij_line::parse_jij_line;
pub use jij_table::extract_jij_table;
