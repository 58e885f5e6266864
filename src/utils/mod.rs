//! # 工具函数模块
//!
//! 提供美化输出和全局常量。
//!
//! ## 依赖关系
//! - 被 `commands/`, `parsers/` 模块使用
//! - 子模块: constants, output

pub mod constants;
pub mod output;
