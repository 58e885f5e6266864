//! # 导出模块
//!
//! 把 Jij 表写成 CSV，或绘制 Jij-距离 图。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 子模块: table (CSV), plot (PNG)

pub mod plot;
pub mod table;

pub use plot::{generate_jij_plot, PlotOptions};
pub use table::{to_csv, JijCsvRow};
