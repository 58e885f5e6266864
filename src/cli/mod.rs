//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 用法
//! - `kkrjij <file>`：打印完整 Jij 表
//! - `kkrjij <file> <index>...`：打印选中编号的 J_ij (meV) 平均值
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/`

use crate::models::JijColumn;
use clap::Parser;
use std::path::PathBuf;

/// kkrjij - AkaiKKR Jij 提取工具
#[derive(Parser, Debug)]
#[command(name = "kkrjij")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Extract Jij values from AkaiKKR output (unit of Jij is meV)",
    long_about = None
)]
pub struct Cli {
    /// Output file name of AkaiKKR containing Jij values (j mode)
    pub akaikkr_file: PathBuf,

    /// Index of Jij in the output file; prints the mean J_ij (meV) over these indices
    pub jij_index: Vec<i64>,

    /// Column to average over the selected indices
    #[arg(long, value_enum, default_value = "mev", requires = "jij_index")]
    pub column: JijColumn,

    /// Print one row per distinct index instead of the full table
    #[arg(long, default_value_t = false, conflicts_with = "jij_index")]
    pub summary: bool,

    /// Add pair distances in Å (needs the brvtyp= lattice header in the file)
    #[arg(long, default_value_t = false)]
    pub angstrom: bool,

    /// Write the table (or the selected rows) to a CSV file
    #[arg(long)]
    pub output_csv: Option<PathBuf>,

    /// Plot J_ij (meV) against pair distance to a PNG file
    #[arg(long)]
    pub plot: Option<PathBuf>,

    /// Show debug diagnostics (RUST_LOG overrides this)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
