//! # 命令执行模块
//!
//! 解析输入文件后按参数分派：
//! - 未给出编号：打印完整表格（或按编号汇总）
//! - 给出编号：打印选中行的平均值
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `analysis/`, `export/`, `utils/`
//! - 子模块: table, average

pub mod average;
pub mod table;

use crate::cli::Cli;
use crate::error::{KkrError, Result};
use crate::models::KkrReport;
use crate::parsers;
use crate::utils::constants::LATTICE_FACTOR_KEYWORD;

use log::debug;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    let report = parsers::parse_kkr_output_file(&cli.akaikkr_file)?;
    debug!(
        "Parsed {}: {} rows, {} block(s)",
        report.source,
        report.table.len(),
        report.block_count
    );

    let a_bohr = resolve_lattice_constant(cli.angstrom && uses_distances(&cli), &report)?;

    if cli.jij_index.is_empty() {
        table::execute(&cli, &report, a_bohr)
    } else {
        average::execute(&cli, &report, a_bohr)
    }
}

/// 平均值模式只打印一个数，只有导出 CSV 或绘图时才用到距离
fn uses_distances(cli: &Cli) -> bool {
    cli.jij_index.is_empty() || cli.output_csv.is_some() || cli.plot.is_some()
}

/// `--angstrom` 时必须能从文件中得到晶格常数
fn resolve_lattice_constant(angstrom: bool, report: &KkrReport) -> Result<Option<f64>> {
    if !angstrom {
        return Ok(None);
    }

    report.lattice_constant().map(Some).ok_or_else(|| {
        KkrError::InvalidArgument(format!(
            "--angstrom needs a '{}' lattice header, none found in {}",
            LATTICE_FACTOR_KEYWORD, report.source
        ))
    })
}
