//! # 按编号求平均
//!
//! 给出编号时执行：在 stdout 上只打印一个数（选中行某列的平均值，默认 J_ij (meV)）。
//! 可选把选中行导出为 CSV，或绘图时把选中编号标红。
//!
//! ## 依赖关系
//! - 使用 `cli/` 定义的参数
//! - 使用 `analysis/aggregate.rs`, `export/`

use crate::analysis;
use crate::cli::Cli;
use crate::error::Result;
use crate::export::{self, PlotOptions};
use crate::models::KkrReport;
use crate::utils::output;

use log::debug;

/// 执行平均值计算
pub fn execute(cli: &Cli, report: &KkrReport, a_bohr: Option<f64>) -> Result<()> {
    let indices = analysis::index_set(&cli.jij_index);
    let mean = analysis::average_column(&report.table, &indices, cli.column)?;

    let selected = analysis::select(&report.table, &indices);
    debug!(
        "Mean {} over {} rows for indices {:?}",
        cli.column,
        selected.len(),
        indices
    );

    println!("{}", mean);

    if let Some(path) = &cli.output_csv {
        export::to_csv(selected.iter().copied(), a_bohr, path)?;
        output::print_success(&format!(
            "{} selected rows saved to '{}'",
            selected.len(),
            path.display()
        ));
    }

    if let Some(path) = &cli.plot {
        export::generate_jij_plot(
            report.table.records(),
            path,
            &PlotOptions {
                title: &report.source,
                a_bohr,
                highlight: &indices,
                width: 1000,
                height: 700,
            },
        )?;
        output::print_success(&format!("Jij plot saved to '{}'", path.display()));
    }

    Ok(())
}
