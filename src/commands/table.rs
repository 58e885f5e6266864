//! # 表格输出
//!
//! 未给出编号时执行：打印完整 Jij 表（或按编号汇总），
//! 附带 Tc、单位一致性检查，可选导出 CSV 和 Jij-距离 图。
//!
//! ## 依赖关系
//! - 使用 `cli/` 定义的参数
//! - 使用 `analysis/`, `export/`, `utils/output.rs`

use crate::analysis::{self, IndexSummary};
use crate::cli::Cli;
use crate::error::Result;
use crate::export::{self, PlotOptions};
use crate::models::{JijRecord, JijTable, KkrReport};
use crate::utils::constants::{RYD2MEV, RYD_PRINT_RESOLUTION};
use crate::utils::output;

use std::collections::BTreeSet;
use tabled::{Table, Tabled};

/// 表格中的一行
#[derive(Debug, Clone, Tabled)]
struct JijRow {
    #[tabled(rename = "index")]
    index: i64,
    #[tabled(rename = "site")]
    site: String,
    #[tabled(rename = "comp")]
    comp: String,
    #[tabled(rename = "cell")]
    cell: String,
    #[tabled(rename = "distance")]
    distance: String,
    #[tabled(rename = "J_ij (Ry)")]
    jij_ryd: String,
    #[tabled(rename = "J_ij (meV)")]
    jij_mev: String,
    #[tabled(rename = "dgn")]
    dgn: i64,
}

impl From<&JijRecord> for JijRow {
    fn from(r: &JijRecord) -> Self {
        JijRow {
            index: r.index,
            site: format!("{} {}", r.site[0], r.site[1]),
            comp: format!("{} {}", r.comp[0], r.comp[1]),
            cell: format!("{:.4} {:.4} {:.4}", r.cell[0], r.cell[1], r.cell[2]),
            distance: format!("{:.6}", r.distance),
            jij_ryd: format!("{:.6}", r.jij_ryd),
            jij_mev: format!("{:.6}", r.jij_mev),
            dgn: r.dgn,
        }
    }
}

/// 附加 Å 距离列
#[derive(Debug, Clone, Tabled)]
struct JijRowAngstrom {
    #[tabled(inline)]
    base: JijRow,
    #[tabled(rename = "r (Å)")]
    r_angstrom: String,
}

/// 按编号汇总的一行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "index")]
    index: i64,
    #[tabled(rename = "site")]
    site: String,
    #[tabled(rename = "comp")]
    comp: String,
    #[tabled(rename = "distance")]
    distance: String,
    #[tabled(rename = "rows")]
    rows: usize,
    #[tabled(rename = "Σ dgn")]
    total_dgn: i64,
    #[tabled(rename = "mean J_ij (meV)")]
    mean_mev: String,
}

impl From<&IndexSummary> for SummaryRow {
    fn from(s: &IndexSummary) -> Self {
        SummaryRow {
            index: s.index,
            site: format!("{} {}", s.site[0], s.site[1]),
            comp: format!("{} {}", s.comp[0], s.comp[1]),
            distance: format!("{:.6}", s.distance),
            rows: s.rows,
            total_dgn: s.total_dgn,
            mean_mev: format!("{:.6}", s.mean_mev),
        }
    }
}

/// 执行表格输出
pub fn execute(cli: &Cli, report: &KkrReport, a_bohr: Option<f64>) -> Result<()> {
    output::print_header(&format!("Jij table: {}", report.source));

    if let Some(lattice) = &report.lattice {
        output::print_info(&format!(
            "Lattice: {}  a = {:.5} bohr",
            lattice.bravais, lattice.a_bohr
        ));
    }
    if report.block_count > 1 {
        output::print_warning(&format!(
            "{} Jij blocks found, showing the last one",
            report.block_count
        ));
    }
    if report.table.is_empty() {
        output::print_warning("Jij block is empty");
    }

    let records = report.table.records();
    if cli.summary {
        println!("{}", render_summary(&report.table));
    } else {
        println!("{}", render_table(records, a_bohr));
    }

    output::print_info(&format!("{} Jij rows", records.len()));
    if let Some(tc) = report.curie_temperature {
        output::print_info(&format!("Tc (in mean field approximation) = {:.2} K", tc));
    }

    let mismatched = count_unit_mismatches(records);
    if mismatched > 0 {
        output::print_warning(&format!(
            "{} rows where J_ij (Ry) x {} differs from J_ij (meV) beyond print precision",
            mismatched, RYD2MEV
        ));
    }

    if let Some(path) = &cli.output_csv {
        export::to_csv(records, a_bohr, path)?;
        output::print_success(&format!("Jij table saved to '{}'", path.display()));
    }

    if let Some(path) = &cli.plot {
        let highlight = BTreeSet::new();
        export::generate_jij_plot(
            records,
            path,
            &PlotOptions {
                title: &report.source,
                a_bohr,
                highlight: &highlight,
                width: 1000,
                height: 700,
            },
        )?;
        output::print_success(&format!("Jij plot saved to '{}'", path.display()));
    }

    Ok(())
}

/// 渲染完整表格
fn render_table(records: &[JijRecord], a_bohr: Option<f64>) -> String {
    match a_bohr {
        Some(a) => {
            let rows: Vec<JijRowAngstrom> = records
                .iter()
                .map(|r| JijRowAngstrom {
                    base: JijRow::from(r),
                    r_angstrom: format!("{:.6}", r.distance_angstrom(a)),
                })
                .collect();
            Table::new(&rows).to_string()
        }
        None => {
            let rows: Vec<JijRow> = records.iter().map(JijRow::from).collect();
            Table::new(&rows).to_string()
        }
    }
}

/// 渲染按编号汇总的表格
fn render_summary(table: &JijTable) -> String {
    let rows: Vec<SummaryRow> = analysis::summarize_by_index(table)
        .iter()
        .map(SummaryRow::from)
        .collect();
    Table::new(&rows).to_string()
}

/// 换算偏差超过打印精度的行数
fn count_unit_mismatches(records: &[JijRecord]) -> usize {
    let tolerance = RYD2MEV * RYD_PRINT_RESOLUTION;
    records
        .iter()
        .filter(|r| r.unit_mismatch() > tolerance)
        .count()
}
