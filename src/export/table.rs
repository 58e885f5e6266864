//! # Jij 表 CSV 导出
//!
//! 每行一个 `JijRecord`，site/comp/cell 展开为独立列。
//! 给出晶格常数时附加 `distance_angstrom` 列，否则该列为空。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `csv` + `serde` 写入

use crate::error::{KkrError, Result};
use crate::models::JijRecord;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// CSV 中的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JijCsvRow {
    pub index: i64,
    pub site_a: i64,
    pub site_b: i64,
    pub comp_a: i64,
    pub comp_b: i64,
    pub cell_x: f64,
    pub cell_y: f64,
    pub cell_z: f64,
    pub distance: f64,
    pub jij_ryd: f64,
    pub jij_mev: f64,
    pub dgn: i64,
    pub distance_angstrom: Option<f64>,
}

impl JijCsvRow {
    pub fn from_record(r: &JijRecord, a_bohr: Option<f64>) -> Self {
        JijCsvRow {
            index: r.index,
            site_a: r.site[0],
            site_b: r.site[1],
            comp_a: r.comp[0],
            comp_b: r.comp[1],
            cell_x: r.cell[0],
            cell_y: r.cell[1],
            cell_z: r.cell[2],
            distance: r.distance,
            jij_ryd: r.jij_ryd,
            jij_mev: r.jij_mev,
            dgn: r.dgn,
            distance_angstrom: a_bohr.map(|a| r.distance_angstrom(a)),
        }
    }
}

/// 导出为 CSV
pub fn to_csv<'a, I>(records: I, a_bohr: Option<f64>, output_path: &Path) -> Result<()>
where
    I: IntoIterator<Item = &'a JijRecord>,
{
    let mut wtr = csv::Writer::from_path(output_path)?;

    for r in records {
        wtr.serialize(JijCsvRow::from_record(r, a_bohr))?;
    }

    wtr.flush().map_err(|e| KkrError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
