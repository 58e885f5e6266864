//! # 按编号筛选与求平均
//!
//! 请求的编号按集合处理（重复编号合并）；表中同一编号的多行全部保留并参与平均。
//! 没有任何匹配时返回 `EmptySelection`，不返回 NaN。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/jij.rs`

use crate::error::{KkrError, Result};
use crate::models::{JijColumn, JijRecord, JijTable};
use std::collections::{BTreeSet, HashMap};

/// 把命令行给出的编号整理成集合
pub fn index_set(indices: &[i64]) -> BTreeSet<i64> {
    indices.iter().copied().collect()
}

/// 按编号筛选，保持文件顺序
pub fn select<'a>(table: &'a JijTable, indices: &BTreeSet<i64>) -> Vec<&'a JijRecord> {
    table
        .iter()
        .filter(|r| indices.contains(&r.index))
        .collect()
}

/// 选中行在某一列上的算术平均
pub fn average_column(
    table: &JijTable,
    indices: &BTreeSet<i64>,
    column: JijColumn,
) -> Result<f64> {
    let selected = select(table, indices);

    if selected.is_empty() {
        return Err(KkrError::EmptySelection {
            indices: indices.iter().copied().collect(),
        });
    }

    let sum: f64 = selected.iter().map(|r| column.value(r)).sum();
    Ok(sum / selected.len() as f64)
}

/// 选中行 J_ij (meV) 的平均
pub fn average_mev(table: &JijTable, indices: &BTreeSet<i64>) -> Result<f64> {
    average_column(table, indices, JijColumn::Mev)
}

/// 一个编号的汇总
#[derive(Debug, Clone, PartialEq)]
pub struct IndexSummary {
    pub index: i64,
    pub site: [i64; 2],
    pub comp: [i64; 2],
    pub distance: f64,
    pub rows: usize,
    pub total_dgn: i64,
    pub mean_mev: f64,
}

/// 按编号分组汇总，顺序为编号首次出现的顺序
///
/// site/comp/distance 取该编号第一行的值。
pub fn summarize_by_index(table: &JijTable) -> Vec<IndexSummary> {
    let mut order: Vec<IndexSummary> = Vec::new();
    let mut position: HashMap<i64, usize> = HashMap::new();
    let mut sums: Vec<f64> = Vec::new();

    for r in table {
        match position.get(&r.index) {
            Some(&i) => {
                order[i].rows += 1;
                order[i].total_dgn += r.dgn;
                sums[i] += r.jij_mev;
            }
            None => {
                position.insert(r.index, order.len());
                order.push(IndexSummary {
                    index: r.index,
                    site: r.site,
                    comp: r.comp,
                    distance: r.distance,
                    rows: 1,
                    total_dgn: r.dgn,
                    mean_mev: 0.0,
                });
                sums.push(r.jij_mev);
            }
        }
    }

    for (summary, sum) in order.iter_mut().zip(sums) {
        summary.mean_mev = sum / summary.rows as f64;
    }

    order
}
