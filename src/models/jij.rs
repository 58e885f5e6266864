//! # Jij 数据模型
//!
//! AkaiKKR j 模式输出中一行交换耦合数据 (`JijRecord`) 以及整张表 (`JijTable`)。
//!
//! ```text
//! index   site    comp           cell           distance     J_ij      J_ij(meV)   dgn
//!   3       1  1   14 14  0.0000 -1.0000  1.0000  1.414214    -0.000032   -0.431873   12
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/jij_line.rs`, `parsers/jij_table.rs` 构造
//! - 被 `analysis/`, `commands/`, `export/` 使用

use crate::utils::constants::{BOHR2ANG, RYD2MEV};

/// 表中的一行
#[derive(Debug, Clone, PartialEq)]
pub struct JijRecord {
    /// 原子对编号（同一块内唯一）
    pub index: i64,

    /// 位点 A, B
    pub site: [i64; 2],

    /// 组分 A, B
    pub comp: [i64; 2],

    /// 近邻所在晶胞的平移
    pub cell: [f64; 3],

    /// 实空间距离（以晶格常数 a 为单位）
    pub distance: f64,

    /// J_ij (Ry)
    pub jij_ryd: f64,

    /// J_ij (meV)，直接取自输出文件
    pub jij_mev: f64,

    /// 简并度
    pub dgn: i64,
}

impl JijRecord {
    /// 以 Å 为单位的距离
    pub fn distance_angstrom(&self, a_bohr: f64) -> f64 {
        self.distance * a_bohr * BOHR2ANG
    }

    /// Ry 列换算到 meV 后与 meV 列的偏差
    pub fn unit_mismatch(&self) -> f64 {
        (self.jij_ryd * RYD2MEV - self.jij_mev).abs()
    }
}

/// 可以求平均的数值列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum JijColumn {
    /// J_ij in meV
    #[default]
    Mev,
    /// J_ij in Ry
    Ryd,
    /// Pair distance (units of a)
    Distance,
}

impl JijColumn {
    pub fn value(&self, record: &JijRecord) -> f64 {
        match self {
            JijColumn::Mev => record.jij_mev,
            JijColumn::Ryd => record.jij_ryd,
            JijColumn::Distance => record.distance,
        }
    }
}

impl std::fmt::Display for JijColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JijColumn::Mev => write!(f, "J_ij (meV)"),
            JijColumn::Ryd => write!(f, "J_ij (Ry)"),
            JijColumn::Distance => write!(f, "distance"),
        }
    }
}

/// 一个 Jij 块，按文件顺序保存
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JijTable {
    records: Vec<JijRecord>,
}

impl JijTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: JijRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[JijRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JijRecord> {
        self.records.iter()
    }
}

impl From<Vec<JijRecord>> for JijTable {
    fn from(records: Vec<JijRecord>) -> Self {
        JijTable { records }
    }
}

impl<'a> IntoIterator for &'a JijTable {
    type Item = &'a JijRecord;
    type IntoIter = std::slice::Iter<'a, JijRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> JijRecord {
        JijRecord {
            index: 3,
            site: [1, 1],
            comp: [14, 14],
            cell: [0.0, -1.0, 1.0],
            distance: 1.414214,
            jij_ryd: -0.000032,
            jij_mev: -0.431873,
            dgn: 12,
        }
    }

    #[test]
    fn test_distance_angstrom() {
        let r = sample();
        // a = 5.27 bohr
        let d = r.distance_angstrom(5.27);
        assert!((d - 1.414214 * 5.27 * 0.5291772109).abs() < 1e-12);
    }

    #[test]
    fn test_unit_mismatch_within_print_resolution() {
        let r = sample();
        // -0.000032 Ry 只有两位有效数字
        assert!(r.unit_mismatch() < RYD2MEV * 1.0e-6);
    }

    #[test]
    fn test_column_value() {
        let r = sample();
        assert_eq!(JijColumn::Mev.value(&r), -0.431873);
        assert_eq!(JijColumn::Ryd.value(&r), -0.000032);
        assert_eq!(JijColumn::Distance.value(&r), 1.414214);
    }

    #[test]
    fn test_table_keeps_insertion_order() {
        let mut table = JijTable::new();
        for i in [5, 1, 5] {
            let mut r = sample();
            r.index = i;
            table.push(r);
        }
        let order: Vec<i64> = table.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![5, 1, 5]);
        assert_eq!(table.len(), 3);
    }
}
