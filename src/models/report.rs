//! # AkaiKKR 输出报告数据模型
//!
//! 一次扫描从输出文件中得到的全部信息：Jij 表、晶格头信息、平均场 Tc。
//!
//! ## 依赖关系
//! - 被 `parsers/akaikkr.rs` 构造
//! - 被 `commands/` 使用

use super::JijTable;

/// `brvtyp=` 行中的晶格信息
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeInfo {
    /// Bravais 格子类型 (fcc, bcc, hcp, ...)
    pub bravais: String,

    /// 晶格常数 a (bohr)
    pub a_bohr: f64,
}

/// 一个 AkaiKKR j 模式输出文件的解析结果
#[derive(Debug, Clone)]
pub struct KkrReport {
    /// 来源文件名
    pub source: String,

    /// 最后一个 Jij 块
    pub table: JijTable,

    /// 文件中出现的 Jij 块数量
    pub block_count: usize,

    pub lattice: Option<LatticeInfo>,

    /// 平均场近似下的 Curie 温度 (K)
    pub curie_temperature: Option<f64>,
}

impl KkrReport {
    pub fn new(source: impl Into<String>) -> Self {
        KkrReport {
            source: source.into(),
            table: JijTable::new(),
            block_count: 0,
            lattice: None,
            curie_temperature: None,
        }
    }

    /// 晶格常数 a (bohr)，文件中没有 `brvtyp=` 行时为 None
    pub fn lattice_constant(&self) -> Option<f64> {
        self.lattice.as_ref().map(|l| l.a_bohr)
    }
}
