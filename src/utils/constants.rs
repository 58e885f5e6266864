//! # 全局常量
//!
//! AkaiKKR 输出中的关键字和单位换算系数。进程内只读，不会被修改。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `models/`, `analysis/` 使用

/// Jij 表头标记（间距必须完全一致）
pub const JIJ_DETECT_KEYWORD: &str = "index   site    comp";

/// 输入回显中包含晶格常数 a 的行
pub const LATTICE_FACTOR_KEYWORD: &str = "brvtyp=";

/// Bohr -> Å
pub const BOHR2ANG: f64 = 0.5291772109;

/// Ry -> meV
pub const RYD2MEV: f64 = 13605.693122994;

/// AkaiKKR 打印 J_ij (Ry) 列时的最小分辨率（6 位小数）
pub const RYD_PRINT_RESOLUTION: f64 = 1.0e-6;

/// 表格结束后常见的平均场 Tc 行
pub const CURIE_TEMPERATURE_KEYWORD: &str = "Tc (in mean field approximation)";
