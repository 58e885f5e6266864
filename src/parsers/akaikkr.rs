//! # AkaiKKR j 模式输出解析器
//!
//! 逐行扫描 AkaiKKR 输出文件：
//! - 记录 `brvtyp=` 行中的 Bravais 类型和晶格常数 a
//! - 找到 Jij 表头标记后把剩余行交给表格提取器
//! - 记录平均场 Tc（通常紧跟在表格之后）
//!
//! 标记出现多次时，每次都重新提取，保留最后一个块。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `parsers/jij_table.rs`, `models/report.rs`

use super::jij_table::extract_jij_table_from_stream;
use crate::error::{KkrError, Result};
use crate::models::{KkrReport, LatticeInfo};
use crate::utils::constants::{
    CURIE_TEMPERATURE_KEYWORD, JIJ_DETECT_KEYWORD, LATTICE_FACTOR_KEYWORD,
};

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::cell::Cell;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

static BRAVAIS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"brvtyp\s*=\s*([A-Za-z0-9]+)").expect("valid brvtyp regex"));

// `c/a=`, `b/a=` 不能被当成 `a=`
static LATTICE_A_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[\s,])a\s*=\s*([-+]?(?:\d+\.?\d*|\.\d+)(?:[eEdD][-+]?\d+)?)")
        .expect("valid lattice constant regex")
});

static CURIE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Tc\s*\(in mean field approximation\)\s*=\s*([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)")
        .expect("valid Tc regex")
});

/// 解析 AkaiKKR 输出文件
pub fn parse_kkr_output_file(path: &Path) -> Result<KkrReport> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => KkrError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => KkrError::FileReadError {
            path: path.display().to_string(),
            source: e,
        },
    })?;

    // 文件句柄随 reader 在函数返回时关闭（包括出错路径）
    parse_kkr_output(BufReader::new(file), &path.display().to_string())
}

/// 从任意 `BufRead` 解析 AkaiKKR 输出
pub fn parse_kkr_output<R: BufRead>(reader: R, name: &str) -> Result<KkrReport> {
    let mut report = KkrReport::new(name);

    let line_number = Cell::new(0usize);
    let curie_temperature = Cell::new(None);
    // 表格提取器把紧跟的下一个表头当作结束行消费掉时，由这里记下
    let marker_seen = Cell::new(false);

    let mut lines = reader
        .lines()
        .map(|l| {
            l.map_err(|e| KkrError::FileReadError {
                path: name.to_string(),
                source: e,
            })
        })
        .inspect(|l| {
            line_number.set(line_number.get() + 1);
            if let Ok(line) = l {
                if line.contains(JIJ_DETECT_KEYWORD) {
                    marker_seen.set(true);
                }
                if let Some(tc) = parse_curie_temperature(line) {
                    curie_temperature.set(Some(tc));
                }
            }
        });

    while let Some(line) = lines.next() {
        let line = line?;

        if report.lattice.is_none() && line.contains(LATTICE_FACTOR_KEYWORD) {
            report.lattice = parse_lattice_line(&line);
            debug!(
                "Lattice header at line {}: {:?}",
                line_number.get(),
                report.lattice
            );
        }

        let mut start_block = line.contains(JIJ_DETECT_KEYWORD);
        while start_block {
            let marker_line = line_number.get();
            if report.block_count > 0 {
                debug!(
                    "Another Jij block starts at line {}; it replaces the previous one",
                    marker_line
                );
            }

            marker_seen.set(false);
            report.table = extract_jij_table_from_stream(lines.by_ref())
                .map_err(|e| e.at_line(line_number.get()))?;
            report.block_count += 1;

            debug!(
                "Jij block #{} after header at line {}: {} rows",
                report.block_count,
                marker_line,
                report.table.len()
            );

            // 表头行不可能是数据行，只可能是结束行
            start_block = marker_seen.get();
        }
    }

    if report.block_count == 0 {
        return Err(KkrError::MarkerNotFound {
            path: name.to_string(),
            marker: JIJ_DETECT_KEYWORD.to_string(),
        });
    }

    report.curie_temperature = curie_temperature.get();
    Ok(report)
}

/// 从 `brvtyp=` 行提取 Bravais 类型和晶格常数 a (bohr)
///
/// 例如 `brvtyp=bcc   a=  5.27000  c/a= 1.000  b/a= 1.000`。
pub fn parse_lattice_line(line: &str) -> Option<LatticeInfo> {
    let bravais = BRAVAIS_RE.captures(line)?.get(1)?.as_str().to_string();
    let a_bohr = LATTICE_A_RE
        .captures(line)?
        .get(1)?
        .as_str()
        .replace(['d', 'D'], "e")
        .parse::<f64>()
        .ok()?;

    Some(LatticeInfo { bravais, a_bohr })
}

/// 提取平均场 Tc (K)
pub fn parse_curie_temperature(line: &str) -> Option<f64> {
    if !line.contains(CURIE_TEMPERATURE_KEYWORD) {
        return None;
    }
    CURIE_RE.captures(line)?.get(1)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    const OUTPUT: &str = r#"
 ***************************************************
   AkaiKKR  j-mode
   brvtyp=bcc      a=   5.27000  c/a= 1.00000  b/a= 1.00000
 ***************************************************
   edelt=  0.001 ewidth= 1.000

 index   site    comp           cell           distance     J_ij      J_ij(meV)   dgn
   1       1  1    1  1  0.5000  0.5000  0.5000  0.866025     0.001043   14.190737    8
   2       1  1    1  1  1.0000  0.0000  0.0000  1.000000     0.000672    9.143025    6
   3       1  1    1  1  1.0000  1.0000  0.0000  1.414214    -0.000032   -0.431873   12
 Tc (in mean field approximation) =   1012.4 K

   end of run
"#;

    #[test]
    fn test_parse_kkr_output() {
        let report = parse_kkr_output(Cursor::new(OUTPUT), "Fe.out").unwrap();

        assert_eq!(report.block_count, 1);
        assert_eq!(report.table.len(), 3);
        assert_eq!(report.table.records()[2].index, 3);
        assert_eq!(report.table.records()[2].jij_mev, -0.431873);

        let lattice = report.lattice.unwrap();
        assert_eq!(lattice.bravais, "bcc");
        assert!((lattice.a_bohr - 5.27).abs() < 1e-12);

        assert_eq!(report.curie_temperature, Some(1012.4));
    }

    #[test]
    fn test_marker_not_found() {
        let content = "brvtyp=fcc a=6.7\n 1 1 1 1 1 0 0 0 1 0 0 1\n";
        let result = parse_kkr_output(Cursor::new(content), "no_jij.out");
        assert!(matches!(result, Err(KkrError::MarkerNotFound { .. })));
    }

    #[test]
    fn test_last_block_wins() {
        let content = "\
 index   site    comp           cell           distance     J_ij      J_ij(meV)   dgn
   1       1  1    1  1  0.5000  0.5000  0.5000  0.866025     0.001043   14.190737    8

 index   site    comp           cell           distance     J_ij      J_ij(meV)   dgn
   7       1  2    1  1  1.0000  0.0000  0.0000  1.000000     0.000672    9.143025    6
   8       1  2    1  1  1.0000  1.0000  0.0000  1.414214    -0.000032   -0.431873   12
";
        let report = parse_kkr_output(Cursor::new(content), "two_blocks.out").unwrap();
        assert_eq!(report.block_count, 2);
        let indices: Vec<i64> = report.table.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![7, 8]);
        assert!(report.lattice.is_none());
        assert!(report.curie_temperature.is_none());
    }

    #[test]
    fn test_back_to_back_blocks_without_blank_line() {
        let content = "\
 index   site    comp           cell           distance     J_ij      J_ij(meV)   dgn
   1       1  1    1  1  0.5000  0.5000  0.5000  0.866025     0.001043   14.190737    8
 index   site    comp           cell           distance     J_ij      J_ij(meV)   dgn
   2       1  2    1  1  1.0000  0.0000  0.0000  1.000000     0.000672    9.143025    6
";
        let report = parse_kkr_output(Cursor::new(content), "adjacent.out").unwrap();
        assert_eq!(report.block_count, 2);
        let indices: Vec<i64> = report.table.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![2]);
    }

    #[test]
    fn test_parse_error_reports_file_line() {
        let content = "\
header
 index   site    comp           cell           distance     J_ij      J_ij(meV)   dgn
   1       1  1    1  1  0.5000  0.5000  0.5000  0.866025     0.001043   14.190737    8
   2       1  1    1  1  1.0000
";
        match parse_kkr_output(Cursor::new(content), "broken.out") {
            Err(KkrError::ParseError {
                line_number,
                tokens,
                ..
            }) => {
                assert_eq!(line_number, Some(4));
                assert_eq!(tokens, 6);
            }
            other => panic!("expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_kkr_output_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(OUTPUT.as_bytes()).unwrap();

        let report = parse_kkr_output_file(file.path()).unwrap();
        assert_eq!(report.table.len(), 3);
    }

    #[test]
    fn test_parse_kkr_output_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.out");
        assert!(matches!(
            parse_kkr_output_file(&missing),
            Err(KkrError::FileNotFound { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_parse_kkr_output_file_unreadable_is_not_missing() {
        // 目录可以打开但不能按行读取；存在的路径绝不能报告为 FileNotFound
        let dir = tempfile::tempdir().unwrap();
        let result = parse_kkr_output_file(dir.path());
        assert!(matches!(result, Err(KkrError::FileReadError { .. })));
    }

    #[test]
    fn test_parse_lattice_line() {
        let info = parse_lattice_line("   brvtyp=fcc  c/a=1.0  a=6.7d0  b/a=1.0").unwrap();
        assert_eq!(info.bravais, "fcc");
        assert!((info.a_bohr - 6.7).abs() < 1e-12);

        assert!(parse_lattice_line("brvtyp=hcp c/a=1.633").is_none());
    }

    #[test]
    fn test_parse_curie_temperature() {
        assert_eq!(
            parse_curie_temperature(" Tc (in mean field approximation) =  512.30 K"),
            Some(512.3)
        );
        assert_eq!(parse_curie_temperature("Tc = 100"), None);
    }
}
