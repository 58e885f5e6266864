//! # Jij-距离 散点图
//!
//! 使用 `plotters` 绘制 J_ij (meV) 随原子对距离的变化，选中的编号用红色突出。
//!
//! ## 依赖关系
//! - 被 `commands/table.rs`, `commands/average.rs` 调用
//! - 使用 `plotters` 渲染 PNG

use crate::error::{KkrError, Result};
use crate::models::JijRecord;

use plotters::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;

/// 绘图选项
#[derive(Debug, Clone)]
pub struct PlotOptions<'a> {
    pub title: &'a str,
    /// 给出时横轴为 Å
    pub a_bohr: Option<f64>,
    /// 需要突出显示的编号
    pub highlight: &'a BTreeSet<i64>,
    pub width: u32,
    pub height: u32,
}

/// 横轴取值
fn x_value(r: &JijRecord, a_bohr: Option<f64>) -> f64 {
    match a_bohr {
        Some(a) => r.distance_angstrom(a),
        None => r.distance,
    }
}

/// 生成 Jij-距离 PNG 图
pub fn generate_jij_plot(
    records: &[JijRecord],
    output_path: &Path,
    options: &PlotOptions,
) -> Result<()> {
    if records.is_empty() {
        return Err(KkrError::PlotError("No Jij rows to plot".to_string()));
    }

    let points: Vec<(f64, f64, bool)> = records
        .iter()
        .map(|r| {
            (
                x_value(r, options.a_bohr),
                r.jij_mev,
                options.highlight.contains(&r.index),
            )
        })
        .collect();

    let x_max = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    let y_min = points.iter().map(|p| p.1).fold(0.0, f64::min);
    let y_max = points.iter().map(|p| p.1).fold(0.0, f64::max);
    let y_margin = ((y_max - y_min).abs() * 0.1).max(1e-3);

    let x_desc = if options.a_bohr.is_some() {
        "Distance (Å)"
    } else {
        "Distance (a)"
    };

    let root = BitMapBackend::new(output_path, (options.width, options.height))
        .into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| KkrError::PlotError(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(options.title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..(x_max * 1.05), (y_min - y_margin)..(y_max + y_margin))
        .map_err(|e| KkrError::PlotError(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc("J_ij (meV)")
        .draw()
        .map_err(|e| KkrError::PlotError(e.to_string()))?;

    // J = 0 参考线
    chart
        .draw_series(LineSeries::new(
            vec![(0.0, 0.0), (x_max * 1.05, 0.0)],
            BLACK.mix(0.4).stroke_width(1),
        ))
        .map_err(|e| KkrError::PlotError(e.to_string()))?;

    chart
        .draw_series(
            points
                .iter()
                .filter(|p| !p.2)
                .map(|(x, y, _)| Circle::new((*x, *y), 4, BLUE.filled())),
        )
        .map_err(|e| KkrError::PlotError(e.to_string()))?
        .label("J_ij")
        .legend(|(x, y)| Circle::new((x + 10, y), 4, BLUE.filled()));

    if points.iter().any(|p| p.2) {
        chart
            .draw_series(
                points
                    .iter()
                    .filter(|p| p.2)
                    .map(|(x, y, _)| Circle::new((*x, *y), 6, RED.filled())),
            )
            .map_err(|e| KkrError::PlotError(e.to_string()))?
            .label("Selected indices")
            .legend(|(x, y)| Circle::new((x + 10, y), 6, RED.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| KkrError::PlotError(e.to_string()))?;

    root.present()
        .map_err(|e| KkrError::PlotError(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_empty_records() {
        let dir = tempfile::tempdir().unwrap();
        let highlight = BTreeSet::new();
        let options = PlotOptions {
            title: "empty",
            a_bohr: None,
            highlight: &highlight,
            width: 400,
            height: 300,
        };
        let result = generate_jij_plot(&[], &dir.path().join("empty.png"), &options);
        assert!(matches!(result, Err(KkrError::PlotError(_))));
    }

    fn records() -> Vec<JijRecord> {
        vec![
            JijRecord {
                index: 1,
                site: [1, 1],
                comp: [1, 1],
                cell: [0.5, 0.5, 0.5],
                distance: 0.866025,
                jij_ryd: 0.001043,
                jij_mev: 14.190737,
                dgn: 8,
            },
            JijRecord {
                index: 3,
                site: [1, 1],
                comp: [1, 1],
                cell: [1.0, 1.0, 0.0],
                distance: 1.414214,
                jij_ryd: -0.000032,
                jij_mev: -0.431873,
                dgn: 12,
            },
        ]
    }

    #[test]
    fn test_plot_with_highlight() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jij.png");
        let highlight: BTreeSet<i64> = [3].into_iter().collect();
        let options = PlotOptions {
            title: "Fe.out",
            a_bohr: None,
            highlight: &highlight,
            width: 400,
            height: 300,
        };

        generate_jij_plot(&records(), &path, &options).unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_plot_angstrom_axis() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jij_ang.png");
        let highlight = BTreeSet::new();
        let options = PlotOptions {
            title: "Fe.out",
            a_bohr: Some(5.27),
            highlight: &highlight,
            width: 400,
            height: 300,
        };

        assert!(generate_jij_plot(&records(), &path, &options).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_x_value_units() {
        let r = JijRecord {
            index: 1,
            site: [1, 1],
            comp: [1, 1],
            cell: [1.0, 0.0, 0.0],
            distance: 1.0,
            jij_ryd: 0.000672,
            jij_mev: 9.143025,
            dgn: 6,
        };
        assert_eq!(x_value(&r, None), 1.0);
        assert!((x_value(&r, Some(5.27)) - 5.27 * 0.5291772109).abs() < 1e-12);
    }
}
