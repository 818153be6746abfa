//! 结果打印器
//!
//! 提供表格形式的结果输出

use crate::algorithm::{CentralityReport, Path};
use crate::graph::Graph;
use prettytable::{format, row, Cell, Row, Table};

/// 结果打印器
pub struct Printer;

impl Printer {
    /// top-k 排名表格
    pub fn format_ranking(report: &CentralityReport) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Rank", "Vertex", "Score"]);

        for (i, vertex) in report.top.iter().enumerate() {
            let score = report
                .scores
                .iter()
                .find(|e| e.vertex == *vertex)
                .map(|e| e.score)
                .unwrap_or(0.0);
            table.add_row(row![
                (i + 1).to_string(),
                vertex.to_string(),
                format!("{:.4}", score)
            ]);
        }

        table.to_string()
    }

    /// 全量得分表格（按顶点声明顺序）
    pub fn format_scores(report: &CentralityReport) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Vertex", "Score"]);

        for entry in &report.scores {
            table.add_row(Row::new(vec![
                Cell::new(&entry.vertex.to_string()),
                Cell::new(&format!("{:.4}", entry.score)),
            ]));
        }

        table.to_string()
    }

    /// 路径列表
    pub fn format_paths(paths: &[Path]) -> String {
        let mut output = String::new();

        for (i, path) in paths.iter().enumerate() {
            let rendered: Vec<String> = path.vertices().iter().map(|v| v.to_string()).collect();
            output.push_str(&format!(
                "  {}: {} (距离 {})\n",
                i + 1,
                rendered.join(" -> "),
                path.distance()
            ));
        }

        output
    }

    /// 图统计信息
    pub fn format_stats(graph: &Graph) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", graph.vertex_count().to_string()]);
        table.add_row(row!["Edge Count", graph.edge_count().to_string()]);
        table.to_string()
    }
}
