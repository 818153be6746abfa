//! 数据导入模块
//!
//! 支持从 JSON、CSV 边表文件加载网络

use crate::error::{Error, Result};
use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// JSON 图文件格式
///
/// ```json
/// { "vertices": [1, 2, 3], "edges": [[1, 2], [2, 3]] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphFile {
    /// 顶点列表
    pub vertices: Vec<u64>,
    /// 边列表
    pub edges: Vec<(u64, u64)>,
}

/// 图加载器
pub struct GraphLoader;

impl GraphLoader {
    /// 按扩展名自动选择格式加载
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Graph> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::load_json(path),
            Some("csv") => Self::load_edges_csv(path),
            _ => Err(Error::ImportError(format!(
                "无法识别的文件格式: {}",
                path.display()
            ))),
        }
    }

    /// 从 JSON 文件加载
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Graph> {
        let file = File::open(path)?;
        let parsed: GraphFile = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| Error::SerializationError(format!("JSON 解析错误: {}", e)))?;

        let graph = Graph::new(parsed.vertices, parsed.edges)?;

        info!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "JSON 图加载完成"
        );

        Ok(graph)
    }

    /// 从 CSV 边表加载
    ///
    /// 每行一条边 `u,v`，`#` 开头的行与空行忽略；
    /// 顶点序列按端点首次出现顺序推导。
    pub fn load_edges_csv<P: AsRef<Path>>(path: P) -> Result<Graph> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut vertices: Vec<u64> = Vec::new();
        let mut seen: HashSet<u64> = HashSet::new();
        let mut edges: Vec<(u64, u64)> = Vec::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (u, v) = Self::parse_edge_line(line, line_no + 1)?;
            for id in [u, v] {
                if seen.insert(id) {
                    vertices.push(id);
                }
            }
            edges.push((u, v));
        }

        let graph = Graph::new(vertices, edges)?;

        info!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "CSV 边表加载完成"
        );

        Ok(graph)
    }

    /// 解析单行边记录
    fn parse_edge_line(line: &str, line_no: usize) -> Result<(u64, u64)> {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() != 2 {
            return Err(Error::ParseError(format!(
                "第 {} 行: 边格式应为 u,v",
                line_no
            )));
        }

        let u = parts[0]
            .trim()
            .parse::<u64>()
            .map_err(|e| Error::ParseError(format!("第 {} 行: 端点解析失败: {}", line_no, e)))?;
        let v = parts[1]
            .trim()
            .parse::<u64>()
            .map_err(|e| Error::ParseError(format!("第 {} 行: 端点解析失败: {}", line_no, e)))?;

        Ok((u, v))
    }
}
