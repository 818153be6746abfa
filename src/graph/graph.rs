//! 图数据结构
//!
//! 不可变的无向图容器，构造时一次性校验全部结构不变量

use super::adjacency::AdjacencyMap;
use super::edge::Edge;
use super::vertex::VertexId;
use crate::error::{Error, Result};
use indexmap::IndexSet;
use serde::Serialize;
use tracing::debug;

/// 无向图
///
/// 顶点序列有序且无重复，边集按 (min, max) 归一化存储。
/// 构造成功后不可变更，校验只在 [`Graph::new`] 中执行一次。
#[derive(Debug, Clone, Serialize)]
pub struct Graph {
    /// 顶点序列（声明顺序）
    vertices: IndexSet<VertexId>,
    /// 归一化边集（输入顺序）
    edges: IndexSet<Edge>,
}

impl Graph {
    /// 创建并校验图
    ///
    /// 校验顺序：顶点唯一性、边端点归属、边唯一性。
    /// 任一不变量被破坏时返回对应错误，不产生图对象。
    pub fn new(vertices: Vec<u64>, edges: Vec<(u64, u64)>) -> Result<Self> {
        // 顶点唯一性
        let mut vertex_set = IndexSet::with_capacity(vertices.len());
        let mut duplicate_vertices = Vec::new();
        for id in vertices {
            let v = VertexId::new(id);
            if !vertex_set.insert(v) {
                duplicate_vertices.push(v);
            }
        }
        if !duplicate_vertices.is_empty() {
            duplicate_vertices.sort_unstable();
            duplicate_vertices.dedup();
            return Err(Error::DuplicateVertex(join_ids(&duplicate_vertices)));
        }

        // 边端点必须是已声明的顶点
        let normalized: Vec<Edge> = edges.into_iter().map(Edge::from).collect();
        let mut missing = Vec::new();
        for edge in &normalized {
            let (u, v) = edge.endpoints();
            if !vertex_set.contains(&u) {
                missing.push(u);
            }
            if !vertex_set.contains(&v) {
                missing.push(v);
            }
        }
        if !missing.is_empty() {
            missing.sort_unstable();
            missing.dedup();
            return Err(Error::UnknownEndpoint(join_ids(&missing)));
        }

        // 边唯一性（按归一化形式判重，(1,2) 与 (2,1) 视为同一条边）
        let mut edge_set = IndexSet::with_capacity(normalized.len());
        let mut duplicate_edges = Vec::new();
        for edge in normalized {
            if !edge_set.insert(edge) {
                duplicate_edges.push(edge);
            }
        }
        if !duplicate_edges.is_empty() {
            let listed: Vec<String> = duplicate_edges.iter().map(|e| e.to_string()).collect();
            return Err(Error::DuplicateEdge(listed.join(", ")));
        }

        debug!(
            vertices = vertex_set.len(),
            edges = edge_set.len(),
            "图校验通过"
        );

        Ok(Self {
            vertices: vertex_set,
            edges: edge_set,
        })
    }

    /// 获取顶点序列
    pub fn vertices(&self) -> &IndexSet<VertexId> {
        &self.vertices
    }

    /// 获取归一化边集
    pub fn edges(&self) -> &IndexSet<Edge> {
        &self.edges
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 判断顶点是否存在
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.vertices.contains(&v)
    }

    /// 获取顶点的度数
    pub fn degree(&self, v: VertexId) -> usize {
        self.edges.iter().filter(|e| e.contains(v)).count()
    }

    /// 由边集结构化导出邻接表
    pub fn adjacency(&self) -> AdjacencyMap {
        AdjacencyMap::from_graph(self)
    }
}

fn join_ids(ids: &[VertexId]) -> String {
    let listed: Vec<String> = ids.iter().map(|v| v.to_string()).collect();
    listed.join(", ")
}
