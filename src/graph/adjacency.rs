//! 邻接表
//!
//! 由校验后的边集结构化导出的顶点邻居映射

use super::graph::Graph;
use super::vertex::VertexId;
use indexmap::IndexMap;
use serde::Serialize;

/// 邻接表
///
/// 每个已声明顶点对应一个邻居列表（可为空）；映射对称，
/// u↔v 相连时 v 出现在 u 的列表中且 u 出现在 v 的列表中。
/// 邻居列表按 ID 升序排列，遍历顺序确定。
#[derive(Debug, Clone, Serialize)]
pub struct AdjacencyMap {
    inner: IndexMap<VertexId, Vec<VertexId>>,
}

impl AdjacencyMap {
    /// 从图的边集导出邻接表
    pub(crate) fn from_graph(graph: &Graph) -> Self {
        let mut inner: IndexMap<VertexId, Vec<VertexId>> =
            IndexMap::with_capacity(graph.vertex_count());

        for &v in graph.vertices() {
            inner.insert(v, Vec::new());
        }

        for edge in graph.edges() {
            let (u, v) = edge.endpoints();
            if u == v {
                // 自环只记录一次
                if let Some(list) = inner.get_mut(&u) {
                    list.push(u);
                }
                continue;
            }
            if let Some(list) = inner.get_mut(&u) {
                list.push(v);
            }
            if let Some(list) = inner.get_mut(&v) {
                list.push(u);
            }
        }

        for list in inner.values_mut() {
            list.sort_unstable();
        }

        Self { inner }
    }

    /// 获取顶点的邻居，顶点不在表中时返回空切片
    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        self.inner.get(&v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 判断顶点是否在表中
    pub fn contains(&self, v: VertexId) -> bool {
        self.inner.contains_key(&v)
    }

    /// 获取表项数量
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// 判断表是否为空
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// 遍历全部表项
    pub fn iter<'s>(&'s self) -> impl Iterator<Item = (VertexId, &'s [VertexId])> + 's {
        self.inner.iter().map(|(&v, list)| (v, list.as_slice()))
    }
}
