//! 简单路径枚举
//!
//! 穷举两点间全部简单路径的深度优先搜索

use crate::graph::{AdjacencyMap, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// 路径
///
/// 顶点互不重复的有序序列，相邻顶点之间均有边相连。
/// 只支持序列化输出，实例只由枚举器产出。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    vertices: Vec<VertexId>,
}

impl Path {
    fn new(vertices: Vec<VertexId>) -> Self {
        Self { vertices }
    }

    /// 获取顶点序列
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// 路径长度（顶点数）
    pub fn length(&self) -> usize {
        self.vertices.len()
    }

    /// 路径距离（边数，即顶点数减一）
    pub fn distance(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// 判断顶点是否在路径上
    pub fn contains(&self, v: VertexId) -> bool {
        self.vertices.contains(&v)
    }

    /// 获取起点
    pub fn first(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    /// 获取终点
    pub fn last(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }
}

/// 遍历统计
///
/// 随枚举结果一并返回的显式计量，不依赖任何共享状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStats {
    /// DFS 展开的顶点次数
    pub expanded: u64,
    /// 产出的完整路径数
    pub emitted: u64,
}

/// 简单路径枚举器
///
/// 以当前路径上的顶点集合作为访问屏障，路径内顶点不再重入，
/// 由此保证产出的每条路径都是简单路径。最坏情况下路径数量
/// 随图规模指数增长，适用于小规模网络。
pub struct PathEnumerator<'a> {
    adjacency: &'a AdjacencyMap,
}

impl<'a> PathEnumerator<'a> {
    /// 创建枚举器
    pub fn new(adjacency: &'a AdjacencyMap) -> Self {
        Self { adjacency }
    }

    /// 枚举 start 到 end 的全部简单路径
    ///
    /// start 与 end 相等时返回单条零长路径 `[start]`；
    /// start 不在邻接表中时返回空列表，不视为错误。
    /// 结果顺序由实现决定，调用方只应依赖路径内容与长度。
    pub fn all_simple_paths(&self, start: VertexId, end: VertexId) -> Vec<Path> {
        self.all_simple_paths_with_stats(start, end).0
    }

    /// 枚举全部简单路径并返回遍历统计
    pub fn all_simple_paths_with_stats(
        &self,
        start: VertexId,
        end: VertexId,
    ) -> (Vec<Path>, TraceStats) {
        let mut results = Vec::new();
        let mut stats = TraceStats::default();

        if start == end {
            results.push(Path::new(vec![start]));
            stats.emitted = 1;
            return (results, stats);
        }

        // 每次顶层调用使用全新的路径与访问集，状态不跨调用复用
        let mut path = vec![start];
        let mut visited = HashSet::new();
        visited.insert(start);

        self.dfs(start, end, &mut visited, &mut path, &mut results, &mut stats);

        debug!(
            %start,
            %end,
            paths = results.len(),
            expanded = stats.expanded,
            "简单路径枚举完成"
        );

        (results, stats)
    }

    fn dfs(
        &self,
        current: VertexId,
        end: VertexId,
        visited: &mut HashSet<VertexId>,
        path: &mut Vec<VertexId>,
        results: &mut Vec<Path>,
        stats: &mut TraceStats,
    ) {
        stats.expanded += 1;

        for &neighbor in self.adjacency.neighbors(current) {
            if visited.contains(&neighbor) {
                continue;
            }

            if neighbor == end {
                let mut complete = path.clone();
                complete.push(end);
                results.push(Path::new(complete));
                stats.emitted += 1;
                continue;
            }

            visited.insert(neighbor);
            path.push(neighbor);

            self.dfs(neighbor, end, visited, path, results, stats);

            path.pop();
            visited.remove(&neighbor);
        }
    }
}
