//! 介数中心性
//!
//! 基于穷举最短路径的介数中心性计算与 top-k 排名

use crate::algorithm::path_enum::{Path, PathEnumerator};
use crate::graph::{AdjacencyMap, Graph, VertexId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 单个顶点的得分条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// 顶点 ID
    pub vertex: VertexId,
    /// 介数中心性得分
    pub score: f64,
}

/// 中心性排名报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CentralityReport {
    /// 全部顶点得分（按声明顺序）
    pub scores: Vec<ScoreEntry>,
    /// top-k 顶点
    pub top: Vec<VertexId>,
    /// 请求的 k 值
    pub k: usize,
}

/// 中心性引擎
///
/// 持有图与导出的邻接表，所有计算都是输入的纯函数
pub struct CentralityEngine<'a> {
    graph: &'a Graph,
    adjacency: AdjacencyMap,
}

impl<'a> CentralityEngine<'a> {
    /// 创建引擎，邻接表由图结构化导出
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            adjacency: graph.adjacency(),
        }
    }

    /// 获取引擎使用的邻接表
    pub fn adjacency(&self) -> &AdjacencyMap {
        &self.adjacency
    }

    /// 最短路径长度（顶点数）
    ///
    /// 列表为空时返回 None，由调用方决定如何处理无路径的情况
    pub fn minimum_length(paths: &[Path]) -> Option<usize> {
        paths.iter().map(Path::length).min()
    }

    /// 按长度（顶点数）过滤路径，保持相对顺序
    pub fn filter_by_length(paths: &[Path], length: usize) -> Vec<Path> {
        paths
            .iter()
            .filter(|p| p.length() == length)
            .cloned()
            .collect()
    }

    /// 两点间全部最短路径
    pub fn shortest_paths(&self, start: VertexId, end: VertexId) -> Vec<Path> {
        let enumerator = PathEnumerator::new(&self.adjacency);
        let all = enumerator.all_simple_paths(start, end);

        match Self::minimum_length(&all) {
            Some(min_len) => Self::filter_by_length(&all, min_len),
            None => Vec::new(),
        }
    }

    /// 两点间最短距离（边数），不连通时返回 None
    pub fn distance(&self, start: VertexId, end: VertexId) -> Option<usize> {
        let enumerator = PathEnumerator::new(&self.adjacency);
        let all = enumerator.all_simple_paths(start, end);

        Self::minimum_length(&all).map(|len| len - 1)
    }

    /// 计算单个顶点的介数中心性
    ///
    /// 按顶点声明顺序遍历所有不含 node 的无序顶点对 (i, j)，
    /// 对每一对累加「经过 node 的最短路径数 / 最短路径总数」。
    /// 无连通路径的顶点对跳过，对所有顶点计 0。
    pub fn betweenness_centrality(&self, node: VertexId) -> f64 {
        let vertices: Vec<VertexId> = self.graph.vertices().iter().copied().collect();
        let enumerator = PathEnumerator::new(&self.adjacency);
        let mut total = 0.0;

        for i in 0..vertices.len() {
            for j in (i + 1)..vertices.len() {
                let (a, b) = (vertices[i], vertices[j]);
                if a == node || b == node {
                    continue;
                }

                let all = enumerator.all_simple_paths(a, b);
                let min_len = match Self::minimum_length(&all) {
                    Some(len) => len,
                    // 不连通的顶点对不参与累加
                    None => continue,
                };

                let shortest = Self::filter_by_length(&all, min_len);
                let through = shortest.iter().filter(|p| p.contains(node)).count();
                total += through as f64 / shortest.len() as f64;
            }
        }

        total
    }

    /// 计算全部顶点得分，按顶点声明顺序
    pub fn scores(&self) -> IndexMap<VertexId, f64> {
        let mut scores = IndexMap::with_capacity(self.graph.vertex_count());

        for &v in self.graph.vertices() {
            let score = self.betweenness_centrality(v);
            debug!(vertex = %v, score, "介数中心性");
            scores.insert(v, score);
        }

        scores
    }

    /// 返回得分最高的 k 个顶点
    ///
    /// 先取全部得分值降序排列（保留重复值）中的前 k 个，
    /// 再按得分表顺序收集取得这些值的顶点（每个顶点至多一次），
    /// 最后截断为 k 个。得分并列时，得分表中靠前的顶点优先保留。
    pub fn top_k(&self, k: usize) -> Vec<VertexId> {
        Self::top_k_of(&self.scores(), k)
    }

    fn top_k_of(scores: &IndexMap<VertexId, f64>, k: usize) -> Vec<VertexId> {
        let mut values: Vec<f64> = scores.values().copied().collect();
        values.sort_by(|a, b| b.total_cmp(a));

        let mut result: Vec<VertexId> = Vec::new();
        for &value in values.iter().take(k) {
            for (&vertex, &score) in scores {
                if score == value && !result.contains(&vertex) {
                    result.push(vertex);
                }
            }
        }

        result.truncate(k);
        result
    }

    /// 生成排名报告
    pub fn rank(&self, k: usize) -> CentralityReport {
        let scores = self.scores();
        let top = Self::top_k_of(&scores, k);

        CentralityReport {
            scores: scores
                .iter()
                .map(|(&vertex, &score)| ScoreEntry { vertex, score })
                .collect(),
            top,
            k,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin_graphs;

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    fn to_vertex_sets(paths: &[Path]) -> Vec<Vec<VertexId>> {
        let mut sets: Vec<Vec<VertexId>> = paths
            .iter()
            .map(|p| {
                let mut vs = p.vertices().to_vec();
                vs.sort_unstable();
                vs
            })
            .collect();
        sets.sort();
        sets
    }

    #[test]
    fn test_minimum_length_and_filter() {
        let graph = builtin_graphs::bridge_demo().unwrap();
        let engine = CentralityEngine::new(&graph);
        let enumerator = PathEnumerator::new(engine.adjacency());

        let all = enumerator.all_simple_paths(v(1), v(6));
        let min_len = CentralityEngine::minimum_length(&all).unwrap();
        assert_eq!(min_len, 4); // 1-5-4-6

        let shortest = CentralityEngine::filter_by_length(&all, min_len);
        assert_eq!(shortest.len(), 1);
        assert_eq!(shortest[0].vertices(), &[v(1), v(5), v(4), v(6)]);
    }

    #[test]
    fn test_minimum_length_empty_is_none() {
        assert_eq!(CentralityEngine::minimum_length(&[]), None);
    }

    #[test]
    fn test_filter_preserves_order() {
        let graph = builtin_graphs::bridge_demo().unwrap();
        let engine = CentralityEngine::new(&graph);
        let enumerator = PathEnumerator::new(engine.adjacency());

        let all = enumerator.all_simple_paths(v(2), v(4));
        let filtered = CentralityEngine::filter_by_length(&all, 3);

        // 过滤结果保持原有相对顺序
        let expected: Vec<&Path> = all.iter().filter(|p| p.length() == 3).collect();
        assert_eq!(filtered.iter().collect::<Vec<_>>(), expected);
        assert_eq!(filtered.len(), 2); // 2-3-4 与 2-5-4
    }

    #[test]
    fn test_distance_bridge_demo() {
        let graph = builtin_graphs::bridge_demo().unwrap();
        let engine = CentralityEngine::new(&graph);

        assert_eq!(engine.distance(v(1), v(6)), Some(3));
        assert_eq!(engine.distance(v(1), v(1)), Some(0));
        assert_eq!(engine.distance(v(2), v(4)), Some(2));
    }

    #[test]
    fn test_distance_disconnected_is_none() {
        let graph = Graph::new(vec![1, 2, 3], vec![(1, 2)]).unwrap();
        let engine = CentralityEngine::new(&graph);

        assert_eq!(engine.distance(v(1), v(3)), None);
    }

    #[test]
    fn test_betweenness_scores_bridge_demo() {
        let graph = builtin_graphs::bridge_demo().unwrap();
        let engine = CentralityEngine::new(&graph);
        let scores = engine.scores();

        // 回归基线
        let expected = [
            (1, 0.0),
            (2, 1.5),
            (3, 1.0),
            (4, 4.5),
            (5, 3.0),
            (6, 0.0),
        ];
        for (id, score) in expected {
            assert!(
                (scores[&v(id)] - score).abs() < 1e-10,
                "顶点 {} 得分应为 {}, 实际 {}",
                id,
                score,
                scores[&v(id)]
            );
        }
    }

    #[test]
    fn test_betweenness_idempotent() {
        let graph = builtin_graphs::bridge_demo().unwrap();
        let engine = CentralityEngine::new(&graph);

        let first = engine.betweenness_centrality(v(4));
        let second = engine.betweenness_centrality(v(4));

        assert_eq!(first, second);
    }

    #[test]
    fn test_shortest_path_set_symmetric() {
        let graph = builtin_graphs::bridge_demo().unwrap();
        let engine = CentralityEngine::new(&graph);

        // 无向图中调换端点顺序不改变最短路径集
        let forward = engine.shortest_paths(v(2), v(6));
        let backward = engine.shortest_paths(v(6), v(2));

        assert_eq!(to_vertex_sets(&forward), to_vertex_sets(&backward));
    }

    #[test]
    fn test_disconnected_pairs_contribute_zero() {
        // 顶点 4 与其余部分不连通，相关顶点对全部跳过
        let graph = Graph::new(vec![1, 2, 3, 4], vec![(1, 2), (2, 3)]).unwrap();
        let engine = CentralityEngine::new(&graph);

        assert!((engine.betweenness_centrality(v(2)) - 1.0).abs() < 1e-10);
        assert_eq!(engine.betweenness_centrality(v(4)), 0.0);
    }

    #[test]
    fn test_top_k_bridge_demo() {
        let graph = builtin_graphs::bridge_demo().unwrap();
        let engine = CentralityEngine::new(&graph);

        // 回归基线：4 (4.5)、5 (3.0)、2 (1.5)
        assert_eq!(engine.top_k(3), vec![v(4), v(5), v(2)]);
    }

    #[test]
    fn test_top_k_with_tied_scores() {
        // 线形图 1-2-3：端点得分并列为 0
        let graph = builtin_graphs::line(3).unwrap();
        let engine = CentralityEngine::new(&graph);

        assert_eq!(engine.top_k(1), vec![v(2)]);
        // 并列值按得分表顺序取舍，截断为 k 个
        assert_eq!(engine.top_k(3), vec![v(2), v(1), v(3)]);
    }

    #[test]
    fn test_top_k_larger_than_vertex_count() {
        let graph = builtin_graphs::triangle().unwrap();
        let engine = CentralityEngine::new(&graph);

        let top = engine.top_k(10);
        assert_eq!(top.len(), 3);
    }

    #[test]
    fn test_rank_report() {
        let graph = builtin_graphs::bridge_demo().unwrap();
        let engine = CentralityEngine::new(&graph);

        let report = engine.rank(3);

        assert_eq!(report.k, 3);
        assert_eq!(report.top, vec![v(4), v(5), v(2)]);
        assert_eq!(report.scores.len(), 6);
        assert_eq!(report.scores[0].vertex, v(1));
    }
}
