//! 内置示例网络
//!
//! 提供演示与测试用的小型网络，均为固定字面量

use crate::error::Result;
use crate::graph::Graph;

/// 桥接演示网络（6 顶点 7 边）
///
/// ```text
/// 1 - 2 - 3
/// |   |   |
/// 5 --+-- 4 - 6
/// ```
///
/// 顶点 2、4、5 承担跨组最短路径的桥接角色
pub fn bridge_demo() -> Result<Graph> {
    Graph::new(
        vec![1, 2, 3, 4, 5, 6],
        vec![(1, 2), (1, 5), (2, 3), (2, 5), (3, 4), (4, 5), (4, 6)],
    )
}

/// 三角形网络（3 顶点全连通）
pub fn triangle() -> Result<Graph> {
    Graph::new(vec![1, 2, 3], vec![(1, 2), (2, 3), (1, 3)])
}

/// 线形网络：1 - 2 - ... - n
pub fn line(n: u64) -> Result<Graph> {
    let vertices: Vec<u64> = (1..=n).collect();
    let edges: Vec<(u64, u64)> = (1..n).map(|i| (i, i + 1)).collect();
    Graph::new(vertices, edges)
}
