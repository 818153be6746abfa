//! KeyNode - 网络关键节点分析库
//!
//! 面向小规模无向网络的介数中心性分析，支持：
//! - 构造时全量校验的不可变图容器
//! - 穷举式简单路径枚举
//! - 基于最短路径占比的介数中心性与 top-k 排名
//! - JSON / CSV 边表导入

pub mod algorithm;
pub mod builtin_graphs;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;

// 重导出常用类型
pub use algorithm::{CentralityEngine, CentralityReport, Path, PathEnumerator, TraceStats};
pub use error::{Error, Result};
pub use graph::{AdjacencyMap, Edge, Graph, VertexId};
pub use import::{GraphFile, GraphLoader};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
