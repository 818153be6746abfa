//! 图算法模块
//!
//! 包含简单路径枚举与介数中心性计算

mod centrality;
mod path_enum;

pub use centrality::{CentralityEngine, CentralityReport, ScoreEntry};
pub use path_enum::{Path, PathEnumerator, TraceStats};
