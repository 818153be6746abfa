//! 边定义
//!
//! 无向边：无序顶点对，构造时归一化为 (min, max)

use crate::graph::vertex::VertexId;
use serde::Serialize;
use std::fmt;

/// 无向边
///
/// 端点在构造时归一化，(1, 2) 与 (2, 1) 表示同一条边。
/// 只支持序列化输出，构造始终经过 [`Edge::new`] 保证归一化。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// 较小端点
    lo: VertexId,
    /// 较大端点
    hi: VertexId,
}

impl Edge {
    /// 创建新边，端点顺序任意
    pub fn new(u: VertexId, v: VertexId) -> Self {
        if u <= v {
            Self { lo: u, hi: v }
        } else {
            Self { lo: v, hi: u }
        }
    }

    /// 获取归一化端点 (min, max)
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.lo, self.hi)
    }

    /// 获取较小端点
    pub fn lo(&self) -> VertexId {
        self.lo
    }

    /// 获取较大端点
    pub fn hi(&self) -> VertexId {
        self.hi
    }

    /// 判断顶点是否为本边端点
    pub fn contains(&self, v: VertexId) -> bool {
        self.lo == v || self.hi == v
    }

    /// 获取对端顶点，v 不是端点时返回 None
    pub fn other(&self, v: VertexId) -> Option<VertexId> {
        if v == self.lo {
            Some(self.hi)
        } else if v == self.hi {
            Some(self.lo)
        } else {
            None
        }
    }
}

impl From<(u64, u64)> for Edge {
    fn from((u, v): (u64, u64)) -> Self {
        Self::new(VertexId::new(u), VertexId::new(v))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_normalization() {
        let a = Edge::new(VertexId::new(2), VertexId::new(1));
        let b = Edge::new(VertexId::new(1), VertexId::new(2));

        assert_eq!(a, b);
        assert_eq!(a.endpoints(), (VertexId::new(1), VertexId::new(2)));
    }

    #[test]
    fn test_edge_contains_and_other() {
        let e = Edge::from((3, 5));

        assert!(e.contains(VertexId::new(3)));
        assert!(e.contains(VertexId::new(5)));
        assert!(!e.contains(VertexId::new(4)));

        assert_eq!(e.other(VertexId::new(3)), Some(VertexId::new(5)));
        assert_eq!(e.other(VertexId::new(5)), Some(VertexId::new(3)));
        assert_eq!(e.other(VertexId::new(4)), None);
    }

    #[test]
    fn test_edge_display() {
        assert_eq!(Edge::from((6, 4)).to_string(), "(4, 6)");
    }
}
