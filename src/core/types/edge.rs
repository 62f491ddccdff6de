//! 边类型定义

use super::VertexId;

/// 无向边，创建后不可修改
///
/// 内部按插入方向保存端点，对外通过 [`Edge::other`] 对称地访问
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    name: String,
    from: VertexId,
    to: VertexId,
}

impl Edge {
    pub(crate) fn new(name: impl Into<String>, from: VertexId, to: VertexId) -> Self {
        Self {
            name: name.into(),
            from,
            to,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.from, self.to)
    }

    /// 返回另一端的顶点；`vertex` 不是端点时返回 `None`
    pub fn other(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.from {
            Some(self.to)
        } else if vertex == self.to {
            Some(self.from)
        } else {
            None
        }
    }

    pub fn touches(&self, vertex: VertexId) -> bool {
        self.from == vertex || self.to == vertex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_symmetric() {
        let edge = Edge::new("e", VertexId(0), VertexId(1));
        assert_eq!(edge.other(VertexId(0)), Some(VertexId(1)));
        assert_eq!(edge.other(VertexId(1)), Some(VertexId(0)));
        assert_eq!(edge.other(VertexId(2)), None);
        assert!(edge.touches(VertexId(1)));
        assert!(!edge.touches(VertexId(7)));
    }

    #[test]
    fn test_self_loop() {
        let edge = Edge::new("loop", VertexId(4), VertexId(4));
        assert_eq!(edge.other(VertexId(4)), Some(VertexId(4)));
    }
}
