//! 顶点类型定义

use super::{EdgeId, VertexId};
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// 图中的顶点
///
/// 相等性与哈希只由标签决定。邻接表按邻居句柄有序存储，
/// 保证重复遍历时顺序一致
#[derive(Debug, Clone)]
pub struct Vertex {
    label: String,
    neighbors: BTreeMap<VertexId, EdgeId>,
}

impl Vertex {
    pub(crate) fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            neighbors: BTreeMap::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// 邻居顶点
    pub fn neighbors(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.neighbors.keys().copied()
    }

    /// 邻居顶点及连接它们的边
    pub fn neighbor_edges(&self) -> impl Iterator<Item = (VertexId, EdgeId)> + '_ {
        self.neighbors.iter().map(|(&v, &e)| (v, e))
    }

    pub fn edge_to(&self, other: VertexId) -> Option<EdgeId> {
        self.neighbors.get(&other).copied()
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// 注册邻接关系，已存在的条目会被覆盖
    pub(crate) fn connect(&mut self, neighbor: VertexId, edge: EdgeId) {
        self.neighbors.insert(neighbor, edge);
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_by_label_only() {
        let mut a = Vertex::new("A");
        let b = Vertex::new("A");
        a.connect(VertexId(1), EdgeId(0));
        assert_eq!(a, b);

        let set: HashSet<Vertex> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_connect_overwrites() {
        let mut v = Vertex::new("A");
        v.connect(VertexId(1), EdgeId(0));
        v.connect(VertexId(1), EdgeId(3));
        assert_eq!(v.degree(), 1);
        assert_eq!(v.edge_to(VertexId(1)), Some(EdgeId(3)));
        assert_eq!(v.edge_to(VertexId(2)), None);
    }
}
