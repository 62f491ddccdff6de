//! 最短路径类型

use super::VertexId;

/// 单位权重下的最短路径：从源点到终点的顶点序列及跳数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    vertices: Vec<VertexId>,
    distance: u32,
}

impl ShortestPath {
    pub(crate) fn new(vertices: Vec<VertexId>, distance: u32) -> Self {
        debug_assert!(!vertices.is_empty());
        debug_assert_eq!(vertices.len(), distance as usize + 1);
        Self { vertices, distance }
    }

    pub fn source(&self) -> VertexId {
        self.vertices[0]
    }

    pub fn target(&self) -> VertexId {
        self.vertices[self.vertices.len() - 1]
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }
}
