//! 图存储
//!
//! 顶点和边保存在两个arena中，标签索引负责把外部标签映射到顶点句柄。
//! 图先通过 `add_edge` 一次性构建，之后只读地交给算法使用。

use crate::core::types::{Edge, EdgeId, Vertex, VertexId};
use std::collections::{BTreeSet, HashMap};

/// 无权无向图
///
/// 使用句柄访问顶点和边的方法在句柄不属于本图时会 panic
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    labels: HashMap<String, VertexId>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入一条边，端点不存在时按首次出现的顺序创建
    ///
    /// 同一对顶点再次插入时会覆盖双方的邻接条目，旧边留在arena中但不再可达
    pub fn add_edge(&mut self, from: &str, to: &str, name: &str) -> EdgeId {
        let from_id = self.intern(from);
        let to_id = self.intern(to);

        let edge_id = EdgeId(self.edges.len());
        self.edges.push(Edge::new(name, from_id, to_id));

        self.vertices[from_id.0].connect(to_id, edge_id);
        self.vertices[to_id.0].connect(from_id, edge_id);
        edge_id
    }

    fn intern(&mut self, label: &str) -> VertexId {
        if let Some(&id) = self.labels.get(label) {
            return id;
        }
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex::new(label));
        self.labels.insert(label.to_string(), id);
        id
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 通过邻接关系可达的边数量
    pub fn edge_count(&self) -> usize {
        self.live_edges().len()
    }

    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.labels.get(label).copied()
    }

    pub fn vertex(&self, label: &str) -> Option<&Vertex> {
        self.vertex_id(label).map(|id| &self.vertices[id.0])
    }

    pub fn vertex_by_id(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.0]
    }

    pub fn label(&self, id: VertexId) -> &str {
        self.vertices[id.0].label()
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices[id.0].neighbors()
    }

    pub fn neighbor_edges(&self, id: VertexId) -> impl Iterator<Item = (VertexId, EdgeId)> + '_ {
        self.vertices[id.0].neighbor_edges()
    }

    pub fn degree(&self, id: VertexId) -> usize {
        self.vertices[id.0].degree()
    }

    /// 两个相邻顶点之间的边
    pub fn edge_between(&self, a: VertexId, b: VertexId) -> Option<&Edge> {
        self.vertices[a.0].edge_to(b).map(|e| &self.edges[e.0])
    }

    /// 按首次出现顺序遍历顶点句柄
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId)
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId(i), v))
    }

    /// 遍历所有仍登记在邻接表中的边，每条边只出现一次
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.live_edges()
            .into_iter()
            .map(move |id| (id, &self.edges[id.0]))
    }

    fn live_edges(&self) -> BTreeSet<EdgeId> {
        self.vertices()
            .flat_map(|(id, v)| {
                v.neighbor_edges()
                    .filter(move |&(nbr, _)| id <= nbr)
                    .map(|(_, e)| e)
            })
            .collect()
    }
}
