//! Dijkstra算法模块
//!
//! 单位权重下的单源最短路径，记录前驱以便按需重建路径

use crate::core::types::{ShortestPath, VertexId};
use crate::graph::Graph;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Dijkstra算法结构体
pub struct Dijkstra;

/// 节点距离结构体，用于优先队列
///
/// 距离相同时按顶点句柄排序，保证出队顺序确定
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct NodeDistance {
    node: VertexId,
    distance: u32,
}

impl Ord for NodeDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.distance, self.node).cmp(&(other.distance, other.node))
    }
}

impl PartialOrd for NodeDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 单源最短路径的结果：到每个可达顶点的距离与前驱
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: VertexId,
    distances: Vec<Option<u32>>,
    predecessors: Vec<Option<VertexId>>,
}

impl ShortestPathTree {
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// 到 `target` 的距离，不可达时为 `None`
    pub fn distance(&self, target: VertexId) -> Option<u32> {
        self.distances.get(target.index()).copied().flatten()
    }

    pub fn is_reachable(&self, target: VertexId) -> bool {
        self.distance(target).is_some()
    }

    /// 沿前驱回溯并反转，重建到 `target` 的路径
    pub fn path_to(&self, target: VertexId) -> Option<ShortestPath> {
        let distance = self.distance(target)?;
        let mut path = Vec::with_capacity(distance as usize + 1);
        let mut current = Some(target);
        while let Some(node) = current {
            path.push(node);
            current = self.predecessors[node.index()];
        }
        path.reverse();
        Some(ShortestPath::new(path, distance))
    }

    /// 所有可达顶点的路径，按顶点句柄排序
    pub fn paths(&self) -> impl Iterator<Item = ShortestPath> + '_ {
        (0..self.distances.len())
            .map(VertexId)
            .filter_map(move |v| self.path_to(v))
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }
}

impl Dijkstra {
    /// 计算从起点到所有可达顶点的最短路径
    ///
    /// # 参数
    /// - `graph`: 图
    /// - `source`: 起点
    ///
    /// # 返回
    /// 包含距离与前驱的最短路径树，不可达顶点不出现在结果中
    pub fn shortest_paths_from(graph: &Graph, source: VertexId) -> ShortestPathTree {
        let n = graph.vertex_count();
        let mut distances: Vec<Option<u32>> = vec![None; n];
        let mut predecessors: Vec<Option<VertexId>> = vec![None; n];
        let mut to_visit: BinaryHeap<Reverse<NodeDistance>> = BinaryHeap::new();

        distances[source.index()] = Some(0);
        to_visit.push(Reverse(NodeDistance {
            node: source,
            distance: 0,
        }));

        while let Some(Reverse(NodeDistance { node, distance })) = to_visit.pop() {
            // 过期条目：该顶点已经以更短的距离出队
            if distances[node.index()].is_some_and(|best| best < distance) {
                continue;
            }

            for neighbor in graph.neighbors(node) {
                let new_distance = distance + 1;
                let improved = match distances[neighbor.index()] {
                    Some(current) => new_distance < current,
                    None => true,
                };

                if improved {
                    distances[neighbor.index()] = Some(new_distance);
                    predecessors[neighbor.index()] = Some(node);
                    to_visit.push(Reverse(NodeDistance {
                        node: neighbor,
                        distance: new_distance,
                    }));
                }
            }
        }

        ShortestPathTree {
            source,
            distances,
            predecessors,
        }
    }
}
