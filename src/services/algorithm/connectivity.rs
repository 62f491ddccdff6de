//! 连通性校验模块
//!
//! 基于受限BFS的连通性检查：只沿两端都在给定顶点集合内的边扩展。
//! 既用作斯坦纳树的不变量检查，也是剪枝时的判定依据。

use crate::core::types::{EdgeId, VertexId};
use crate::graph::Graph;
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

/// 连通性校验结构体
pub struct Connectivity;

impl Connectivity {
    /// 从 `start` 出发、限制在 `within` 内的BFS，返回访问到的顶点
    pub fn reachable_within(
        graph: &Graph,
        start: VertexId,
        within: &BTreeSet<VertexId>,
    ) -> HashSet<VertexId> {
        let mut visited: HashSet<VertexId> = HashSet::new();
        let mut queue: VecDeque<VertexId> = VecDeque::new();

        if !within.contains(&start) {
            return visited;
        }

        queue.push_back(start);
        visited.insert(start);

        while let Some(current) = queue.pop_front() {
            for neighbor in graph.neighbors(current) {
                if within.contains(&neighbor) && visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        visited
    }

    /// 集合内的顶点是否互相连通，空集合视为连通
    pub fn is_connected(graph: &Graph, vertices: &BTreeSet<VertexId>) -> bool {
        match vertices.iter().next() {
            None => true,
            Some(&start) => Self::reachable_within(graph, start, vertices).len() == vertices.len(),
        }
    }

    /// 从第一个终端出发的受限BFS能否到达所有终端
    ///
    /// 起始终端不在集合内时返回 `false`，终端集合为空时返回 `true`
    pub fn terminals_reachable(
        graph: &Graph,
        vertices: &BTreeSet<VertexId>,
        terminals: &BTreeSet<VertexId>,
    ) -> bool {
        let start = match terminals.iter().next() {
            None => return true,
            Some(&start) => start,
        };
        if !vertices.contains(&start) {
            return false;
        }

        let visited = Self::reachable_within(graph, start, vertices);
        terminals.iter().all(|t| visited.contains(t))
    }

    /// 只沿给定的边遍历时，所有终端是否连通
    pub fn terminals_connected_by_edges(
        graph: &Graph,
        edges: &BTreeSet<EdgeId>,
        terminals: &BTreeSet<VertexId>,
    ) -> bool {
        let start = match terminals.iter().next() {
            None => return true,
            Some(&start) => start,
        };

        let mut adjacency: HashMap<VertexId, Vec<VertexId>> = HashMap::new();
        for &edge_id in edges {
            let (a, b) = graph.edge(edge_id).endpoints();
            adjacency.entry(a).or_default().push(b);
            adjacency.entry(b).or_default().push(a);
        }

        let mut visited: HashSet<VertexId> = HashSet::new();
        let mut queue: VecDeque<VertexId> = VecDeque::new();
        queue.push_back(start);
        visited.insert(start);

        while let Some(current) = queue.pop_front() {
            if let Some(neighbors) = adjacency.get(&current) {
                for &neighbor in neighbors {
                    if visited.insert(neighbor) {
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        terminals.iter().all(|t| visited.contains(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ```text
    /// A - B - C - D     X - Y
    /// ```
    fn two_components() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", "ab");
        graph.add_edge("B", "C", "bc");
        graph.add_edge("C", "D", "cd");
        graph.add_edge("X", "Y", "xy");
        graph
    }

    fn set(graph: &Graph, labels: &[&str]) -> BTreeSet<VertexId> {
        labels
            .iter()
            .map(|l| graph.vertex_id(l).expect("vertex should exist in test"))
            .collect()
    }

    #[test]
    fn test_is_connected() {
        let graph = two_components();
        assert!(Connectivity::is_connected(&graph, &set(&graph, &["A", "B", "C"])));
        assert!(!Connectivity::is_connected(&graph, &set(&graph, &["A", "C"])));
        assert!(!Connectivity::is_connected(&graph, &set(&graph, &["A", "B", "X"])));
        assert!(Connectivity::is_connected(&graph, &BTreeSet::new()));
        assert!(Connectivity::is_connected(&graph, &set(&graph, &["Y"])));
    }

    #[test]
    fn test_terminals_reachable() {
        let graph = two_components();
        let within = set(&graph, &["A", "B", "C", "D"]);
        assert!(Connectivity::terminals_reachable(
            &graph,
            &within,
            &set(&graph, &["A", "D"])
        ));
        assert!(Connectivity::terminals_reachable(&graph, &within, &BTreeSet::new()));

        // B 被移除后 A 与 D 断开
        let without_b = set(&graph, &["A", "C", "D"]);
        assert!(!Connectivity::terminals_reachable(
            &graph,
            &without_b,
            &set(&graph, &["A", "D"])
        ));
    }

    #[test]
    fn test_terminals_reachable_start_outside_set() {
        let graph = two_components();
        let within = set(&graph, &["B", "C"]);
        assert!(!Connectivity::terminals_reachable(
            &graph,
            &within,
            &set(&graph, &["A", "C"])
        ));
    }

    #[test]
    fn test_terminals_connected_by_edges() {
        let graph = two_components();
        let edges: BTreeSet<EdgeId> = graph
            .edges()
            .filter(|(_, e)| e.name() != "bc")
            .map(|(id, _)| id)
            .collect();
        assert!(Connectivity::terminals_connected_by_edges(
            &graph,
            &edges,
            &set(&graph, &["A", "B"])
        ));
        assert!(!Connectivity::terminals_connected_by_edges(
            &graph,
            &edges,
            &set(&graph, &["A", "D"])
        ));
        assert!(Connectivity::terminals_connected_by_edges(
            &graph,
            &BTreeSet::new(),
            &set(&graph, &["A"])
        ));
    }
}
