//! 自定义断言辅助模块
//!
//! 对求解结果检查连通性、终端覆盖以及剪枝不动点

use std::collections::BTreeSet;
use steiner_graph::core::VertexId;
use steiner_graph::graph::Graph;
use steiner_graph::services::algorithm::{Connectivity, PruneOrder, Pruning, SteinerTree};

/// 断言结果成功，返回内部值
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    result.expect("操作应该成功")
}

/// 断言顶点集合在其诱导子图中连通
pub fn assert_connected(graph: &Graph, vertices: &BTreeSet<VertexId>) {
    assert!(
        Connectivity::is_connected(graph, vertices),
        "结果应该连通, 实际 {} 个顶点不连通",
        vertices.len()
    );
}

/// 断言结果包含全部终端
pub fn assert_contains_terminals(tree: &SteinerTree) {
    let missing: Vec<&VertexId> = tree
        .terminals()
        .iter()
        .filter(|t| !tree.vertices().contains(t))
        .collect();
    assert!(missing.is_empty(), "结果缺少终端: {:?}", missing);
}

/// 断言剪枝已经到达不动点：任何候选顶点都无法再被删除
pub fn assert_pruning_fixpoint(graph: &Graph, tree: &SteinerTree) {
    let vertices = tree.vertices();
    let terminals = tree.terminals();
    for vertex in Pruning::removable_candidates(graph, vertices, terminals, PruneOrder::Label) {
        let mut without = vertices.clone();
        without.remove(&vertex);
        let still_valid = Connectivity::terminals_reachable(graph, &without, terminals)
            && Connectivity::is_connected(graph, &without);
        assert!(
            !still_valid,
            "顶点 {} 仍然可以被剪掉",
            graph.label(vertex)
        );
    }
}

/// 断言结果的边集合连通全部终端，且每条边两端都在结果中
pub fn assert_edges_span_terminals(graph: &Graph, tree: &SteinerTree) {
    for &edge_id in tree.edges() {
        let (from, to) = graph.edge(edge_id).endpoints();
        assert!(tree.vertices().contains(&from) && tree.vertices().contains(&to));
    }
    assert!(Connectivity::terminals_connected_by_edges(
        graph,
        tree.edges(),
        tree.terminals()
    ));
}

/// 综合检查一次求解结果
pub fn assert_valid_steiner_tree(graph: &Graph, tree: &SteinerTree) {
    assert_contains_terminals(tree);
    assert_connected(graph, tree.vertices());
    assert_pruning_fixpoint(graph, tree);
    assert_edges_span_terminals(graph, tree);
}
