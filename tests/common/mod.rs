//! 集成测试共享工具模块
//!
//! 提供测试基础设施和辅助函数，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;
pub mod data_fixtures;

use std::collections::BTreeSet;
use steiner_graph::core::VertexId;
use steiner_graph::graph::Graph;

/// 把标签集合解析为顶点句柄，标签必须存在
pub fn ids(graph: &Graph, labels: &[&str]) -> BTreeSet<VertexId> {
    labels
        .iter()
        .map(|l| graph.vertex_id(l).expect("label should exist in test"))
        .collect()
}

/// 把顶点句柄集合转换为排序后的标签
pub fn labels(graph: &Graph, vertices: &BTreeSet<VertexId>) -> Vec<String> {
    let mut labels: Vec<String> = vertices
        .iter()
        .map(|&v| graph.label(v).to_string())
        .collect();
    labels.sort();
    labels
}
