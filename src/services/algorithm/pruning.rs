//! 剪枝模块
//!
//! 反复尝试删除树内邻居不超过两个的非终端顶点，只要删除后整棵树和
//! 所有终端仍然连通就保留删除结果，直到一轮中没有任何删除（不动点）。

use super::connectivity::Connectivity;
use crate::core::error::{InvariantViolation, SteinerResult};
use crate::core::types::VertexId;
use crate::graph::Graph;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 一轮剪枝中候选顶点的尝试顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PruneOrder {
    /// 按顶点标签字典序
    #[default]
    Label,
    /// 按顶点插入图的顺序
    Insertion,
}

/// 剪枝结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneOutcome {
    pub vertices: BTreeSet<VertexId>,
    pub removed: usize,
    pub passes: usize,
}

/// 剪枝结构体
pub struct Pruning;

impl Pruning {
    /// 剪去多余的非终端顶点
    ///
    /// # 参数
    /// - `graph`: 图
    /// - `candidates`: 初始候选树的顶点
    /// - `terminals`: 终端集合
    /// - `order`: 候选顶点的尝试顺序
    ///
    /// # 返回
    /// 剪枝后的顶点集合；结果不连通时返回不变量错误
    pub fn prune(
        graph: &Graph,
        candidates: &BTreeSet<VertexId>,
        terminals: &BTreeSet<VertexId>,
        order: PruneOrder,
    ) -> SteinerResult<PruneOutcome> {
        let mut result = candidates.clone();
        let mut removed = 0;
        let mut passes = 0;

        loop {
            let removable = Self::removable_candidates(graph, &result, terminals, order);
            if removable.is_empty() {
                break;
            }
            passes += 1;

            let mut any_removed = false;
            for vertex in removable {
                result.remove(&vertex);
                if Connectivity::terminals_reachable(graph, &result, terminals)
                    && Connectivity::is_connected(graph, &result)
                {
                    any_removed = true;
                    removed += 1;
                } else {
                    result.insert(vertex);
                }
            }

            if !any_removed {
                break;
            }
        }

        if !Connectivity::is_connected(graph, &result) {
            return Err(InvariantViolation::PrunedDisconnected {
                vertices: result.len(),
            }
            .into());
        }

        debug!(
            "剪枝完成: {} 轮, 删除 {} 个顶点, 剩余 {} 个顶点",
            passes,
            removed,
            result.len()
        );

        Ok(PruneOutcome {
            vertices: result,
            removed,
            passes,
        })
    }

    /// 树内邻居不超过两个的非终端顶点，按 `order` 排列
    pub fn removable_candidates(
        graph: &Graph,
        vertices: &BTreeSet<VertexId>,
        terminals: &BTreeSet<VertexId>,
        order: PruneOrder,
    ) -> Vec<VertexId> {
        let mut removable: Vec<VertexId> = vertices
            .iter()
            .copied()
            .filter(|v| !terminals.contains(v))
            .filter(|&v| Self::degree_within(graph, v, vertices) <= 2)
            .collect();

        if order == PruneOrder::Label {
            removable.sort_by(|&a, &b| graph.label(a).cmp(graph.label(b)));
        }
        removable
    }

    /// `vertex` 在集合内的邻居数量
    pub fn degree_within(graph: &Graph, vertex: VertexId, vertices: &BTreeSet<VertexId>) -> usize {
        graph
            .neighbors(vertex)
            .filter(|n| vertices.contains(n))
            .count()
    }
}
