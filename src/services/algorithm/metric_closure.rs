//! 终端度量闭包与最小生成树
//!
//! 对每个终端做一次单源最短路径，得到终端之间的完全图（边权为路径长度），
//! 再用Kruskal算法在其上构建最小生成树。被选中的最短路径上的所有顶点
//! 构成初始候选树。

use super::connectivity::Connectivity;
use super::dijkstra::{Dijkstra, ShortestPathTree};
use super::union_find::UnionFind;
use crate::core::error::{InvariantViolation, SteinerResult};
use crate::core::types::{ShortestPath, VertexId};
use crate::graph::Graph;
use log::debug;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

/// 终端之间的度量闭包
#[derive(Debug, Clone)]
pub struct MetricClosure<'g> {
    graph: &'g Graph,
    terminals: Vec<VertexId>,
    /// 每个无序终端对一条最短路径，按 (距离, 源标签, 目标标签) 升序
    pairs: Vec<ShortestPath>,
}

/// Kruskal选出的候选树
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateTree {
    pub vertices: BTreeSet<VertexId>,
    /// 最小生成树选中的终端对路径数量
    pub mst_paths: usize,
}

impl<'g> MetricClosure<'g> {
    /// 构建度量闭包
    ///
    /// # 参数
    /// - `graph`: 图
    /// - `terminals`: 终端集合
    /// - `parallel`: 是否在rayon线程池上并行执行各终端的最短路径搜索
    pub fn build(graph: &'g Graph, terminals: &BTreeSet<VertexId>, parallel: bool) -> Self {
        let terminals: Vec<VertexId> = terminals.iter().copied().collect();

        let trees: Vec<ShortestPathTree> = if parallel {
            terminals
                .par_iter()
                .map(|&t| Dijkstra::shortest_paths_from(graph, t))
                .collect()
        } else {
            terminals
                .iter()
                .map(|&t| Dijkstra::shortest_paths_from(graph, t))
                .collect()
        };

        let mut pairs = Vec::new();
        for (tree, &source) in trees.iter().zip(&terminals) {
            for &target in &terminals {
                // 每个无序终端对只保留源标签较小的方向
                if graph.label(source) < graph.label(target) {
                    if let Some(path) = tree.path_to(target) {
                        pairs.push(path);
                    }
                }
            }
        }
        pairs.sort_by(|a, b| Self::compare_pairs(graph, a, b));

        debug!(
            "度量闭包: {} 个终端, {} 个可达终端对",
            terminals.len(),
            pairs.len()
        );

        Self {
            graph,
            terminals,
            pairs,
        }
    }

    fn compare_pairs(graph: &Graph, a: &ShortestPath, b: &ShortestPath) -> Ordering {
        a.distance()
            .cmp(&b.distance())
            .then_with(|| graph.label(a.source()).cmp(graph.label(b.source())))
            .then_with(|| graph.label(a.target()).cmp(graph.label(b.target())))
    }

    pub fn pairs(&self) -> &[ShortestPath] {
        &self.pairs
    }

    pub fn terminals(&self) -> &[VertexId] {
        &self.terminals
    }

    /// 用Kruskal算法选出最小生成树，并合并所选路径上的顶点
    ///
    /// 终端不能全部合并到同一集合，或候选树不连通时返回不变量错误
    pub fn candidate_tree(&self) -> SteinerResult<CandidateTree> {
        let position: HashMap<VertexId, usize> = self
            .terminals
            .iter()
            .enumerate()
            .map(|(i, &t)| (t, i))
            .collect();

        let mut uf = UnionFind::new(self.terminals.len());
        let mut vertices = BTreeSet::new();
        let mut mst_paths = 0;

        for path in &self.pairs {
            let start = position[&path.source()];
            let end = position[&path.target()];
            if uf.union(start, end) {
                vertices.extend(path.vertices().iter().copied());
                mst_paths += 1;
            }
        }

        if uf.components() > 1 {
            return Err(InvariantViolation::TerminalsUnreachable {
                terminals: self.terminals.len(),
                components: uf.components(),
            }
            .into());
        }

        if !Connectivity::is_connected(self.graph, &vertices) {
            return Err(InvariantViolation::CandidateDisconnected {
                vertices: vertices.len(),
            }
            .into());
        }

        debug!(
            "最小生成树选中 {} 条路径, 候选树 {} 个顶点",
            mst_paths,
            vertices.len()
        );

        Ok(CandidateTree {
            vertices,
            mst_paths,
        })
    }
}
