//! 斯坦纳树求解模块
//!
//! 流程：解析终端标签 -> 终端度量闭包上的最小生成树 -> 剪枝 -> 提取边。
//! 每个阶段结束时都会检查连通性，不变量被破坏时整个查询以错误结束。

use super::connectivity::Connectivity;
use super::metric_closure::MetricClosure;
use super::pruning::Pruning;
use crate::config::SolverConfig;
use crate::core::error::{InvariantViolation, SteinerResult};
use crate::core::types::{EdgeId, VertexId};
use crate::graph::Graph;
use crate::services::stats::SolveStats;
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::time::Instant;

/// 一次求解的结果
#[derive(Debug, Clone, Default)]
pub struct SteinerTree {
    terminals: BTreeSet<VertexId>,
    dropped_terminals: Vec<String>,
    vertices: BTreeSet<VertexId>,
    edges: BTreeSet<EdgeId>,
    stats: SolveStats,
}

impl SteinerTree {
    /// 实际参与求解的终端（图中存在的那些）
    pub fn terminals(&self) -> &BTreeSet<VertexId> {
        &self.terminals
    }

    /// 图中不存在、因而被忽略的终端标签
    pub fn dropped_terminals(&self) -> &[String] {
        &self.dropped_terminals
    }

    pub fn vertices(&self) -> &BTreeSet<VertexId> {
        &self.vertices
    }

    pub fn edges(&self) -> &BTreeSet<EdgeId> {
        &self.edges
    }

    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 为连接终端而加入的非终端顶点
    pub fn steiner_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .iter()
            .copied()
            .filter(move |v| !self.terminals.contains(v))
    }

    pub fn into_vertices(self) -> BTreeSet<VertexId> {
        self.vertices
    }

    pub fn into_edges(self) -> BTreeSet<EdgeId> {
        self.edges
    }

    /// 以标签形式输出的结果报告
    pub fn report(&self, graph: &Graph) -> SteinerReport {
        let mut edges: Vec<String> = self
            .edges
            .iter()
            .map(|&e| graph.edge(e).name().to_string())
            .collect();
        edges.sort();

        SteinerReport {
            terminals: sorted_labels(graph, self.terminals.iter().copied()),
            dropped_terminals: self.dropped_terminals.clone(),
            steiner_vertices: sorted_labels(graph, self.steiner_vertices()),
            vertices: sorted_labels(graph, self.vertices.iter().copied()),
            edges,
            stats: self.stats.clone(),
        }
    }
}

fn sorted_labels(graph: &Graph, ids: impl Iterator<Item = VertexId>) -> Vec<String> {
    let mut labels: Vec<String> = ids.map(|v| graph.label(v).to_string()).collect();
    labels.sort();
    labels
}

/// 可序列化的结果报告，标签与边名均已排序
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SteinerReport {
    pub terminals: Vec<String>,
    pub dropped_terminals: Vec<String>,
    pub steiner_vertices: Vec<String>,
    pub vertices: Vec<String>,
    pub edges: Vec<String>,
    pub stats: SolveStats,
}

/// 斯坦纳树求解器
#[derive(Debug, Clone)]
pub struct SteinerTreeSolver<'g> {
    graph: &'g Graph,
    config: SolverConfig,
}

impl<'g> SteinerTreeSolver<'g> {
    pub fn new(graph: &'g Graph, config: SolverConfig) -> Self {
        Self { graph, config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// 求解斯坦纳树
    ///
    /// # 参数
    /// - `labels`: 终端标签，图中不存在的标签会被忽略并记录在结果中
    ///
    /// # 返回
    /// 图或终端为空时返回空树；只有一个有效终端时返回该终端本身；
    /// 连通性不变量被破坏时返回 `SteinerError::Invariant`，
    /// 其中包括提取出的边没有连通全部终端
    pub fn solve<I, S>(&self, labels: I) -> SteinerResult<SteinerTree>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.run(labels, true)
    }

    /// 只求顶点集合：不校验提取出的边能否连通终端
    ///
    /// 按边名去重可能丢掉同名的不同边，此时顶点集合依然有效，
    /// 但结果中的边集合不保证连通
    pub fn solve_vertices<I, S>(&self, labels: I) -> SteinerResult<SteinerTree>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.run(labels, false)
    }

    fn run<I, S>(&self, labels: I, check_edges: bool) -> SteinerResult<SteinerTree>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let started = Instant::now();
        let graph = self.graph;
        let requested: BTreeSet<String> = labels
            .into_iter()
            .map(|l| l.as_ref().to_string())
            .collect();

        let (terminals, dropped_terminals) = self.resolve_terminals(&requested);
        if !dropped_terminals.is_empty() {
            warn!("忽略图中不存在的终端: {:?}", dropped_terminals);
        }

        let mut stats = SolveStats {
            requested_terminals: requested.len(),
            resolved_terminals: terminals.len(),
            dropped_terminals: dropped_terminals.len(),
            ..Default::default()
        };

        let vertices = if terminals.len() <= 1 {
            terminals.clone()
        } else {
            let parallel = self.config.use_parallel(terminals.len());
            stats.parallel = parallel;

            let closure = MetricClosure::build(graph, &terminals, parallel);
            stats.closure_pairs = closure.pairs().len();

            let candidate = closure.candidate_tree()?;
            stats.mst_paths = candidate.mst_paths;
            stats.candidate_vertices = candidate.vertices.len();

            let outcome = Pruning::prune(
                graph,
                &candidate.vertices,
                &terminals,
                self.config.prune_order,
            )?;
            stats.removed_vertices = outcome.removed;
            stats.prune_passes = outcome.passes;
            outcome.vertices
        };

        let edges = extract_edges(graph, &vertices);
        if check_edges && !Connectivity::terminals_connected_by_edges(graph, &edges, &terminals) {
            return Err(InvariantViolation::EdgesDisconnected {
                terminals: terminals.len(),
                edges: edges.len(),
            }
            .into());
        }

        stats.tree_vertices = vertices.len();
        stats.tree_edges = edges.len();
        stats.set_elapsed(started.elapsed());

        info!(
            "斯坦纳树: {} 个终端, {} 个顶点, {} 条边, 耗时 {:.2} ms",
            stats.resolved_terminals, stats.tree_vertices, stats.tree_edges, stats.elapsed_ms
        );

        Ok(SteinerTree {
            terminals,
            dropped_terminals,
            vertices,
            edges,
            stats,
        })
    }

    /// 把标签解析为顶点句柄，返回 (终端集合, 被忽略的标签)
    fn resolve_terminals(&self, labels: &BTreeSet<String>) -> (BTreeSet<VertexId>, Vec<String>) {
        let mut terminals = BTreeSet::new();
        let mut dropped = Vec::new();
        for label in labels {
            match self.graph.vertex_id(label) {
                Some(id) => {
                    terminals.insert(id);
                }
                None => dropped.push(label.clone()),
            }
        }
        debug!("解析终端: {} 个有效, {} 个忽略", terminals.len(), dropped.len());
        (terminals, dropped)
    }
}

/// 收集两端都在 `vertices` 中的边，按边名去重
pub fn extract_edges(graph: &Graph, vertices: &BTreeSet<VertexId>) -> BTreeSet<EdgeId> {
    let mut edges = BTreeSet::new();
    let mut seen_names: HashSet<&str> = HashSet::new();

    for &vertex in vertices {
        for (neighbor, edge_id) in graph.neighbor_edges(vertex) {
            if vertices.contains(&neighbor) && seen_names.insert(graph.edge(edge_id).name()) {
                edges.insert(edge_id);
            }
        }
    }

    edges
}

impl Graph {
    /// 使用默认求解器配置查找斯坦纳树的顶点集合
    pub fn find_steiner_tree<I, S>(&self, terminals: I) -> SteinerResult<BTreeSet<VertexId>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        SteinerTreeSolver::new(self, SolverConfig::default())
            .solve_vertices(terminals)
            .map(SteinerTree::into_vertices)
    }

    /// 使用默认求解器配置查找斯坦纳树的边集合
    pub fn steiner_tree_edges<I, S>(&self, terminals: I) -> SteinerResult<BTreeSet<EdgeId>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        SteinerTreeSolver::new(self, SolverConfig::default())
            .solve(terminals)
            .map(SteinerTree::into_edges)
    }
}
