//! 求解统计
//!
//! 记录一次斯坦纳树求解中各阶段的规模与耗时，随结果报告一起输出

use serde::Serialize;
use std::time::Duration;

/// 一次斯坦纳树求解的统计信息
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SolveStats {
    /// 调用方传入的不同终端标签数量
    pub requested_terminals: usize,
    pub resolved_terminals: usize,
    pub dropped_terminals: usize,
    /// 度量闭包中可达的无序终端对数量
    pub closure_pairs: usize,
    pub mst_paths: usize,
    pub candidate_vertices: usize,
    pub removed_vertices: usize,
    pub prune_passes: usize,
    pub tree_vertices: usize,
    pub tree_edges: usize,
    /// 各终端的最短路径搜索是否在rayon线程池上并行执行
    pub parallel: bool,
    pub elapsed_ms: f64,
}

impl SolveStats {
    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed_ms = elapsed.as_secs_f64() * 1000.0;
    }

    /// 为连接终端而加入的斯坦纳点数量
    pub fn steiner_vertices(&self) -> usize {
        self.tree_vertices.saturating_sub(self.resolved_terminals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_in_millis() {
        let mut stats = SolveStats::default();
        stats.set_elapsed(Duration::from_micros(2500));
        assert!((stats.elapsed_ms - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_steiner_vertices() {
        let stats = SolveStats {
            resolved_terminals: 4,
            tree_vertices: 7,
            ..Default::default()
        };
        assert_eq!(stats.steiner_vertices(), 3);
        assert_eq!(SolveStats::default().steiner_vertices(), 0);
    }

    #[test]
    fn test_serializes_to_json() {
        let stats = SolveStats {
            tree_edges: 6,
            ..Default::default()
        };
        let json = serde_json::to_value(&stats).expect("stats should serialize in test");
        assert_eq!(json["tree_edges"], 6);
        assert_eq!(json["parallel"], false);
    }
}
