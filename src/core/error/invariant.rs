//! 算法不变量错误类型
//!
//! 这些错误说明输入图不满足前置条件（终端不在同一连通分量）或算法存在缺陷

use thiserror::Error;

/// 斯坦纳树求解过程中的不变量错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// 度量闭包上的最小生成树没有覆盖所有终端
    #[error("终端之间不可达: {components} 个终端分组无法合并 (共 {terminals} 个终端)")]
    TerminalsUnreachable { terminals: usize, components: usize },

    #[error("初始候选树不连通 ({vertices} 个顶点)")]
    CandidateDisconnected { vertices: usize },

    #[error("剪枝后的斯坦纳树不连通 ({vertices} 个顶点)")]
    PrunedDisconnected { vertices: usize },

    #[error("斯坦纳树的边没有连通全部终端 ({terminals} 个终端, {edges} 条边)")]
    EdgesDisconnected { terminals: usize, edges: usize },
}
