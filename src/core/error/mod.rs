//! 统一错误处理系统
//!
//! ## 设计理念
//!
//! 1. **按关注点拆分**：图构建、算法不变量、配置各自拥有独立的错误枚举
//! 2. **分层转换**：子错误通过 `#[from]` 自动汇聚到 `SteinerError`
//! 3. **统一接口**：`SteinerResult<T>` 提供统一的返回类型，简化错误传播
//!
//! 算法不变量被破坏（例如终端分布在不同连通分量中）属于致命错误，
//! 只会以 `Err` 的形式返回，绝不会混入正常结果。

use thiserror::Error;

pub mod config;
pub mod graph;
pub mod invariant;

pub use config::{ConfigError, ConfigResult};
pub use graph::{GraphError, GraphResult};
pub use invariant::InvariantViolation;

/// 统一的错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SteinerError {
    #[error("图错误: {0}")]
    Graph(#[from] GraphError),

    #[error("不变量被破坏: {0}")]
    Invariant(#[from] InvariantViolation),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("日志错误: {0}")]
    Logging(String),
}

impl SteinerError {
    /// 是否为算法内部不变量错误
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, SteinerError::Invariant(_))
    }
}

impl From<flexi_logger::FlexiLoggerError> for SteinerError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        SteinerError::Logging(err.to_string())
    }
}

/// 统一的结果类型
pub type SteinerResult<T> = Result<T, SteinerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_conversion() {
        let err: SteinerError = InvariantViolation::PrunedDisconnected { vertices: 3 }.into();
        assert!(err.is_invariant_violation());
        assert!(err.to_string().contains("3"));
    }

    #[test]
    fn test_graph_error_is_not_invariant() {
        let err: SteinerError = GraphError::Parse {
            line: 2,
            message: "missing target".to_string(),
        }
        .into();
        assert!(!err.is_invariant_violation());
        assert!(matches!(err, SteinerError::Graph(GraphError::Parse { line: 2, .. })));
    }
}
