//! 图构建错误类型

use thiserror::Error;

/// 图构建与终端采样错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// 边列表解析失败，`line` 从 1 开始计数
    #[error("第 {line} 行解析失败: {message}")]
    Parse { line: usize, message: String },

    #[error("请求 {requested} 个终端，但网格只有 {available} 个顶点")]
    TooManyTerminals { requested: usize, available: usize },

    #[error("网格尺寸必须大于 0")]
    EmptyGrid,
}

pub type GraphResult<T> = Result<T, GraphError>;
