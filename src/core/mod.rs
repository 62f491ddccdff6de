//! 核心模块
//!
//! 错误类型与图的基础数据类型

pub mod error;
pub mod types;

// 错误和结果类型
pub use error::{
    ConfigError, GraphError, InvariantViolation, SteinerError, SteinerResult,
};

// 核心数据类型
pub use types::{Edge, EdgeId, ShortestPath, Vertex, VertexId};
