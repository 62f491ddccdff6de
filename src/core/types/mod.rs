//! 核心数据类型
//!
//! 顶点与边保存在图的arena中，通过整数句柄互相引用，避免循环引用

pub mod edge;
pub mod path;
pub mod vertex;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use edge::Edge;
pub use path::ShortestPath;
pub use vertex::Vertex;

/// 顶点句柄，按首次出现的顺序分配
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// 边句柄，按插入顺序分配
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}
