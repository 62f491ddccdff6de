//! 图模块
//!
//! 图存储本身以及从边列表、网格构建图的辅助工具

pub mod edge_list;
pub mod grid;
pub mod store;

pub use grid::GridGraph;
pub use store::Graph;
