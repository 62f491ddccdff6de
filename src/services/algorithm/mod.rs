//! 算法模块
//!
//! 斯坦纳树近似算法及其依赖的图算法：最短路径、连通性校验、并查集、
//! 终端度量闭包上的最小生成树以及剪枝

pub mod connectivity;
pub mod dijkstra;
pub mod metric_closure;
pub mod pruning;
pub mod steiner_tree;
pub mod union_find;

// 重新导出常用算法结构体
pub use connectivity::Connectivity;
pub use dijkstra::{Dijkstra, ShortestPathTree};
pub use metric_closure::{CandidateTree, MetricClosure};
pub use pruning::{PruneOrder, PruneOutcome, Pruning};
pub use steiner_tree::{extract_edges, SteinerReport, SteinerTree, SteinerTreeSolver};
pub use union_find::UnionFind;
