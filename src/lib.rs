//! Steiner Graph - Steiner tree approximation over unweighted undirected graphs
//!
//! Terminals are joined through a minimum spanning tree over their pairwise
//! shortest paths, then redundant non-terminal vertices are pruned until a
//! fixpoint is reached.

pub mod config;
pub mod core;
pub mod graph;
pub mod services;
pub mod utils;

pub use crate::config::{Config, LogConfig, SolverConfig};
pub use crate::core::{SteinerError, SteinerResult};
pub use crate::graph::{Graph, GridGraph};
pub use crate::services::algorithm::{PruneOrder, SteinerReport, SteinerTree, SteinerTreeSolver};
pub use crate::services::stats::SolveStats;
