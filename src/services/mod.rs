//! 服务层模块
//!
//! 包含斯坦纳树求解相关的算法与统计

pub mod algorithm;
pub mod stats;

// 重新导出常用服务
pub use algorithm::*;
pub use stats::*;
