//! 测试数据生成模块

use steiner_graph::graph::{Graph, GridGraph};

/// `size x size` 网格
pub fn grid(size: usize) -> GridGraph {
    GridGraph::new(size).expect("grid should build in test")
}

/// S - a - b - T
pub fn path_graph() -> Graph {
    "S a e1\na b e2\nb T e3\n"
        .parse()
        .expect("edge list should parse in test")
}

/// 两个互不相连的分量：A - B 与 X - Y
pub fn two_components() -> Graph {
    "A B ab\nX Y xy\n"
        .parse()
        .expect("edge list should parse in test")
}

/// 中心 hub 连接三条长度为 2 的支路，末端是终端
pub fn star_graph() -> Graph {
    "hub a1\na1 A\nhub b1\nb1 B\nhub c1\nc1 C\n"
        .parse()
        .expect("edge list should parse in test")
}
