//! 边列表格式解析
//!
//! 每行一条边：`from to [name]`，空行和以 `#` 开头的行会被跳过。
//! 省略边名时使用 `from-to`。

use super::Graph;
use crate::core::error::GraphError;
use std::str::FromStr;

impl FromStr for Graph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut graph = Graph::new();
        for (index, raw) in s.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                [from, to] => {
                    graph.add_edge(from, to, &format!("{}-{}", from, to));
                }
                [from, to, name] => {
                    graph.add_edge(from, to, name);
                }
                _ => {
                    return Err(GraphError::Parse {
                        line: index + 1,
                        message: format!("expected 'from to [name]' but got {:?}", line),
                    })
                }
            }
        }
        Ok(graph)
    }
}
