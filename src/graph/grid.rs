//! 网格图构建
//!
//! 顶点标签为 `N{row}_{col}`，水平边为 `E_{row}_{col}_H`，垂直边为 `E_{row}_{col}_V`

use super::Graph;
use crate::core::error::{GraphError, GraphResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

/// `size x size` 的带标签网格图
#[derive(Debug, Clone)]
pub struct GridGraph {
    size: usize,
    graph: Graph,
}

impl GridGraph {
    pub fn new(size: usize) -> GraphResult<Self> {
        if size == 0 {
            return Err(GraphError::EmptyGrid);
        }

        let mut graph = Graph::new();
        for i in 0..size {
            for j in 0..size {
                let current = Self::label(i, j);
                if j + 1 < size {
                    graph.add_edge(&current, &Self::label(i, j + 1), &format!("E_{}_{}_H", i, j));
                }
                if i + 1 < size {
                    graph.add_edge(&current, &Self::label(i + 1, j), &format!("E_{}_{}_V", i, j));
                }
            }
        }

        Ok(Self { size, graph })
    }

    pub fn label(row: usize, col: usize) -> String {
        format!("N{}_{}", row, col)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// 四个角的标签（1x1 网格只有一个）
    pub fn corners(&self) -> Vec<String> {
        let last = self.size - 1;
        let corners: BTreeSet<String> = [(0, 0), (0, last), (last, 0), (last, last)]
            .iter()
            .map(|&(i, j)| Self::label(i, j))
            .collect();
        corners.into_iter().collect()
    }

    pub fn center(&self) -> String {
        Self::label(self.size / 2, self.size / 2)
    }

    /// 使用固定种子随机抽取 `count` 个不同的顶点标签，结果按标签排序
    pub fn random_terminals(&self, count: usize, seed: u64) -> GraphResult<Vec<String>> {
        let available = self.size * self.size;
        if count > available {
            return Err(GraphError::TooManyTerminals {
                requested: count,
                available,
            });
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut terminals = BTreeSet::new();
        while terminals.len() < count {
            let i = rng.gen_range(0..self.size);
            let j = rng.gen_range(0..self.size);
            terminals.insert(Self::label(i, j));
        }
        Ok(terminals.into_iter().collect())
    }
}
