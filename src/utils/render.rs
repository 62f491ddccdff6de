//! 网格与斯坦纳树的文本渲染
//!
//! 终端记为 `O`，斯坦纳点记为 `S`，未使用的顶点记为 `.`；
//! 只有两个端点都在树中时才画出 `---` 和 `|`。

use crate::graph::GridGraph;
use crate::services::algorithm::SteinerTree;
use std::collections::BTreeSet;

/// 渲染完整网格，终端记为 `O`，其余顶点记为 `+`
pub fn render_grid<S: AsRef<str>>(grid: &GridGraph, terminals: &[S]) -> String {
    let terminals: BTreeSet<&str> = terminals.iter().map(AsRef::as_ref).collect();
    render_with(
        grid.size(),
        |label| {
            if terminals.contains(label) {
                'O'
            } else {
                '+'
            }
        },
        |_, _| true,
    )
}

/// 渲染求解结果
pub fn render_tree(grid: &GridGraph, tree: &SteinerTree) -> String {
    let graph = grid.graph();
    let in_tree: BTreeSet<&str> = tree.vertices().iter().map(|&v| graph.label(v)).collect();
    let terminals: BTreeSet<&str> = tree.terminals().iter().map(|&v| graph.label(v)).collect();

    render_with(
        grid.size(),
        |label| {
            if terminals.contains(label) {
                'O'
            } else if in_tree.contains(label) {
                'S'
            } else {
                '.'
            }
        },
        |a, b| in_tree.contains(a) && in_tree.contains(b),
    )
}

fn render_with<F, E>(size: usize, symbol: F, linked: E) -> String
where
    F: Fn(&str) -> char,
    E: Fn(&str, &str) -> bool,
{
    let mut out = String::new();
    for i in 0..size {
        let mut line = String::new();
        for j in 0..size {
            let label = GridGraph::label(i, j);
            line.push(symbol(&label));
            if j + 1 < size {
                let right = GridGraph::label(i, j + 1);
                line.push_str(if linked(&label, &right) { "---" } else { "   " });
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');

        if i + 1 < size {
            let mut connect = String::new();
            for j in 0..size {
                let below = GridGraph::label(i + 1, j);
                connect.push(if linked(&GridGraph::label(i, j), &below) {
                    '|'
                } else {
                    ' '
                });
                connect.push_str("   ");
            }
            out.push_str(connect.trim_end());
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::services::algorithm::SteinerTreeSolver;

    #[test]
    fn test_render_plain_grid() {
        let grid = GridGraph::new(2).expect("grid should build in test");
        let rendered = render_grid(&grid, &["N0_0"]);
        assert_eq!(rendered, "O---+\n|   |\n+---+\n");
    }

    #[test]
    fn test_render_tree_on_corners() {
        let grid = GridGraph::new(3).expect("grid should build in test");
        let solver = SteinerTreeSolver::new(grid.graph(), SolverConfig::sequential());
        let tree = solver
            .solve(grid.corners())
            .expect("corners should be solvable in test");

        let rendered = render_tree(&grid, &tree);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        // 7 个顶点：4 个终端和 3 个斯坦纳点
        assert_eq!(rendered.matches('O').count(), 4);
        assert_eq!(rendered.matches('S').count(), 3);
        assert_eq!(rendered.matches('.').count(), 2);
        assert!(!rendered.contains('+'));
    }

    #[test]
    fn test_render_empty_tree_marks_everything_unused() {
        let grid = GridGraph::new(2).expect("grid should build in test");
        let rendered = render_tree(&grid, &SteinerTree::default());
        assert_eq!(rendered, ".   .\n\n.   .\n");
    }
}
