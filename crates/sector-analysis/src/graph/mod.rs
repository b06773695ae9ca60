//! Read-side node/edge projection of the matrix for visualization.

use sector_core::types::{GraphEdge, GraphNode, InfluenceMatrix, ProjectedGraph};

/// Project the matrix onto nodes and weighted edges.
///
/// Directed: edge `(i, j)` for `i != j` when `M[i][j] > 0` and `M[i][j] >= min_weight`.
/// Undirected: one edge per pair `i < j` with weight `M[i][j] + M[j][i]`, kept under
/// the same two conditions. Edges come out in row-major order.
pub fn project_graph(
    matrix: &InfluenceMatrix,
    names: &[String],
    min_weight: f64,
    directed: bool,
) -> ProjectedGraph {
    let n = matrix.size();
    let nodes = names
        .iter()
        .take(n)
        .enumerate()
        .map(|(id, name)| GraphNode {
            id,
            name: name.clone(),
        })
        .collect();

    let keep = |w: f64| w > 0.0 && w >= min_weight;
    let mut edges = Vec::new();
    for i in 0..n {
        let start = if directed { 0 } else { i + 1 };
        for j in start..n {
            if i == j {
                continue;
            }
            let weight = if directed {
                matrix.get(i, j)
            } else {
                matrix.get(i, j) + matrix.get(j, i)
            };
            if keep(weight) {
                edges.push(GraphEdge {
                    source: i,
                    target: j,
                    weight,
                });
            }
        }
    }

    ProjectedGraph {
        nodes,
        edges,
        directed,
    }
}
