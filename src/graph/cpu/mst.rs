//! CPU implementation of minimum spanning tree algorithms.

use crate::graph::error::{GraphError, GraphResult};
use crate::graph::impl_generic::kruskal_impl;
use crate::graph::traits::mst::MSTAlgorithms;
use crate::graph::traits::types::{AdjacencyMatrix, KruskalOptions, SpanningForest};

/// Sequential Kruskal solver.
///
/// Holds no per-graph state; every call builds a fresh edge list and
/// disjoint-set, so one solver can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct KruskalSolver {
    options: KruskalOptions,
}

impl KruskalSolver {
    pub fn new(options: KruskalOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &KruskalOptions {
        &self.options
    }
}

impl MSTAlgorithms for KruskalSolver {
    fn minimum_spanning_forest(&self, graph: &AdjacencyMatrix) -> SpanningForest {
        kruskal_impl(graph, &self.options)
    }

    fn minimum_spanning_tree(&self, graph: &AdjacencyMatrix) -> GraphResult<SpanningForest> {
        let forest = kruskal_impl(graph, &self.options);
        if !forest.is_spanning_tree() {
            return Err(GraphError::Disconnected {
                components: forest.num_components,
            });
        }
        Ok(forest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    fn graph(rows: Vec<Vec<u64>>) -> AdjacencyMatrix {
        AdjacencyMatrix::from_rows(rows).unwrap()
    }

    /// Complete graph on `n` nodes with every edge weighing `w`.
    fn complete(n: usize, w: u64) -> AdjacencyMatrix {
        let weights = (0..n * n)
            .map(|k| if k / n == k % n { 0 } else { w })
            .collect();
        AdjacencyMatrix::from_row_major(n, weights).unwrap()
    }

    fn random_graph(rng: &mut Pcg32, n: usize, density: f64, max_weight: u64) -> AdjacencyMatrix {
        let mut weights = vec![0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.gen_bool(density) {
                    let w = rng.gen_range(1..=max_weight);
                    weights[i * n + j] = w;
                    weights[j * n + i] = w;
                }
            }
        }
        AdjacencyMatrix::from_row_major(n, weights).unwrap()
    }

    /// O(V^2) Prim run from every unvisited node, for cross-checking.
    fn prim_forest_weight(graph: &AdjacencyMatrix) -> u64 {
        let n = graph.num_nodes();
        let mut visited = vec![false; n];
        let mut best = vec![u64::MAX; n];
        let mut total = 0;

        for start in 0..n {
            if visited[start] {
                continue;
            }
            best[start] = 0;
            loop {
                let next = (0..n)
                    .filter(|&u| !visited[u] && best[u] != u64::MAX)
                    .min_by_key(|&u| best[u]);
                let Some(u) = next else { break };
                visited[u] = true;
                total += best[u];
                for v in 0..n {
                    let w = graph.weight(u, v);
                    if u != v && w != 0 && !visited[v] && w < best[v] {
                        best[v] = w;
                    }
                }
            }
        }
        total
    }

    #[test]
    fn test_empty_graph() {
        let solver = KruskalSolver::default();
        let g = graph(Vec::new());
        let forest = solver.minimum_spanning_tree(&g).unwrap();
        assert_eq!(forest.total_weight, 0);
        assert_eq!(forest.num_components, 0);
        assert!(forest.edges.is_empty());
    }

    #[test]
    fn test_single_node_ignores_diagonal() {
        let solver = KruskalSolver::default();
        let g = graph(vec![vec![42]]);
        assert_eq!(solver.total_weight(&g), 0);
        assert!(solver.minimum_spanning_tree(&g).is_ok());
    }

    #[test]
    fn test_diagonal_ignored() {
        let solver = KruskalSolver::default();
        let g = graph(vec![vec![1, 8, 0], vec![8, 1, 4], vec![0, 4, 1]]);
        assert_eq!(solver.total_weight(&g), 12);
    }

    #[test]
    fn test_two_nodes() {
        let solver = KruskalSolver::default();
        let g = graph(vec![vec![0, 5], vec![5, 0]]);
        assert_eq!(solver.total_weight(&g), 5);
    }

    #[test]
    fn test_triangle() {
        let solver = KruskalSolver::default();

        // Triangle: 0-1 (1), 1-2 (2), 0-2 (3)
        let g = graph(vec![vec![0, 1, 3], vec![1, 0, 2], vec![3, 2, 0]]);

        let forest = solver.minimum_spanning_tree(&g).unwrap();
        assert_eq!(forest.total_weight, 3); // edges 1+2=3
        let weights: Vec<u64> = forest.edges.iter().map(|e| e.weight()).collect();
        assert_eq!(weights, vec![1, 2]);
    }

    #[test]
    fn test_four_nodes() {
        let solver = KruskalSolver::default();

        // 0-1 (1), 0-2 (2), 0-3 (3), 1-2 (4), 1-3 (5), 2-3 (6)
        let g = graph(vec![
            vec![0, 1, 2, 3],
            vec![1, 0, 4, 5],
            vec![2, 4, 0, 6],
            vec![3, 5, 6, 0],
        ]);
        assert_eq!(solver.total_weight(&g), 6);
    }

    #[test]
    fn test_complete_uniform_weight() {
        let solver = KruskalSolver::default();
        for n in 1..10 {
            let g = complete(n, 7);
            let forest = solver.minimum_spanning_forest(&g);
            assert_eq!(forest.total_weight, 7 * (n as u64 - 1));
            assert_eq!(forest.edges.len(), n - 1);
        }
    }

    #[test]
    fn test_disconnected_forest() {
        let solver = KruskalSolver::default();

        // Components {0,1,2} (weight 1+2) and {3,4} (weight 9)
        let g = graph(vec![
            vec![0, 1, 5, 0, 0],
            vec![1, 0, 2, 0, 0],
            vec![5, 2, 0, 0, 0],
            vec![0, 0, 0, 0, 9],
            vec![0, 0, 0, 9, 0],
        ]);

        let forest = solver.minimum_spanning_forest(&g);
        assert_eq!(forest.total_weight, 12);
        assert_eq!(forest.num_components, 2);
        assert!(!forest.is_spanning_tree());

        let err = solver.minimum_spanning_tree(&g).unwrap_err();
        assert_eq!(err, GraphError::Disconnected { components: 2 });
    }

    #[test]
    fn test_no_edges() {
        let solver = KruskalSolver::default();
        let g = graph(vec![vec![0; 4]; 4]);
        let forest = solver.minimum_spanning_forest(&g);
        assert_eq!(forest.total_weight, 0);
        assert_eq!(forest.num_components, 4);
    }

    #[test]
    fn test_idempotent() {
        let solver = KruskalSolver::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let g = random_graph(&mut rng, 12, 0.4, 20);
        let first = solver.minimum_spanning_forest(&g);
        let second = solver.minimum_spanning_forest(&g);
        assert_eq!(first, second);
    }

    #[test]
    fn test_stop_when_spanning_same_result() {
        let eager = KruskalSolver::default();
        let full = KruskalSolver::new(KruskalOptions {
            stop_when_spanning: false,
        });
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..20 {
            let g = random_graph(&mut rng, 15, 0.5, 10);
            assert_eq!(
                eager.minimum_spanning_forest(&g),
                full.minimum_spanning_forest(&g)
            );
        }
    }

    #[test]
    fn test_matches_prim_on_random_graphs() {
        let solver = KruskalSolver::default();
        let mut rng = Pcg32::seed_from_u64(2024);
        for _ in 0..50 {
            let n = rng.gen_range(0..25);
            let density = rng.gen_range(0.05..1.0);
            let g = random_graph(&mut rng, n, density, 30);

            let forest = solver.minimum_spanning_forest(&g);
            assert_eq!(forest.total_weight, prim_forest_weight(&g));
            assert!(forest.edges.len() <= n.saturating_sub(1));
            assert_eq!(forest.edges.len() + forest.num_components, n);
        }
    }

    #[test]
    fn test_invariant_under_relabeling() {
        // Many equal weights, so tie-breaking order changes with the labels
        let solver = KruskalSolver::default();
        let mut rng = Pcg32::seed_from_u64(99);
        for _ in 0..20 {
            let n = 10;
            let g = random_graph(&mut rng, n, 0.6, 3);

            let mut perm: Vec<usize> = (0..n).collect();
            perm.shuffle(&mut rng);
            let mut relabeled = vec![0; n * n];
            for i in 0..n {
                for j in 0..n {
                    relabeled[perm[i] * n + perm[j]] = g.weight(i, j);
                }
            }
            let h = AdjacencyMatrix::from_row_major(n, relabeled).unwrap();

            let a = solver.minimum_spanning_forest(&g);
            let b = solver.minimum_spanning_forest(&h);
            assert_eq!(a.total_weight, b.total_weight);
            assert_eq!(a.num_components, b.num_components);
        }
    }
}
