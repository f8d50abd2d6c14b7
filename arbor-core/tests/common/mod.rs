use arbor_core::Graph;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Connected random graph: random spanning tree plus uniform extra edges
/// with weights in `[1, 100)`.
#[must_use]
pub fn random_graph(vertex_count: usize, edge_count: usize, seed: u64) -> Graph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut triples: Vec<(usize, usize, f64)> = (1..vertex_count)
        .map(|vertex| (rng.gen_range(0..vertex), vertex, rng.gen_range(1.0..100.0)))
        .collect();
    while triples.len() < edge_count {
        let left = rng.gen_range(0..vertex_count);
        let right = rng.gen_range(0..vertex_count);
        if left != right {
            triples.push((left, right, rng.gen_range(1.0..100.0)));
        }
    }
    Graph::from_triples(vertex_count, triples).expect("generated graph is valid")
}
