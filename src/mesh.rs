//! Edge extraction from triangle lists.

use itertools::Itertools as _;
use std::collections::HashMap;

/// An unordered pair of node IDs, stored with the lowest ID first.
pub type Edge = [usize; 2];

fn edge(n1: usize, n2: usize) -> Edge {
    if n1 <= n2 {
        [n1, n2]
    } else {
        [n2, n1]
    }
}

/// Returns the three edges of a triangle, in the order its nodes are given.
pub fn triangle_edges([n0, n1, n2]: [usize; 3]) -> [Edge; 3] {
    [edge(n0, n1), edge(n1, n2), edge(n2, n0)]
}

/// Returns every edge of the triangulation once, in order of first
/// appearance.
pub fn unique_edges(triangles: &[[usize; 3]]) -> Vec<Edge> {
    triangles
        .iter()
        .flat_map(|triangle| triangle_edges(*triangle))
        .unique()
        .collect()
}

/// Returns the edges that belong to exactly one triangle, in order of first
/// appearance.
pub fn boundary_edges(triangles: &[[usize; 3]]) -> Vec<Edge> {
    let mut counts: HashMap<Edge, usize> = HashMap::new();
    for triangle in triangles {
        // A degenerate triangle repeats some of its edges, count them once.
        for e in triangle_edges(*triangle).into_iter().unique() {
            *counts.entry(e).or_default() += 1;
        }
    }
    unique_edges(triangles)
        .into_iter()
        .filter(|e| counts[e] == 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two triangles forming the unit square, sharing the diagonal 1-2.
    const SQUARE: [[usize; 3]; 2] = [[0, 1, 2], [2, 1, 3]];

    #[test]
    fn test_unique_edges() {
        let edges = unique_edges(&SQUARE);
        assert_eq!(edges, vec![[0, 1], [1, 2], [0, 2], [1, 3], [2, 3]]);
    }

    #[test]
    fn test_boundary_edges() {
        let edges = boundary_edges(&SQUARE);
        assert_eq!(edges, vec![[0, 1], [0, 2], [1, 3], [2, 3]]);
    }

    #[test]
    fn test_single_triangle() {
        assert_eq!(unique_edges(&[[0, 1, 2]]), vec![[0, 1], [1, 2], [0, 2]]);
        assert_eq!(boundary_edges(&[[0, 1, 2]]), unique_edges(&[[0, 1, 2]]));
    }

    #[test]
    fn test_no_triangles() {
        assert!(unique_edges(&[]).is_empty());
        assert!(boundary_edges(&[]).is_empty());
    }

    #[test]
    fn test_fan_has_no_interior_boundary() {
        // Four triangles around node 0.
        let fan = [[0, 1, 2], [0, 2, 3], [0, 3, 4], [0, 4, 1]];
        let boundary = boundary_edges(&fan);
        assert_eq!(boundary, vec![[1, 2], [2, 3], [3, 4], [1, 4]]);
        assert_eq!(unique_edges(&fan).len(), 8);
    }
}
