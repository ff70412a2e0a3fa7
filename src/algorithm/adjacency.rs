//! Detection of mergeable (edge-sharing) piece pairs

use std::collections::BTreeSet;

use crate::spatial::{GeneratorPiece, GeneratorState};

/// All unordered index pairs `(i, j)`, `i < j`, of pieces sharing an edge
///
/// Built from the ownership grid by comparing every cell with its right and
/// lower neighbour, which visits each shared edge once. Pairs come back in
/// ascending order, matching a nested `i < j` scan over the piece list.
pub fn compute_adjacent_pairs(state: &GeneratorState) -> Vec<(usize, usize)> {
    let owners = state.ownership();
    let mut pairs = BTreeSet::new();

    for ((y, x), owner) in owners.indexed_iter() {
        let Some(owner) = *owner else {
            continue;
        };

        for neighbor in [owners.get([y, x + 1]), owners.get([y + 1, x])] {
            if let Some(&Some(other)) = neighbor {
                if other != owner {
                    pairs.insert((owner.min(other), owner.max(other)));
                }
            }
        }
    }

    pairs.into_iter().collect()
}

/// Test whether any cell of `a` shares an edge with any cell of `b`
pub fn pieces_adjacent(a: &GeneratorPiece, b: &GeneratorPiece) -> bool {
    a.cells
        .iter()
        .any(|cell| b.cells.iter().any(|other| cell.is_adjacent(other)))
}
