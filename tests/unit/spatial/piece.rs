//! Tests for piece geometry: normalisation, merging and connectivity

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use uniquetile::spatial::{Cell, GeneratorPiece};

    fn piece(id: u32, cells: &[(usize, usize)]) -> GeneratorPiece {
        GeneratorPiece {
            id,
            cells: cells.iter().map(|&(x, y)| Cell::new(x, y)).collect(),
        }
    }

    // Tests a singleton piece normalises to the origin
    // Verified by returning the cells untranslated
    #[test]
    fn test_singleton() {
        let single = GeneratorPiece::singleton(7, Cell::new(3, 2));
        assert_eq!(single.id, 7);
        assert_eq!(single.len(), 1);
        assert!(!single.is_empty());
        assert_eq!(single.min_corner(), Some(Cell::new(3, 2)));
        assert_eq!(single.bounding_size(), (1, 1));
        assert_eq!(single.normalized_cells(), vec![Cell::new(0, 0)]);
    }

    // Tests normalisation uses the bounding box corner, not the first cell
    // Verified by translating by the first cell in row-major order
    #[test]
    fn test_normalization_uses_bounding_box() {
        // Reverse L: the first cell in row-major order is (3, 1)
        let shape = piece(1, &[(3, 1), (3, 2), (2, 3), (3, 3)]);

        assert_eq!(shape.min_corner(), Some(Cell::new(2, 1)));
        assert_eq!(shape.bounding_size(), (2, 3));
        assert_eq!(
            shape.normalized_cells(),
            vec![
                Cell::new(1, 0),
                Cell::new(1, 1),
                Cell::new(0, 2),
                Cell::new(1, 2)
            ]
        );
    }

    // Tests an empty piece has no corner and no extent
    // Verified by defaulting the corner to (0, 0)
    #[test]
    fn test_empty_piece() {
        let empty = GeneratorPiece {
            id: 1,
            cells: BTreeSet::new(),
        };
        assert!(empty.is_empty());
        assert_eq!(empty.min_corner(), None);
        assert_eq!(empty.bounding_size(), (0, 0));
        assert!(empty.normalized_cells().is_empty());
        assert!(!empty.is_connected());
    }

    // Tests merging takes the union of cells under the new id
    // Verified by keeping the first piece's id
    #[test]
    fn test_merged_union() {
        let left = piece(1, &[(0, 0), (0, 1)]);
        let right = piece(2, &[(1, 0)]);

        let merged = left.merged(&right, 9);
        assert_eq!(merged.id, 9);
        assert_eq!(merged.len(), 3);
        assert!(merged.cells.contains(&Cell::new(1, 0)));
        assert!(merged.is_connected());
    }

    // Tests shape equality holds under translation but not rotation
    // Verified by comparing raw cells instead of normalised cells
    #[test]
    fn test_same_shape_translation_only() {
        let horizontal = piece(1, &[(0, 0), (1, 0)]);
        let shifted = piece(2, &[(3, 4), (4, 4)]);
        let vertical = piece(3, &[(0, 0), (0, 1)]);

        assert!(horizontal.same_shape(&shifted));
        assert!(!horizontal.same_shape(&vertical));
    }

    // Tests connectivity through shared edges only
    // Verified by treating diagonal neighbours as connected
    #[test]
    fn test_connectivity() {
        assert!(piece(1, &[(0, 0), (1, 0), (1, 1), (1, 2)]).is_connected());
        assert!(!piece(2, &[(0, 0), (1, 1)]).is_connected());
        assert!(!piece(3, &[(0, 0), (2, 0)]).is_connected());
    }
}
