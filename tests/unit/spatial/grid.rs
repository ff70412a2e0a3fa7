//! Tests for the generator partition state and the merge primitive

#[cfg(test)]
mod tests {
    use uniquetile::AlgorithmError;
    use uniquetile::spatial::{Cell, GeneratorPiece, GeneratorState};

    // Tests the initial state is one singleton per cell with ids 1..=n²
    // Verified by starting ids at zero
    #[test]
    fn test_initial_state() {
        let state = GeneratorState::new(3);

        assert_eq!(state.piece_count(), 9);
        assert_eq!(state.cell_count(), 9);
        assert_eq!(state.next_id, 10);
        assert_eq!(state.last_id(), 9);
        assert!(state.pieces.iter().all(|piece| piece.len() == 1));

        let ids: Vec<u32> = state.pieces.iter().map(|piece| piece.id).collect();
        assert_eq!(ids, (1..=9).collect::<Vec<u32>>());
        assert!(state.check_partition().is_ok());
    }

    // Tests a merge appends the union under the next id
    // Verified by inserting the merged piece at the lower index
    #[test]
    fn test_merge_appends_with_fresh_id() {
        let mut state = GeneratorState::new(2);

        let id = state.merge(0, 1).unwrap();
        assert_eq!(id, 5);
        assert_eq!(state.next_id, 6);
        assert_eq!(state.piece_count(), 3);

        let last = state.pieces.last().unwrap();
        assert_eq!(last.id, 5);
        assert!(last.cells.contains(&Cell::new(0, 0)));
        assert!(last.cells.contains(&Cell::new(1, 0)));

        // Remaining singletons keep their relative order
        let ids: Vec<u32> = state.pieces.iter().map(|piece| piece.id).collect();
        assert_eq!(ids, vec![3, 4, 5]);
        assert!(state.check_partition().is_ok());
    }

    // Tests argument order does not matter
    // Verified by removing the lower index before the higher one
    #[test]
    fn test_merge_reversed_indices() {
        let mut forward = GeneratorState::new(3);
        let mut reversed = GeneratorState::new(3);

        forward.merge(2, 5).unwrap();
        reversed.merge(5, 2).unwrap();

        assert_eq!(forward, reversed);
    }

    // Tests ids increase strictly and the piece count falls by one per merge
    // Verified by reusing the id of the first merged piece
    #[test]
    fn test_merge_sequence_monotonic() {
        let mut state = GeneratorState::new(3);
        let mut previous = state.last_id();

        while state.piece_count() > 1 {
            let before = state.piece_count();
            let id = state.merge(0, before - 1).unwrap();
            assert!(id > previous);
            assert_eq!(state.piece_count(), before - 1);
            assert!(state.check_partition().is_ok());
            previous = id;
        }

        assert_eq!(state.pieces[0].len(), 9);
        assert_eq!(state.last_id(), 9 + 8);
    }

    // Tests invalid merge indices leave the state untouched
    // Verified by skipping the equal-index check
    #[test]
    fn test_merge_rejects_bad_indices() {
        let mut state = GeneratorState::new(2);
        let before = state.clone();

        assert!(matches!(
            state.merge(1, 1),
            Err(AlgorithmError::InvalidPieceIndex { index: 1, .. })
        ));
        assert!(matches!(
            state.merge(0, 4),
            Err(AlgorithmError::InvalidPieceIndex {
                index: 4,
                piece_count: 4
            })
        ));
        assert_eq!(state, before);
    }

    // Tests the ownership grid is indexed [y, x]
    // Verified by indexing the grid as [x, y]
    #[test]
    fn test_ownership_grid() {
        let mut state = GeneratorState::new(2);
        // Left column: cells (0, 0) and (0, 1)
        state.merge(0, 2).unwrap();

        let owners = state.ownership();
        assert_eq!(owners[[0, 0]], Some(2));
        assert_eq!(owners[[1, 0]], Some(2));
        assert_eq!(owners[[0, 1]], Some(0));
        assert_eq!(owners[[1, 1]], Some(1));
    }

    // Tests each kind of partition violation is reported
    // Verified by only checking for duplicated cells
    #[test]
    fn test_partition_violations() {
        let mut duplicated = GeneratorState::new(2);
        duplicated
            .pieces
            .push(GeneratorPiece::singleton(9, Cell::new(0, 0)));
        assert!(matches!(
            duplicated.check_partition(),
            Err(AlgorithmError::PartitionViolation { .. })
        ));

        let mut missing = GeneratorState::new(2);
        missing.pieces.pop();
        assert!(missing.check_partition().is_err());

        let mut outside = GeneratorState::new(2);
        outside
            .pieces
            .push(GeneratorPiece::singleton(9, Cell::new(2, 0)));
        assert!(outside.check_partition().is_err());
    }
}
