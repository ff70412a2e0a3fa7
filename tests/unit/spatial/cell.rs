//! Tests for grid cell ordering, adjacency and parsing

#[cfg(test)]
mod tests {
    use uniquetile::spatial::Cell;
    use uniquetile::spatial::cell::all_cells;

    // Tests that only orthogonal neighbours count as adjacent
    // Verified by using Chebyshev instead of Manhattan distance
    #[test]
    fn test_adjacency_is_orthogonal() {
        let center = Cell::new(1, 1);

        assert!(center.is_adjacent(&Cell::new(1, 0)));
        assert!(center.is_adjacent(&Cell::new(0, 1)));
        assert!(center.is_adjacent(&Cell::new(2, 1)));
        assert!(center.is_adjacent(&Cell::new(1, 2)));

        assert!(!center.is_adjacent(&Cell::new(2, 2)));
        assert!(!center.is_adjacent(&Cell::new(1, 3)));
        assert!(!center.is_adjacent(&center));
    }

    // Tests row-major ordering: rows first, then columns
    // Verified by deriving Ord, which compares x before y
    #[test]
    fn test_row_major_ordering() {
        assert!(Cell::new(5, 0) < Cell::new(0, 1));
        assert!(Cell::new(0, 2) < Cell::new(1, 2));

        let mut cells = vec![Cell::new(1, 1), Cell::new(0, 1), Cell::new(1, 0)];
        cells.sort();
        assert_eq!(
            cells,
            vec![Cell::new(1, 0), Cell::new(0, 1), Cell::new(1, 1)]
        );
    }

    // Tests neighbour enumeration clips to the board
    // Verified by removing the bounds filter
    #[test]
    fn test_neighbors_respect_bounds() {
        assert_eq!(
            Cell::new(0, 0).neighbors(3),
            vec![Cell::new(1, 0), Cell::new(0, 1)]
        );
        assert_eq!(Cell::new(1, 1).neighbors(3).len(), 4);
        assert_eq!(Cell::new(2, 2).neighbors(3).len(), 2);
        assert!(Cell::new(0, 0).neighbors(1).is_empty());
    }

    // Tests offsetting translates both coordinates
    // Verified by swapping dx and dy in offset
    #[test]
    fn test_offset() {
        assert_eq!(Cell::new(1, 2).offset(3, 4), Cell::new(4, 6));
    }

    // Tests display and parsing agree on the "x,y" form
    // Verified by swapping the coordinates in Display
    #[test]
    fn test_display_and_parse() {
        let cell = Cell::new(3, 4);
        assert_eq!(cell.to_string(), "3,4");
        assert_eq!("3,4".parse::<Cell>().ok(), Some(cell));
        assert_eq!(" 7 , 0 ".parse::<Cell>().ok(), Some(Cell::new(7, 0)));
    }

    // Tests malformed coordinates are rejected
    // Verified by defaulting unparsable parts to zero
    #[test]
    fn test_parse_rejects_malformed() {
        assert!("3;4".parse::<Cell>().is_err());
        assert!("a,b".parse::<Cell>().is_err());
        assert!("1,2,3".parse::<Cell>().is_err());
        assert!("".parse::<Cell>().is_err());
        assert!("-1,2".parse::<Cell>().is_err());
    }

    // Tests all cells of a board are listed in row-major order
    // Verified by swapping the loop nesting
    #[test]
    fn test_all_cells_row_major() {
        let cells = all_cells(3);
        assert_eq!(cells.len(), 9);
        assert_eq!(cells.first(), Some(&Cell::new(0, 0)));
        assert_eq!(cells.get(1), Some(&Cell::new(1, 0)));
        assert_eq!(cells.last(), Some(&Cell::new(2, 2)));
        assert!(cells.is_sorted());
        assert!(all_cells(0).is_empty());
    }
}
