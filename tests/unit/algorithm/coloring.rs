//! Tests for palette shuffling and colour assignment

#[cfg(test)]
mod tests {
    use crate::ScriptedSource;
    use std::collections::HashSet;
    use uniquetile::algorithm::coloring::{assign_colors, palette_color, palette_index, shuffle};
    use uniquetile::algorithm::selection::RandomSelector;
    use uniquetile::io::configuration::PALETTE;

    // Tests a source of zeros swaps each position with the front
    // Verified by iterating the shuffle upwards instead of downwards
    #[test]
    fn test_shuffle_with_zeros() {
        let mut items = [1, 2, 3, 4];
        shuffle(&mut items, &mut ScriptedSource::new(vec![0.0]));
        assert_eq!(items, [2, 3, 4, 1]);
    }

    // Tests values just below one keep every element in place
    // Verified by removing the upper clamp on the drawn index
    #[test]
    fn test_shuffle_near_one_is_identity() {
        let mut items = [1, 2, 3, 4, 5];
        shuffle(&mut items, &mut ScriptedSource::new(vec![0.999_999_999_999]));
        assert_eq!(items, [1, 2, 3, 4, 5]);
    }

    // Tests shuffling permutes without losing or duplicating elements
    // Verified by overwriting instead of swapping
    #[test]
    fn test_shuffle_is_permutation() {
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut items, &mut RandomSelector::new(5));

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<u32>>());
        assert_ne!(items, sorted);
    }

    // Tests colours are palette entries and distinct up to the palette size
    // Verified by drawing each colour independently with replacement
    #[test]
    fn test_assign_colors_distinct() {
        for seed in 0..20 {
            let colors = assign_colors(PALETTE.len(), &mut RandomSelector::new(seed));
            assert_eq!(colors.len(), PALETTE.len());
            assert!(colors.iter().all(|color| PALETTE.contains(color)));
            assert_eq!(colors.iter().collect::<HashSet<_>>().len(), PALETTE.len());
        }
    }

    // Tests colours cycle through the shuffled palette past its size
    // Verified by reshuffling for every cycle
    #[test]
    fn test_assign_colors_cycles() {
        let colors = assign_colors(20, &mut RandomSelector::new(3));
        assert_eq!(colors.len(), 20);
        for index in PALETTE.len()..20 {
            assert_eq!(colors[index], colors[index - PALETTE.len()]);
        }
        assert!(assign_colors(0, &mut RandomSelector::new(3)).is_empty());
    }

    // Tests palette lookup ignores case and indices wrap
    // Verified by comparing colours case-sensitively
    #[test]
    fn test_palette_lookup() {
        assert_eq!(palette_index("#E74C3C"), Some(0));
        assert_eq!(palette_index("#e74c3c"), Some(0));
        assert_eq!(palette_index("#000000"), None);

        assert_eq!(palette_color(0), PALETTE[0]);
        assert_eq!(palette_color(PALETTE.len() + 2), PALETTE[2]);
    }
}
