//! Palette shuffling and per-piece colour assignment

use crate::algorithm::selection::RandomSource;
use crate::io::configuration::PALETTE;
use crate::spatial::Color;

/// Shuffle in place with Fisher-Yates, drawing indices from `random`
pub fn shuffle<T>(items: &mut [T], random: &mut impl RandomSource) {
    for i in (1..items.len()).rev() {
        // r * (i + 1) can round up to i + 1 when r is just below 1
        let j = ((random.next_unit() * (i + 1) as f64) as usize).min(i);
        items.swap(i, j);
    }
}

/// One colour per piece from a shuffled palette
///
/// Colours are pairwise distinct up to the palette size and repeat
/// cyclically beyond it.
pub fn assign_colors(piece_count: usize, random: &mut impl RandomSource) -> Vec<Color> {
    let mut palette = PALETTE;
    shuffle(&mut palette, random);

    palette.iter().copied().cycle().take(piece_count).collect()
}

/// Position of a colour in the fixed palette
pub fn palette_index(color: &str) -> Option<usize> {
    PALETTE
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(color))
}

/// Palette colour at `index`, wrapping beyond the palette size
pub fn palette_color(index: usize) -> Color {
    PALETTE
        .get(index % PALETTE.len())
        .copied()
        .unwrap_or(PALETTE[0])
}
