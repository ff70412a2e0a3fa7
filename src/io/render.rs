//! Plain-text rendering of generated puzzles
//!
//! Draws the solved layout as a bordered grid where walls appear only
//! between different pieces, followed by a legend of piece labels.

use std::fmt::Write;

use crate::algorithm::executor::Generation;
use crate::spatial::GeneratorState;

const LABELS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Single-character label for the piece at `index`, cycling past 62 pieces
pub fn piece_label(index: usize) -> char {
    LABELS
        .get(index % LABELS.len())
        .map_or('?', |&byte| char::from(byte))
}

/// Draw the partition with piece labels and walls between pieces
pub fn render_layout(state: &GeneratorState) -> String {
    let owners = state.ownership();
    let owner = |x: usize, y: usize| owners.get([y, x]).copied().flatten();
    let size = state.size;
    let mut out = String::new();

    for y in 0..=size {
        for x in 0..size {
            let wall = y == 0 || y == size || owner(x, y - 1) != owner(x, y);
            out.push('+');
            out.push_str(if wall { "---" } else { "   " });
        }
        out.push_str("+\n");

        if y == size {
            break;
        }

        for x in 0..size {
            let wall = x == 0 || owner(x - 1, y) != owner(x, y);
            out.push(if wall { '|' } else { ' ' });
            let label = owner(x, y).map_or('?', piece_label);
            let _ = write!(out, " {label} ");
        }
        out.push_str("|\n");
    }

    out
}

/// Header, layout and legend for one generation
pub fn render_generation(generation: &Generation) -> String {
    let puzzle = &generation.puzzle;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{0}x{0} puzzle, {1} pieces, {2} ({3} merges, {4} uniqueness checks)",
        puzzle.size,
        puzzle.piece_count(),
        if generation.is_unique() {
            "unique solution"
        } else {
            "solution not unique"
        },
        generation.merges,
        generation.uniqueness_checks
    );
    out.push_str(&render_layout(&generation.layout));

    for (index, piece) in puzzle.pieces.iter().enumerate() {
        let _ = writeln!(
            out,
            "{} {} piece {:>3} ({} cells)",
            piece_label(index),
            piece.color,
            piece.id,
            piece.cells.len()
        );
    }

    out
}
