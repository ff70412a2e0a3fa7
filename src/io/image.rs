//! PNG export of a solved layout with piece outlines

use crate::io::configuration::{BORDER_PIXELS, CELL_PIXELS};
use crate::io::error::{AlgorithmError, Result, invalid_configuration};
use crate::spatial::{Color, GeneratorState};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

const OUTLINE: Rgba<u8> = Rgba([40, 40, 40, 255]);

/// Parse a `#RRGGBB` colour into opaque RGBA
///
/// # Errors
///
/// Returns an invalid configuration error for anything but six hex digits
/// after a leading `#`
pub fn parse_hex_color(color: &str) -> Result<[u8; 4]> {
    let malformed = || invalid_configuration("color", &color, &"expected #RRGGBB");

    let digits = color.strip_prefix('#').ok_or_else(malformed)?;
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(malformed());
    }

    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|hex| u8::from_str_radix(hex, 16).ok())
            .ok_or_else(malformed)
    };

    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?, 255])
}

/// Render the layout, filling each piece with its colour
///
/// Pixels within `BORDER_PIXELS` of an edge shared with another piece (or
/// the board edge) are drawn as outline.
///
/// # Errors
///
/// Returns an error if the colour count differs from the piece count or a
/// colour cannot be parsed
pub fn render_layout_image(state: &GeneratorState, colors: &[Color]) -> Result<RgbaImage> {
    if colors.len() != state.piece_count() {
        return Err(invalid_configuration(
            "colors",
            &colors.len(),
            &format!("expected one colour per piece ({})", state.piece_count()),
        ));
    }
    let fills = colors
        .iter()
        .map(|color| parse_hex_color(color).map(Rgba))
        .collect::<Result<Vec<_>>>()?;

    let owners = state.ownership();
    let owner = |x: usize, y: usize| owners.get([y, x]).copied().flatten();
    let side = state.size as u32 * CELL_PIXELS;
    let mut img: RgbaImage = ImageBuffer::new(side, side);

    for (px, py, pixel) in img.enumerate_pixels_mut() {
        let (x, y) = ((px / CELL_PIXELS) as usize, (py / CELL_PIXELS) as usize);
        let (local_x, local_y) = (px % CELL_PIXELS, py % CELL_PIXELS);
        let here = owner(x, y);

        let near_left = local_x < BORDER_PIXELS && (x == 0 || owner(x - 1, y) != here);
        let near_top = local_y < BORDER_PIXELS && (y == 0 || owner(x, y - 1) != here);
        let near_right = local_x >= CELL_PIXELS - BORDER_PIXELS && owner(x + 1, y) != here;
        let near_bottom = local_y >= CELL_PIXELS - BORDER_PIXELS && owner(x, y + 1) != here;

        *pixel = if near_left || near_top || near_right || near_bottom {
            OUTLINE
        } else {
            here.and_then(|index| fills.get(index).copied())
                .unwrap_or(OUTLINE)
        };
    }

    Ok(img)
}

/// Export the layout as a PNG file, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The layout cannot be rendered
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_layout_as_png(
    state: &GeneratorState,
    colors: &[Color],
    output_path: &Path,
) -> Result<()> {
    let img = render_layout_image(state, colors)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
