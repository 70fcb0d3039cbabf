//! Pure dimension math for the cover resize.
//!
//! All functions here are pure and testable without any pixels or engine
//! state. The rounding rules are part of the output contract: results can
//! differ by one pixel from a naive `round(scale * dim)`, and callers
//! depend on that exact behavior.

/// Calculate the dimensions the source is scaled to before compositing.
///
/// The scale factor is the larger of the two axis ratios, so the scaled
/// image covers the target frame on both axes. Each output dimension is
/// `floor(scale * (dim + 0.5) + 0.5)`: round-half-up applied after a
/// half-pixel pre-offset. When source and target already match, the scale
/// is pinned to 1.0 and the pre-offset grows each dimension by exactly one
/// pixel; the composite step crops the overflow back off.
///
/// # Arguments
/// * `source` - Current image dimensions (width, height)
/// * `target` - Frame dimensions to cover (width, height)
///
/// # Returns
/// * `(width, height)` - Scaled dimensions, each >= its target counterpart
///
/// # Examples
/// ```
/// # use coverfit::geometry::scaled_dimensions;
/// // 1000x1000 into a 300x500 frame: height ratio wins, scale 0.5
/// assert_eq!(scaled_dimensions((1000, 1000), (300, 500)), (500, 500));
///
/// // 1000x1000 into a 300x200 frame: width ratio wins, scale 0.3
/// assert_eq!(scaled_dimensions((1000, 1000), (300, 200)), (300, 300));
/// ```
pub fn scaled_dimensions(source: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    let scale = if target == source {
        1.0
    } else {
        f64::max(
            tgt_w as f64 / src_w as f64,
            tgt_h as f64 / src_h as f64,
        )
    };

    (
        round_half_up(scale * (src_w as f64 + 0.5)),
        round_half_up(scale * (src_h as f64 + 0.5)),
    )
}

/// Calculate the offsets that center a scaled image on a target frame.
///
/// Signed, truncating-toward-zero halving of the leftover space per axis.
/// Offsets are negative whenever the scaled image overhangs the frame; the
/// composite crops the overhang.
///
/// # Arguments
/// * `target` - Frame dimensions (width, height)
/// * `scaled` - Dimensions of the image being placed (width, height)
///
/// # Returns
/// * `(x, y)` - Top-left position of the scaled image on the frame
///
/// # Examples
/// ```
/// # use coverfit::geometry::center_offsets;
/// // 135x100 centered on a 100x100 frame hangs 17px past the left edge
/// assert_eq!(center_offsets((100, 100), (135, 100)), (-17, 0));
/// assert_eq!(center_offsets((300, 500), (500, 500)), (-100, 0));
/// ```
pub fn center_offsets(target: (u32, u32), scaled: (u32, u32)) -> (i64, i64) {
    let (tgt_w, tgt_h) = target;
    let (scl_w, scl_h) = scaled;

    (
        (i64::from(tgt_w) - i64::from(scl_w)) / 2,
        (i64::from(tgt_h) - i64::from(scl_h)) / 2,
    )
}

/// Round half away from zero, for non-negative inputs.
fn round_half_up(x: f64) -> u32 {
    (x + 0.5).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // scaled_dimensions tests
    // =========================================================================

    #[test]
    fn scaled_height_ratio_wins() {
        // 1000x1000 → 300x500 frame: scale = max(0.3, 0.5) = 0.5
        assert_eq!(scaled_dimensions((1000, 1000), (300, 500)), (500, 500));
    }

    #[test]
    fn scaled_width_ratio_wins() {
        // 1000x1000 → 300x200 frame: scale = max(0.3, 0.2) = 0.3
        assert_eq!(scaled_dimensions((1000, 1000), (300, 200)), (300, 300));
    }

    #[test]
    fn scaled_landscape_source_to_square() {
        // 500x371 → 100x100 frame: scale = 100/371
        // floor(500.5 * 100/371 + 0.5) = 135, floor(371.5 * 100/371 + 0.5) = 100
        assert_eq!(scaled_dimensions((500, 371), (100, 100)), (135, 100));
    }

    #[test]
    fn scaled_upscale() {
        // 50x40 → 200x100 frame: scale = max(4.0, 2.5) = 4.0
        // floor(4 * 50.5 + 0.5) = 202, floor(4 * 40.5 + 0.5) = 162
        assert_eq!(scaled_dimensions((50, 40), (200, 100)), (202, 162));
    }

    #[test]
    fn scaled_matching_target_adds_one_pixel() {
        // Scale pinned to 1.0, so the half-pixel pre-offset rounds each
        // dimension up by one.
        assert_eq!(scaled_dimensions((1000, 1000), (1000, 1000)), (1001, 1001));
        assert_eq!(scaled_dimensions((240, 180), (240, 180)), (241, 181));
    }

    #[test]
    fn scaled_covers_target_on_both_axes() {
        let cases = [
            ((500, 371), (100, 100)),
            ((1000, 1000), (300, 500)),
            ((1000, 1000), (300, 200)),
            ((50, 40), (200, 100)),
            ((800, 600), (320, 200)),
            ((371, 500), (100, 100)),
        ];
        for (source, target) in cases {
            let (w, h) = scaled_dimensions(source, target);
            assert!(w >= target.0, "{source:?} → {target:?} gave width {w}");
            assert!(h >= target.1, "{source:?} → {target:?} gave height {h}");
        }
    }

    // =========================================================================
    // center_offsets tests
    // =========================================================================

    #[test]
    fn offsets_center_an_overhanging_width() {
        assert_eq!(center_offsets((100, 100), (135, 100)), (-17, 0));
    }

    #[test]
    fn offsets_center_an_overhanging_height() {
        assert_eq!(center_offsets((200, 100), (202, 162)), (-1, -31));
    }

    #[test]
    fn offsets_for_exact_fit_are_zero() {
        assert_eq!(center_offsets((300, 300), (300, 300)), (0, 0));
    }

    #[test]
    fn offsets_truncate_toward_zero() {
        // -1 / 2 truncates to 0, so the one-pixel overflow from a matching
        // target crops entirely at the right and bottom edges.
        assert_eq!(center_offsets((100, 100), (101, 101)), (0, 0));
        assert_eq!(center_offsets((100, 100), (103, 103)), (-1, -1));
    }

    #[test]
    fn offsets_positive_for_smaller_image() {
        assert_eq!(center_offsets((500, 500), (300, 200)), (100, 150));
    }
}
