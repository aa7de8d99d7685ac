// SPDX-License-Identifier: Apache-2.0

//! Glyph generation seam for face labels
//!
//! Label text becomes curve geometry through the [`GlyphSource`] trait so a
//! real text engine can be plugged in. The built-in [`SegmentFont`] renders
//! the digits 0-9 as seven-segment strokes, which is all face-id labels
//! need.

use crate::geometry::surface::Polyline;
use nalgebra::Point3;

/// Produces stroke geometry for a piece of text, laid out in the XY plane
/// with the baseline on y = 0
pub trait GlyphSource {
    fn strokes(&self, text: &str, scale: f64) -> Vec<Polyline>;
}

/// Seven-segment digit font. Each glyph occupies a 0.5 x 1.0 box before
/// scaling; the pen advances 0.8 per glyph. Characters outside 0-9 advance
/// without strokes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SegmentFont;

/// Segment endpoints in the glyph box, indexed A through G
const SEGMENTS: [([f64; 2], [f64; 2]); 7] = [
    ([0.0, 1.0], [0.5, 1.0]), // A top
    ([0.5, 0.5], [0.5, 1.0]), // B upper right
    ([0.5, 0.0], [0.5, 0.5]), // C lower right
    ([0.0, 0.0], [0.5, 0.0]), // D bottom
    ([0.0, 0.0], [0.0, 0.5]), // E lower left
    ([0.0, 0.5], [0.0, 1.0]), // F upper left
    ([0.0, 0.5], [0.5, 0.5]), // G middle
];

/// Active segments per digit, as a bitmask over A..G
const DIGIT_SEGMENTS: [u8; 10] = [
    0b0111111, // 0: ABCDEF
    0b0000110, // 1: BC
    0b1011011, // 2: ABDEG
    0b1001111, // 3: ABCDG
    0b1100110, // 4: BCFG
    0b1101101, // 5: ACDFG
    0b1111101, // 6: ACDEFG
    0b0000111, // 7: ABC
    0b1111111, // 8: ABCDEFG
    0b1101111, // 9: ABCDFG
];

impl GlyphSource for SegmentFont {
    fn strokes(&self, text: &str, scale: f64) -> Vec<Polyline> {
        let mut out = Vec::new();
        let mut pen = 0.0;
        for ch in text.chars() {
            if let Some(digit) = ch.to_digit(10) {
                let mask = DIGIT_SEGMENTS[digit as usize];
                for (i, (a, b)) in SEGMENTS.iter().enumerate() {
                    if mask & (1 << i) != 0 {
                        out.push(Polyline::new(vec![
                            Point3::new(pen + a[0] * scale, a[1] * scale, 0.0),
                            Point3::new(pen + b[0] * scale, b[1] * scale, 0.0),
                        ]));
                    }
                }
            }
            pen += 0.8 * scale;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment_count(text: &str) -> usize {
        SegmentFont.strokes(text, 1.0).len()
    }

    #[test]
    fn test_digit_stroke_counts() {
        assert_eq!(segment_count("8"), 7);
        assert_eq!(segment_count("1"), 2);
        assert_eq!(segment_count("0"), 6);
        assert_eq!(segment_count("7"), 3);
        assert_eq!(segment_count("42"), 4 + 5);
    }

    #[test]
    fn test_pen_advance_and_scale() {
        let strokes = SegmentFont.strokes("11", 2.0);
        assert_eq!(strokes.len(), 4);
        // second glyph starts one advance to the right
        let max_x = strokes
            .iter()
            .flat_map(|s| s.points.iter())
            .map(|p| p.x)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!((max_x - (0.8 * 2.0 + 0.5 * 2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_non_digits_produce_no_strokes() {
        assert_eq!(segment_count("x"), 0);
        // but still advance the pen between digits
        let strokes = SegmentFont.strokes("1 1", 1.0);
        let max_x = strokes
            .iter()
            .flat_map(|s| s.points.iter())
            .map(|p| p.x)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(max_x > 1.6);
    }
}
