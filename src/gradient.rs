//! Paint-instruction generation for the hue ring and the saturation/value
//! square.
//!
//! Both functions are pure: they turn a hue into flat color samples and
//! gradient stop grids, leaving actual painting to the rendering adapter.

use log::trace;

use crate::color::{self, Hsl, Rgb};

/// Number of flat-filled wedges used to paint the hue ring, one per degree.
pub const RING_SAMPLES: usize = 360;

/// Number of horizontal gradient strips used to paint the square field.
pub const SQUARE_ROWS: usize = 100;

/// Number of color stops along each strip.
pub const ROW_STOPS: usize = 15;

/// One flat-filled wedge of the hue ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingSample {
    /// Wedge angle in whole degrees
    pub degree: u16,
    /// Pure spectral color at that hue, `hsl(degree, 100%, 50%)`
    pub color: Rgb,
}

/// One color stop of a horizontal gradient strip in the square field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Offset along the strip in `[0, 1]`
    pub offset: f32,
    /// Stop color
    pub color: Hsl,
}

/// Sample the hue ring: 360 wedges, one per integer degree, each the pure
/// spectral hue at full saturation and 50% lightness.
///
/// Only the annulus is covered; the center disk is left for the square field
/// and must be cleared, not painted, by the adapter.
pub fn ring_colors() -> Vec<RingSample> {
    (0..RING_SAMPLES)
        .map(|deg| {
            // hsl(deg, 100%, 50%) is hsv(deg, 1, 1).
            let (r, g, b) = color::hsv_to_rgb_f32(deg as f32, 1.0, 1.0);
            RingSample {
                degree: deg as u16,
                color: color::rgb_from_f32(r, g, b),
            }
        })
        .collect()
}

/// Build the square field's gradient stop grid for a hue in degrees.
///
/// Row `i` holds value `1 - i/100` (the last row exactly 0), stop `j` holds
/// saturation `j/14` (the last stop exactly 1), so the grid spans the full
/// saturation/value plane with a bounded number of strips. Idempotent for a
/// given hue.
pub fn square_stops(hue: f32) -> Vec<Vec<GradientStop>> {
    trace!("generating square gradient stops for hue {hue:.1}");
    (0..SQUARE_ROWS)
        .map(|i| {
            let value = if i == SQUARE_ROWS - 1 {
                0.0
            } else {
                1.0 - i as f32 / SQUARE_ROWS as f32
            };
            (0..ROW_STOPS)
                .map(|j| {
                    let offset = j as f32 / (ROW_STOPS - 1) as f32;
                    let (h, s, l) = color::hsv_to_hsl_f32(hue, offset, value);
                    GradientStop {
                        offset,
                        color: Hsl {
                            h: color::round_hue(h),
                            s: color::round_pct(s),
                            l: color::round_pct(l),
                        },
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_covers_every_degree() {
        let samples = ring_colors();
        assert_eq!(samples.len(), RING_SAMPLES);
        assert_eq!(samples[0].color, Rgb::new(255, 0, 0));
        assert_eq!(samples[120].color, Rgb::new(0, 255, 0));
        assert_eq!(samples[240].color, Rgb::new(0, 0, 255));
        for (i, sample) in samples.iter().enumerate() {
            assert_eq!(sample.degree as usize, i);
        }
    }

    #[test]
    fn test_square_grid_dimensions() {
        let grid = square_stops(210.0);
        assert_eq!(grid.len(), SQUARE_ROWS);
        for row in &grid {
            assert_eq!(row.len(), ROW_STOPS);
            assert_eq!(row[0].offset, 0.0);
            assert_eq!(row[ROW_STOPS - 1].offset, 1.0);
        }
    }

    #[test]
    fn test_square_grid_extremes() {
        let grid = square_stops(0.0);
        // Top-left stop: zero saturation at full value is white.
        assert_eq!(grid[0][0].color, Hsl { h: 0, s: 0, l: 100 });
        // Bottom row: value forced to exactly zero, every stop black.
        for stop in &grid[SQUARE_ROWS - 1] {
            assert_eq!(stop.color.l, 0);
        }
        // Top-right stop: full saturation at full value is the pure hue.
        assert_eq!(
            grid[0][ROW_STOPS - 1].color,
            Hsl { h: 0, s: 100, l: 50 }
        );
    }

    #[test]
    fn test_square_value_monotonically_decreases() {
        let grid = square_stops(135.0);
        for j in 0..ROW_STOPS {
            let mut previous = u8::MAX;
            for row in &grid {
                let v = row[j].color.to_hsv().v;
                assert!(
                    v <= previous,
                    "value must never increase down the rows, got {v} after {previous}"
                );
                previous = v;
            }
        }
        // Endpoints are exact: full value at the top, zero at the bottom.
        let first = grid[0][0].color.to_hsv().v;
        let last = grid[SQUARE_ROWS - 1][0].color.to_hsv().v;
        assert_eq!(first, 100);
        assert_eq!(last, 0);
    }

    #[test]
    fn test_square_stops_idempotent() {
        assert_eq!(square_stops(42.0), square_stops(42.0));
    }
}
