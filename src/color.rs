//! Color conversion between RGB, HSL, HSV and hex strings.
//!
//! The public types ([`Rgb`], [`Hsl`], [`Hsv`]) carry integer channels, matching
//! what applications expect from a picker. The conversions between them run in
//! `f32` and round exactly once when emitting integers; the crate-internal
//! `*_f32` functions expose that full-precision layer for gradient generation
//! and for the wheel's own color state, where repeated integer quantization
//! would accumulate visible error.
//!
//! Rounding policy: round half away from zero (`f32::round`).
//!
//! Achromatic policy: `Rgb::to_hsl` zeroes hue and saturation when all channels
//! are equal but still reports lightness. `hsv_to_hsl_f32` maps any achromatic
//! input (zero or undefined saturation) to `s = 0` with lightness preserved,
//! which covers the pure-white and pure-black poles as special cases.

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// An HSL color: hue in `[0, 360)` degrees, saturation and lightness in
/// `[0, 100]` percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// An HSV (a.k.a. HSB) color: hue in `[0, 360)` degrees, saturation and value
/// in `[0, 100]` percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

impl Rgb {
    /// Create an RGB color. The `u8` channels make every input valid.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string: an optional leading `#` followed by exactly
    /// six hexadecimal digits.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::invalid_format(hex));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::invalid_format(hex))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Format as six lowercase hex digits, zero-padded, without a `#`.
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to HSL using the standard max/min channel algorithm.
    ///
    /// Achromatic inputs (all channels equal) report zero hue and saturation
    /// but keep the computed lightness.
    pub fn to_hsl(self) -> Hsl {
        let (h, s, l) = rgb_to_hsl_f32(
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        );
        Hsl {
            h: round_hue(h),
            s: round_pct(s),
            l: round_pct(l),
        }
    }
}

impl Hsl {
    /// Create an HSL color, validating each component's domain.
    pub fn new(h: u16, s: u8, l: u8) -> Result<Self, ColorError> {
        if h >= 360 {
            return Err(ColorError::out_of_range("hue", h, 359));
        }
        if s > 100 {
            return Err(ColorError::out_of_range("saturation", u16::from(s), 100));
        }
        if l > 100 {
            return Err(ColorError::out_of_range("lightness", u16::from(l), 100));
        }
        Ok(Self { h, s, l })
    }

    /// Convert to HSV. Zero value short-circuits to `{h: 0, s: 0, v: 0}`,
    /// avoiding the division by zero in the saturation term.
    pub fn to_hsv(self) -> Hsv {
        let (h, s, v) = hsl_to_hsv_f32(
            f32::from(self.h),
            f32::from(self.s) / 100.0,
            f32::from(self.l) / 100.0,
        );
        Hsv {
            h: round_hue(h),
            s: round_pct(s),
            v: round_pct(v),
        }
    }
}

impl Hsv {
    /// Create an HSV color, validating each component's domain.
    pub fn new(h: u16, s: u8, v: u8) -> Result<Self, ColorError> {
        if h >= 360 {
            return Err(ColorError::out_of_range("hue", h, 359));
        }
        if s > 100 {
            return Err(ColorError::out_of_range("saturation", u16::from(s), 100));
        }
        if v > 100 {
            return Err(ColorError::out_of_range("value", u16::from(v), 100));
        }
        Ok(Self { h, s, v })
    }

    /// Convert to HSL, special-casing the achromatic poles (pure white and
    /// pure black) where the saturation term degenerates.
    pub fn to_hsl(self) -> Hsl {
        let (h, s, l) = hsv_to_hsl_f32(
            f32::from(self.h),
            f32::from(self.s) / 100.0,
            f32::from(self.v) / 100.0,
        );
        Hsl {
            h: round_hue(h),
            s: round_pct(s),
            l: round_pct(l),
        }
    }

    /// Convert to RGB via the chroma algorithm.
    pub fn to_rgb(self) -> Rgb {
        let (r, g, b) = hsv_to_rgb_f32(
            f32::from(self.h),
            f32::from(self.s) / 100.0,
            f32::from(self.v) / 100.0,
        );
        rgb_from_f32(r, g, b)
    }
}

/// Round a fraction in `[0, 1]` to an integer percentage.
pub(crate) fn round_pct(fraction: f32) -> u8 {
    (fraction * 100.0).round() as u8
}

/// Round a hue in degrees to an integer, wrapped into `[0, 360)`.
pub(crate) fn round_hue(degrees: f32) -> u16 {
    (degrees.round() as i32).rem_euclid(360) as u16
}

/// Scale fractional channels to 8-bit and round.
pub(crate) fn rgb_from_f32(r: f32, g: f32, b: f32) -> Rgb {
    Rgb {
        r: (r * 255.0).round() as u8,
        g: (g * 255.0).round() as u8,
        b: (b * 255.0).round() as u8,
    }
}

/// RGB to HSL in the float domain.
///
/// Channels in `[0, 1]`; returns (hue degrees in `[0, 360)`, saturation,
/// lightness), the latter two in `[0, 1]`.
pub(crate) fn rgb_to_hsl_f32(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let c_max = r.max(g).max(b);
    let c_min = r.min(g).min(b);
    let dc = c_max - c_min;

    let l = (c_max + c_min) / 2.0;
    if dc == 0.0 {
        // Achromatic: hue and saturation zeroed, lightness kept.
        return (0.0, 0.0, l);
    }

    let s = if l < 0.5 {
        dc / (c_max + c_min)
    } else {
        dc / (2.0 - c_max - c_min)
    };
    let h = if c_max == r {
        (g - b) / dc
    } else if c_max == g {
        2.0 + (b - r) / dc
    } else {
        4.0 + (r - g) / dc
    };

    let mut degrees = h * 60.0;
    if degrees < 0.0 {
        degrees += 360.0;
    }
    (degrees, s, l)
}

/// HSL to HSV in the float domain.
///
/// Zero value short-circuits to `(0, 0, 0)` before the saturation division.
pub(crate) fn hsl_to_hsv_f32(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let v = (2.0 * l + s * (1.0 - (2.0 * l - 1.0).abs())) / 2.0;
    if v == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    let sv = 2.0 * (v - l) / v;
    (h, sv, v)
}

/// HSV to HSL in the float domain.
///
/// The saturation term `v*s / (1 - |2l - 1|)` degenerates whenever the input
/// is achromatic: at the white pole (`v == 1`) lightness is forced to 1, at
/// the black pole to 0, and for intermediate grays the computed lightness is
/// kept with saturation zeroed.
pub(crate) fn hsv_to_hsl_f32(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let l = 0.5 * v * (2.0 - s);
    let sl = (v * s) / (1.0 - (2.0 * l - 1.0).abs());

    if s == 0.0 || sl.is_nan() {
        if v == 1.0 {
            return (h, 0.0, 1.0);
        }
        if v == 0.0 {
            return (h, 0.0, 0.0);
        }
        return (h, 0.0, l);
    }
    (h, sl, l)
}

/// HSV to RGB in the float domain via chroma.
///
/// Hue in degrees (wrapped into `[0, 360)`), saturation and value in `[0, 1]`;
/// returns channels in `[0, 1]`.
pub(crate) fn hsv_to_rgb_f32(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let h = h.rem_euclid(360.0);
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r + m, g + m, b + m)
}
