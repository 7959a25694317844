//! Color model: 24-bit RGB, palette lookup, HSV and gradients.
//!
//! Every color a tile can be configured with ends up as an [`Rgb`]. Palette
//! indices follow the xterm 256-color layout, HSV components are floats in
//! `0.0..=1.0`, and gradients interpolate in HSV space.

use crate::error::{Error, Result};

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

/// The eight classic ANSI colors at full intensity.
const ANSI: [Rgb; 8] = [
    Rgb::new(0, 0, 0),
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 255, 255),
];

/// xterm's bright set (indices 8-15).
const ANSI_BRIGHT: [Rgb; 8] = [
    Rgb::new(127, 127, 127),
    Rgb::new(255, 85, 85),
    Rgb::new(85, 255, 85),
    Rgb::new(255, 255, 85),
    Rgb::new(92, 92, 255),
    Rgb::new(255, 85, 255),
    Rgb::new(85, 255, 255),
    Rgb::new(255, 255, 255),
];

/// Channel levels of the 6x6x6 color cube.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Neutral gray used when nothing in the tree sets a color.
    pub const GRAY: Self = Self::new(128, 128, 128);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Look up a palette index.
    ///
    /// 0-7 are the classic colors (black, red, green, yellow, blue, magenta,
    /// cyan, white), 8-15 their bright variants, 16-231 the color cube and
    /// 232-255 the grayscale ramp.
    pub const fn palette(index: u8) -> Self {
        match index {
            0..=7 => ANSI[index as usize],
            8..=15 => ANSI_BRIGHT[(index - 8) as usize],
            16..=231 => {
                let n = index - 16;
                Self::new(
                    CUBE_LEVELS[(n / 36) as usize],
                    CUBE_LEVELS[((n / 6) % 6) as usize],
                    CUBE_LEVELS[(n % 6) as usize],
                )
            }
            _ => {
                let level = 8 + (index - 232) * 10;
                Self::new(level, level, level)
            }
        }
    }

    /// Create a color from HSV components in `0.0..=1.0`.
    ///
    /// Hue wraps around; saturation and value are clamped.
    #[allow(clippy::many_single_char_names)]
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let s = clamp_unit(s);
        let v = clamp_unit(v);
        if s == 0.0 {
            return Self::from_unit(v, v, v);
        }
        let h = if h.is_finite() { h.rem_euclid(1.0) } else { 0.0 };
        let sector = (h * 6.0).floor();
        let f = h * 6.0 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (r, g, b) = match sector as u8 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::from_unit(r, g, b)
    }

    /// Convert to HSV components in `0.0..=1.0`.
    pub fn to_hsv(self) -> (f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let v = max;
        if max == min {
            return (0.0, 0.0, v);
        }
        let delta = max - min;
        let s = delta / max;
        let rc = (max - r) / delta;
        let gc = (max - g) / delta;
        let bc = (max - b) / delta;
        let h = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };
        ((h / 6.0).rem_euclid(1.0), s, v)
    }

    /// Parse `#RRGGBB` (RGB hex) or `*HHSSVV` (HSV hex, each byte scaled to
    /// `0.0..=1.0`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for any other format.
    pub fn parse(color: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(color.to_string());
        let (is_hsv, digits) = if let Some(digits) = color.strip_prefix('#') {
            (false, digits)
        } else if let Some(digits) = color.strip_prefix('*') {
            (true, digits)
        } else {
            return Err(invalid());
        };
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        let (a, b, c) = (byte(0)?, byte(2)?, byte(4)?);
        if is_hsv {
            Ok(Self::from_hsv(
                f64::from(a) / 255.0,
                f64::from(b) / 255.0,
                f64::from(c) / 255.0,
            ))
        } else {
            Ok(Self::new(a, b, c))
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_unit(r: f64, g: f64, b: f64) -> Self {
        let channel = |c: f64| (clamp_unit(c) * 255.0).round() as u8;
        Self::new(channel(r), channel(g), channel(b))
    }
}

fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Interpolate between two colors in HSV space.
///
/// Position 0 yields `low`, position `steps` yields `high`; positions in
/// between blend linearly. Used for gauge, log and bar gradients.
#[allow(clippy::cast_precision_loss)]
pub fn interpolate(high: Rgb, low: Rgb, steps: usize, pos: usize) -> Rgb {
    if steps == 0 || high == low {
        return low;
    }
    let k = (pos.min(steps) as f64) / (steps as f64);
    let (h0, s0, v0) = low.to_hsv();
    let (h1, s1, v1) = high.to_hsv();
    Rgb::from_hsv(h0 + (h1 - h0) * k, s0 + (s1 - s0) * k, v0 + (v1 - v0) * k)
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    /// Convert from a 24-bit hex color (e.g., 0xFF5500)
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

impl std::str::FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_tuple() {
        let rgb: Rgb = (255, 128, 0).into();
        assert_eq!(rgb, Rgb::new(255, 128, 0));
    }

    #[test]
    fn test_rgb_from_hex() {
        let rgb: Rgb = 0xFF8000_u32.into();
        assert_eq!(rgb, Rgb::new(255, 128, 0));
    }

    #[test]
    fn test_palette_classic() {
        assert_eq!(Rgb::palette(0), Rgb::BLACK);
        assert_eq!(Rgb::palette(1), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::palette(2), Rgb::new(0, 255, 0));
        assert_eq!(Rgb::palette(7), Rgb::WHITE);
    }

    #[test]
    fn test_palette_extended() {
        assert_eq!(Rgb::palette(16), Rgb::BLACK);
        assert_eq!(Rgb::palette(196), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::palette(231), Rgb::WHITE);
        assert_eq!(Rgb::palette(232), Rgb::new(8, 8, 8));
        assert_eq!(Rgb::palette(255), Rgb::new(238, 238, 238));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgb::parse("#ff8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!("#0A0B0C".parse::<Rgb>().unwrap(), Rgb::new(10, 11, 12));
    }

    #[test]
    fn test_parse_hsv_hex() {
        // Hue 0, full saturation and value: pure red.
        assert_eq!(Rgb::parse("*00ffff").unwrap(), Rgb::new(255, 0, 0));
        // Zero saturation: gray at the given value.
        assert_eq!(Rgb::parse("*000080").unwrap(), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "#", "#12345", "#1234567", "ff0000", "#gg0000", "*12"] {
            assert!(matches!(Rgb::parse(bad), Err(Error::InvalidColor(_))), "{bad}");
        }
    }

    #[test]
    fn test_hsv_round_trip() {
        for color in [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(12, 200, 99),
            Rgb::GRAY,
        ] {
            let (h, s, v) = color.to_hsv();
            assert_eq!(Rgb::from_hsv(h, s, v), color);
        }
    }

    #[test]
    fn test_interpolate_endpoints() {
        let high = Rgb::new(255, 0, 0);
        let low = Rgb::new(0, 0, 255);
        assert_eq!(interpolate(high, low, 10, 0), low);
        assert_eq!(interpolate(high, low, 10, 10), high);
        assert_eq!(interpolate(high, low, 0, 5), low);
    }

    #[test]
    fn test_interpolate_midpoint_value() {
        let high = Rgb::new(200, 200, 200);
        let low = Rgb::new(100, 100, 100);
        let mid = interpolate(high, low, 2, 1);
        assert_eq!(mid, Rgb::new(150, 150, 150));
    }
}
