use std::fmt;
use std::str::FromStr;

/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

/// Error returned when a hex color string is malformed.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorParseError {
    pub input: String,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color `{}` (expected #rrggbb or #rrggbbaa)", self.input)
    }
}

impl std::error::Error for ColorParseError {}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parses `#rrggbb` or `#rrggbbaa` (straight sRGB; the `#` is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError { input: s.to_string() };

        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(err());
        }

        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        let a = if hex.len() == 8 { byte(6)? } else { 0xff };

        Ok(Color::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_hex() {
        let c: Color = "#ff0000".parse().unwrap();
        assert_eq!(c, Color::from_premul(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn parses_rgba_hex_premultiplied() {
        let c: Color = "ffffff00".parse().unwrap();
        assert_eq!(c, Color::transparent());
    }

    #[test]
    fn rejects_bad_hex() {
        assert!("#fff".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
        assert!("#ff00é0".parse::<Color>().is_err());
    }

    #[test]
    fn straight_alpha_is_premultiplied() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 0.5);
        assert_eq!(c.to_array(), [0.5, 0.25, 0.0, 0.5]);
    }
}
