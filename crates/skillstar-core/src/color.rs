use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// 8-bit per channel RGBA color.
///
/// Serializes as a `#RRGGBBAA` hex string; deserializes from `#RRGGBB`,
/// `#RRGGBBAA`, or an `{ "r", "g", "b", "a" }` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const PINK: Rgba = Rgba::rgb(255, 192, 203);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// Raises HSL lightness by `amount` (a fraction of full lightness). Alpha is kept.
    pub fn lighten(&self, amount: f64) -> Self {
        self.shift_lightness(amount)
    }

    /// Lowers HSL lightness by `amount`. Alpha is kept.
    pub fn darken(&self, amount: f64) -> Self {
        self.shift_lightness(-amount)
    }

    fn shift_lightness(&self, delta: f64) -> Self {
        let mut hsl = Hsl::from(*self);
        hsl.l = (hsl.l + delta).clamp(0.0, 1.0);
        hsl.to_rgba(self.a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color '{0}': expected #RRGGBB or #RRGGBBAA")]
pub struct ParseColorError(pub String);

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParseColorError(s.to_string()))
        };
        let a = if hex.len() == 8 { channel(6)? } else { 0xff };
        Ok(Rgba::new(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Channels {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "opaque")]
                a: u8,
            },
        }

        fn opaque() -> u8 {
            0xff
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => s.parse().map_err(serde::de::Error::custom),
            Repr::Channels { r, g, b, a } => Ok(Rgba::new(r, g, b, a)),
        }
    }
}

/// Hue/saturation/lightness with every component in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl From<Rgba> for Hsl {
    fn from(c: Rgba) -> Self {
        let r = c.r as f64 / 255.0;
        let g = c.g as f64 / 255.0;
        let b = c.b as f64 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let d = max - min;

        if d == 0.0 {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        Hsl { h: h / 6.0, s, l }
    }
}

impl Hsl {
    pub fn to_rgba(&self, alpha: u8) -> Rgba {
        let to_u8 = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;

        if self.s == 0.0 {
            let v = to_u8(self.l);
            return Rgba::new(v, v, v, alpha);
        }

        let q = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let p = 2.0 * self.l - q;
        Rgba::new(
            to_u8(hue_to_channel(p, q, self.h + 1.0 / 3.0)),
            to_u8(hue_to_channel(p, q, self.h)),
            to_u8(hue_to_channel(p, q, self.h - 1.0 / 3.0)),
            alpha,
        )
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
