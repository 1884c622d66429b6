//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WeatherError};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Build an opaque colour from a packed `0xRRGGBB` literal.
    pub const fn hex(packed: u32) -> Self {
        Self::rgb((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid(s));
        }

        match hex.len() {
            3 | 4 => {
                // Short form: each digit is doubled
                let digits = hex.chars().map(parse_hex_digit).collect::<Result<Vec<u8>>>()?;
                let a = digits.get(3).copied().unwrap_or(0xF);
                Ok(Self::new(
                    digits[0] << 4 | digits[0],
                    digits[1] << 4 | digits[1],
                    digits[2] << 4 | digits[2],
                    a << 4 | a,
                ))
            }
            6 | 8 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                let a = if hex.len() == 8 {
                    parse_hex_byte(&hex[6..8])?
                } else {
                    255
                };
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(invalid(s)),
        }
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl FromStr for Colour {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

fn invalid(s: &str) -> WeatherError {
    WeatherError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
    }
}

fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| WeatherError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| WeatherError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#4CC3FF").unwrap();
        assert_eq!(c, Colour::rgb(0x4C, 0xC3, 0xFF));

        let c = Colour::from_hex("#e5edff").unwrap();
        assert_eq!(c, Colour::rgb(0xE5, 0xED, 0xFF));
    }

    #[test]
    fn test_from_hex_short_forms() {
        assert_eq!(Colour::from_hex("#F00").unwrap(), Colour::rgb(255, 0, 0));
        assert_eq!(
            Colour::from_hex("#F008").unwrap(),
            Colour::new(255, 0, 0, 0x88)
        );
    }

    #[test]
    fn test_from_hex_8digit() {
        let c = Colour::from_hex("#FF000080").unwrap();
        assert_eq!(c, Colour::new(255, 0, 0, 128));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("").is_err());
        assert!(Colour::from_hex("#ÿÿÿ").is_err());
    }

    #[test]
    fn test_packed_literal() {
        assert_eq!(Colour::hex(0x121C33), Colour::rgb(0x12, 0x1C, 0x33));
    }

    #[test]
    fn test_display() {
        assert_eq!(Colour::hex(0x7CF2C7).to_string(), "#7CF2C7");
        assert_eq!(Colour::new(255, 0, 0, 128).to_string(), "#FF000080");
    }
}
