use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// neutral grey drawn for cells with no recorded value
pub const MISSING_COLOR: Rgb = Rgb::new(0xd9, 0xd9, 0xd9);

/// an opaque 8-bit color, serialized as a `#rrggbb` string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// parses `#rrggbb` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(format!("'{hex}' is not a #rrggbb color"));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| format!("'{hex}' is not a #rrggbb color: {e}"))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// linear interpolation toward `other`, `t` clamped to [0, 1]
    pub fn lerp(&self, other: &Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value)
    }
}

#[cfg(test)]
mod test {
    use super::Rgb;

    #[test]
    fn test_hex() {
        let color = Rgb::from_hex("#9e0142").expect("should parse hex color");
        assert_eq!(color, Rgb::new(0x9e, 0x01, 0x42));
        assert_eq!(color.to_hex(), "#9e0142");
        assert!(Rgb::from_hex("#12345").is_err());
        assert!(Rgb::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn test_lerp_endpoints() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        assert_eq!(black.lerp(&white, 0.0), black);
        assert_eq!(black.lerp(&white, 1.0), white);
        assert_eq!(black.lerp(&white, 0.5), Rgb::new(128, 128, 128));
        assert_eq!(black.lerp(&white, 4.0), white);
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(255, 255, 191)).expect("should serialize");
        assert_eq!(json, "\"#ffffbf\"");
        let back: Rgb = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(back, Rgb::new(255, 255, 191));
    }
}
